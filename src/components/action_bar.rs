//! Action Bar - Copy, Share, Clear All and the theme toggle

use dioxus::prelude::*;
use gamertags_core::ThemeMode;
use gamertags_ui::{Button, ButtonVariant};

use crate::actions::{copy_summary, share_summary};
use crate::context::{use_app_state, use_profile_store};

/// Icon and label for the copy button
fn copy_label(copied: bool) -> (&'static str, &'static str) {
    if copied {
        ("\u{2713}", "Copied!")
    } else {
        ("\u{29C9}", "Copy")
    }
}

/// Icon and label for the theme toggle: names the mode it switches to
fn theme_toggle_label(theme: ThemeMode) -> (&'static str, &'static str) {
    match theme {
        ThemeMode::Dark => ("\u{2600}", "Light Mode"),
        ThemeMode::Light => ("\u{263E}", "Dark Mode"),
    }
}

#[component]
pub fn ActionBar() -> Element {
    let state = use_app_state();
    let store = use_profile_store();
    let copied = state.feedback.read().is_copied();
    let theme = (state.theme)();

    let (copy_icon, copy_text) = copy_label(copied);
    let (theme_icon, theme_text) = theme_toggle_label(theme);

    rsx! {
        div { class: "action-bar",
            Button {
                variant: ButtonVariant::Primary,
                icon: copy_icon.to_string(),
                class: if copied { "copied".to_string() } else { String::new() },
                onclick: move |_| copy_summary(state),
                "{copy_text}"
            }
            Button {
                variant: ButtonVariant::Share,
                icon: "\u{21AA}".to_string(),
                onclick: move |_| share_summary(state),
                "Share"
            }
            Button {
                variant: ButtonVariant::Danger,
                icon: "\u{2716}".to_string(),
                onclick: move |_| state.clear_all(&store),
                "Clear All"
            }
            Button {
                variant: ButtonVariant::Neutral,
                icon: theme_icon.to_string(),
                onclick: move |_| state.toggle_theme(),
                "{theme_text}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_label_follows_flag() {
        assert_eq!(copy_label(false).1, "Copy");
        assert_eq!(copy_label(true).1, "Copied!");
    }

    #[test]
    fn theme_toggle_names_the_other_mode() {
        assert_eq!(theme_toggle_label(ThemeMode::Dark).1, "Light Mode");
        assert_eq!(theme_toggle_label(ThemeMode::Light).1, "Dark Mode");
    }
}
