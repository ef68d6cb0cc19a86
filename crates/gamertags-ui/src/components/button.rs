//! Button Components
//!
//! Pill buttons for the action bar:
//! - Primary: copy (purple)
//! - Share: share (blue)
//! - Danger: destructive actions such as clearing (red)
//! - Neutral: settings such as the theme toggle (gray)

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Share,
    Danger,
    Neutral,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Share => "btn-share",
            ButtonVariant::Danger => "btn-danger",
            ButtonVariant::Neutral => "btn-neutral",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Leading icon glyph
    #[props(default)]
    pub icon: Option<String>,
    /// Button content (label text)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Action button with an optional leading icon
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Danger,
///         icon: "\u{1F5D1}".to_string(),
///         onclick: move |_| clear_all(),
///         "Clear All"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(props.variant, props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            onclick: move |_| props.onclick.call(()),
            if let Some(icon) = &props.icon {
                span { class: "btn-icon", "aria-hidden": "true", "{icon}" }
            }
            {props.children}
        }
    }
}

fn button_class(variant: ButtonVariant, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("btn {} {}", variant.class(), extra),
        _ => format!("btn {}", variant.class()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Share.class(), "btn-share");
        assert_eq!(ButtonVariant::Danger.class(), "btn-danger");
        assert_eq!(ButtonVariant::Neutral.class(), "btn-neutral");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn button_class_appends_extra() {
        assert_eq!(button_class(ButtonVariant::Share, None), "btn btn-share");
        assert_eq!(button_class(ButtonVariant::Share, Some("")), "btn btn-share");
        assert_eq!(
            button_class(ButtonVariant::Primary, Some("copied")),
            "btn btn-primary copied"
        );
    }
}
