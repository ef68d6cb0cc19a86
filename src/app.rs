use dioxus::prelude::*;
use gamertags_core::{Platform, CELEBRATION};
use gamertags_ui::Confetti;

use crate::components::{ActionBar, ProfileCard, TagForm};
use crate::context::{use_app_state_provider, use_profile_store_provider};
use crate::theme::{theme_class, GLOBAL_STYLES};

/// Root application component.
///
/// Owns the application state, provides it to descendants, and lays out
/// the form, the preview card and the action bar.
#[component]
pub fn App() -> Element {
    let store = use_profile_store_provider();
    let state = use_app_state_provider(&store);

    let profile = state.profile.read().clone();
    let root_class = theme_class((state.theme)());
    let celebrations = (state.celebrations)();

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "{root_class}",
            div { class: "container",
                header { class: "app-header",
                    h1 { class: "app-title", "Gamer Tags" }
                    p { class: "app-subtitle", "Create and share your gaming profile" }
                }
                div { class: "app-columns",
                    div { class: "app-column",
                        TagForm {
                            profile: profile.clone(),
                            onchange: move |(platform, value): (Platform, String)| {
                                state.set_tag(&store, platform, value)
                            },
                        }
                    }
                    div { class: "app-column",
                        ProfileCard { profile }
                    }
                }
                ActionBar {}
            }
            Confetti { burst: CELEBRATION, generation: celebrations }
        }
    }
}
