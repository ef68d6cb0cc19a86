//! Tag Form - one input per platform

use dioxus::prelude::*;
use gamertags_core::{Platform, ProfileState};
use gamertags_ui::TagInput;

/// Inputs for every platform, in display order.
///
/// Every keystroke reports `(platform, full value)`.
#[component]
pub fn TagForm(profile: ProfileState, onchange: EventHandler<(Platform, String)>) -> Element {
    let fields: Vec<(Platform, String)> = profile
        .entries()
        .map(|(platform, tag)| (platform, tag.to_string()))
        .collect();

    rsx! {
        div { class: "tag-form",
            for (platform, value) in fields {
                TagInput {
                    key: "{platform}",
                    platform,
                    value,
                    oninput: move |value: String| onchange.call((platform, value)),
                }
            }
        }
    }
}
