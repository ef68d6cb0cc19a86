//! Profile Card Component
//!
//! Live preview of the profile: one row per platform that has a tag.

use dioxus::prelude::*;
use gamertags_core::{Platform, ProfileState};
use gamertags_ui::{platform_accent_class, PlatformIcon};

/// A rendered card row
#[derive(Debug, Clone, PartialEq)]
struct CardRow {
    platform: Platform,
    class: String,
    tag: String,
}

fn card_rows(profile: &ProfileState) -> Vec<CardRow> {
    profile
        .filled()
        .map(|(platform, tag)| CardRow {
            platform,
            class: format!("profile-row {}", platform_accent_class(platform)),
            tag: tag.to_string(),
        })
        .collect()
}

/// Card listing every platform that has a tag
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     ProfileCard { profile: state.profile.read().clone() }
/// }
/// ```
#[component]
pub fn ProfileCard(profile: ProfileState) -> Element {
    let rows = card_rows(&profile);

    rsx! {
        div { class: "profile-card",
            div { class: "profile-card-glow" }
            div { class: "profile-card-body",
                h2 { class: "profile-card-title", "Gamer Profile" }
                div { class: "profile-rows",
                    for row in rows {
                        div { key: "{row.platform}", class: "{row.class}",
                            PlatformIcon { platform: row.platform }
                            span { class: "profile-row-platform", "{row.platform}:" }
                            span { class: "profile-row-tag", "{row.tag}" }
                        }
                    }
                }
            }
        }
    }
}
