//! Summary text derived from a profile.

use crate::types::ProfileState;

/// First line of every summary
pub const SUMMARY_HEADER: &str = "Check out my gaming profiles!";

/// Title handed to the native share capability
pub const SHARE_TITLE: &str = "My Gaming Profiles";

/// Build the shareable summary.
///
/// The header, then `"<Platform>: <tag>"` for every non-empty tag in display
/// order, joined with `\n`. An empty profile yields only the header.
///
/// ```
/// use gamertags_core::{build_summary, Platform, ProfileState};
///
/// let state = ProfileState::empty().set(Platform::Steam, "Ace");
/// assert_eq!(build_summary(&state), "Check out my gaming profiles!\nSteam: Ace");
/// ```
pub fn build_summary(state: &ProfileState) -> String {
    let mut lines = vec![SUMMARY_HEADER.to_string()];
    lines.extend(
        state
            .filled()
            .map(|(platform, tag)| format!("{}: {}", platform.display_name(), tag)),
    );
    lines.join("\n")
}

/// Payload offered to a native share sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    /// Link to the sharing page, when the host has one
    pub url: Option<String>,
}

/// Payload for `state`, titled [`SHARE_TITLE`].
pub fn share_payload(state: &ProfileState, url: Option<&str>) -> SharePayload {
    SharePayload {
        title: SHARE_TITLE.to_string(),
        text: build_summary(state),
        url: url.map(str::to_string),
    }
}
