//! Application state shared through Dioxus context.
//!
//! `App` opens the [`ProfileStore`], creates one [`AppState`] and provides
//! both; descendants read them with [`use_profile_store`] and
//! [`use_app_state`].
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! let store = use_profile_store_provider();
//! let state = use_app_state_provider(&store);
//!
//! // In child components
//! let store = use_profile_store();
//! let state = use_app_state();
//! state.clear_all(&store);
//! ```

use std::path::PathBuf;

use dioxus::prelude::*;
use gamertags_core::{
    build_summary, share_payload, CopyFeedback, Platform, ProfileState, ProfileStore,
    SharePayload, ThemeMode,
};

use crate::host::open_profile_store;

/// Settings chosen at launch.
#[derive(Clone, Debug)]
pub struct LaunchConfig {
    /// Directory holding the profile database
    pub data_dir: PathBuf,
    /// Theme the window opens in
    pub initial_theme: ThemeMode,
    /// Link attached to share payloads
    pub share_url: Option<String>,
}

/// Get the launch configuration.
pub fn launch_config() -> LaunchConfig {
    crate::launch_config()
}

/// Apply one tag edit to `current` and persist the result.
pub fn apply_tag(
    store: &ProfileStore,
    current: &ProfileState,
    platform: Platform,
    value: String,
) -> ProfileState {
    store.commit(store.set(current, platform, value))
}

/// Empty every tag and persist.
pub fn clear_tags(store: &ProfileStore) -> ProfileState {
    store.commit(store.clear())
}

/// Every piece of mutable UI state.
///
/// All fields are signals, so the struct is `Copy` and can be moved into
/// any number of event handlers. The [`ProfileStore`] is provided
/// separately; see [`use_profile_store`].
#[derive(Clone, Copy)]
pub struct AppState {
    pub profile: Signal<ProfileState>,
    pub theme: Signal<ThemeMode>,
    pub feedback: Signal<CopyFeedback>,
    /// Number of celebrations played so far; drives the confetti layer
    pub celebrations: Signal<u32>,
}

impl AppState {
    /// Set one platform's tag and persist the whole profile.
    pub fn set_tag(mut self, store: &ProfileStore, platform: Platform, value: String) {
        let next = apply_tag(store, &self.profile.peek(), platform, value);
        self.profile.set(next);
    }

    pub fn clear_all(mut self, store: &ProfileStore) {
        let next = clear_tags(store);
        tracing::info!("Cleared all tags");
        self.profile.set(next);
    }

    pub fn toggle_theme(mut self) {
        let next = self.theme.peek().toggle();
        tracing::debug!("Switched to {} theme", next);
        self.theme.set(next);
    }

    /// Summary of the current profile.
    pub fn summary(&self) -> String {
        build_summary(&self.profile.peek())
    }

    pub fn share_payload(&self) -> SharePayload {
        share_payload(&self.profile.peek(), launch_config().share_url.as_deref())
    }
}

/// Open the profile store and provide it to all descendants.
pub fn use_profile_store_provider() -> ProfileStore {
    let store = use_hook(|| open_profile_store(&launch_config().data_dir));
    use_context_provider(|| store.clone());
    store
}

/// Hook to access the profile store from context.
pub fn use_profile_store() -> ProfileStore {
    use_context::<ProfileStore>()
}

/// Create the application state and provide it to all descendants.
pub fn use_app_state_provider(store: &ProfileStore) -> AppState {
    let profile = use_signal(|| store.load());
    let theme = use_signal(|| launch_config().initial_theme);
    let feedback = use_signal(CopyFeedback::new);
    let celebrations = use_signal(|| 0u32);

    use_context_provider(|| AppState {
        profile,
        theme,
        feedback,
        celebrations,
    })
}

/// Hook to access the application state from context.
pub fn use_app_state() -> AppState {
    use_context::<AppState>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamertags_core::MemoryStore;

    #[test]
    fn apply_tag_persists_the_edited_profile() {
        let store = ProfileStore::new(MemoryStore::new());
        let first = apply_tag(&store, &ProfileState::empty(), Platform::Steam, "Ace".into());
        let second = apply_tag(&store, &first, Platform::Xbox, "Chief".into());

        assert_eq!(second.get(Platform::Steam), "Ace");
        assert_eq!(second.get(Platform::Xbox), "Chief");
        assert_eq!(store.load(), second);
    }

    #[test]
    fn apply_tag_persists_an_emptied_field() {
        let store = ProfileStore::new(MemoryStore::new());
        let filled = apply_tag(&store, &ProfileState::empty(), Platform::Twitch, "live".into());
        let emptied = apply_tag(&store, &filled, Platform::Twitch, String::new());

        assert!(emptied.is_empty());
        assert_eq!(store.load(), emptied);
    }

    #[test]
    fn clear_tags_persists_the_empty_profile() {
        let store = ProfileStore::new(MemoryStore::new());
        apply_tag(&store, &ProfileState::empty(), Platform::Discord, "ace#0001".into());

        let cleared = clear_tags(&store);

        assert_eq!(cleared, ProfileState::empty());
        assert_eq!(store.load(), cleared);
    }
}
