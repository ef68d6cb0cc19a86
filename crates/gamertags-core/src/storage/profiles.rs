//! Profile Storage - load and persist the tag mapping
//!
//! The whole [`ProfileState`] is stored as one JSON object under
//! [`PROFILE_KEY`]. Loading never fails: an absent, unreadable or malformed
//! value yields the all-empty state.

use std::sync::Arc;

use super::KeyValueStore;
use crate::error::Result;
use crate::types::{Platform, ProfileState};

/// Storage key holding the serialized profile
pub const PROFILE_KEY: &str = "gamerTags";

/// Profile Store backed by any [`KeyValueStore`]
#[derive(Clone)]
pub struct ProfileStore {
    backend: Arc<dyn KeyValueStore>,
}

impl ProfileStore {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Read the persisted profile, degrading to the all-empty state.
    pub fn load(&self) -> ProfileState {
        let raw = match self.backend.get(PROFILE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("no saved profile, starting empty");
                return ProfileState::empty();
            }
            Err(e) => {
                tracing::warn!("Failed to read saved profile: {}", e);
                return ProfileState::empty();
            }
        };

        match ProfileState::from_json(&raw) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!("Ignoring malformed saved profile: {}", e);
                ProfileState::empty()
            }
        }
    }

    /// `state` with `platform` mapped to `value`. Does not persist.
    pub fn set(
        &self,
        state: &ProfileState,
        platform: Platform,
        value: impl Into<String>,
    ) -> ProfileState {
        state.set(platform, value)
    }

    /// The all-empty state. Does not persist.
    pub fn clear(&self) -> ProfileState {
        ProfileState::empty()
    }

    /// Write the full mapping, replacing any previous value.
    pub fn persist(&self, state: &ProfileState) -> Result<()> {
        let json = state.to_json()?;
        self.backend.set(PROFILE_KEY, &json)
    }

    /// Persist `state` and hand it back.
    ///
    /// A failed write is logged; the in-memory state stays authoritative.
    pub fn commit(&self, state: ProfileState) -> ProfileState {
        if let Err(e) = self.persist(&state) {
            tracing::error!("Failed to persist profile: {}", e);
        }
        state
    }
}
