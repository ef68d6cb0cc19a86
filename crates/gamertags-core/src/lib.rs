//! Gamer Tags Core Library
//!
//! Profile state, persistence and share text for the Gamer Tags app.
//!
//! ## Overview
//!
//! A user records one tag per gaming platform. The tags are kept in a
//! [`ProfileState`] that always covers the fixed [`Platform`] set, persisted
//! as JSON under a single key by the [`ProfileStore`], and turned into a
//! shareable summary by [`build_summary`]. Copying and sharing go through
//! host-provided traits so the workflows can run against the desktop
//! clipboard or against test doubles.
//!
//! ## Quick Start
//!
//! ```
//! use gamertags_core::{build_summary, MemoryStore, Platform, ProfileStore};
//!
//! let store = ProfileStore::new(MemoryStore::new());
//! let state = store.load();
//! let state = store.commit(store.set(&state, Platform::Steam, "Ace"));
//!
//! assert_eq!(store.load(), state);
//! assert_eq!(build_summary(&state), "Check out my gaming profiles!\nSteam: Ace");
//! ```

pub mod error;
pub mod share;
pub mod storage;
pub mod types;

// Re-exports
pub use error::{GamerTagsError, ParseNameError, Result};
pub use share::{
    build_summary, copy_to_clipboard, record_copy, share_or_fallback, share_payload, Clipboard,
    ConfettiBurst, CopyFeedback, CopyOutcome, CopyTicket, FallbackCopy, Notifier, ShareOutcome,
    SharePayload, ShareSheet, CELEBRATION, COPIED_RESET,
};
pub use storage::{KeyValueStore, MemoryStore, ProfileStore, Storage, PROFILE_KEY};
pub use types::*;
