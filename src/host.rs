//! Desktop host integrations.
//!
//! Implements the core's side-effect traits on top of the desktop:
//! `arboard` for the clipboard, `rfd` for blocking messages, and redb for
//! storage.

use std::path::Path;

use gamertags_core::{
    Clipboard, FallbackCopy, GamerTagsError, MemoryStore, Notifier, ProfileStore, Result, Storage,
};
use rfd::{MessageButtons, MessageDialog, MessageLevel};

/// Open the profile store in `data_dir`.
///
/// When the database cannot be opened the app still runs on an in-memory
/// store; edits are then lost on exit.
pub fn open_profile_store(data_dir: &Path) -> ProfileStore {
    match Storage::open_in(data_dir) {
        Ok(storage) => ProfileStore::new(storage),
        Err(e) => {
            tracing::warn!(
                "Failed to open storage in {:?}, tags will not be saved: {}",
                data_dir,
                e
            );
            ProfileStore::new(MemoryStore::new())
        }
    }
}

fn write_system_clipboard(text: &str) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| GamerTagsError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| GamerTagsError::Clipboard(e.to_string()))
}

/// System clipboard, written from a blocking worker by the copy action
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        write_system_clipboard(text)
    }
}

/// Short-lived clipboard handle created on the UI thread for one copy
pub struct TransientClipboard;

impl FallbackCopy for TransientClipboard {
    fn copy_text(&mut self, text: &str) -> Result<()> {
        write_system_clipboard(text)
    }
}

/// Native message box
pub struct DialogNotifier;

impl Notifier for DialogNotifier {
    fn alert(&self, message: &str) {
        tracing::debug!("Showing dialog: {}", message);
        let _ = MessageDialog::new()
            .set_title("Gamer Tags")
            .set_description(message)
            .set_level(MessageLevel::Info)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
