//! Share/Copy workflows.
//!
//! Hosts provide the side effects through four small traits:
//! - [`Clipboard`]: the primary clipboard write
//! - [`FallbackCopy`]: a synchronous copy that works without clipboard
//!   permission, used when sharing is not possible
//! - [`ShareSheet`]: an optional native share capability
//! - [`Notifier`]: a blocking message to the user
//!
//! No failure escapes these functions. Each one is reported to the user once
//! and never retried.

use crate::error::Result;

mod feedback;
mod summary;

pub use feedback::{CopyFeedback, CopyTicket, COPIED_RESET};
pub use summary::{build_summary, share_payload, SharePayload, SHARE_TITLE, SUMMARY_HEADER};

/// Shown when the primary clipboard write fails
pub const COPY_FAILED_MESSAGE: &str =
    "Unable to copy. Please manually copy the information to share.";

/// Shown after the fallback copy succeeded
pub const FALLBACK_COPIED_MESSAGE: &str = "Copied to clipboard! You can now paste and share it.";

/// Shown when even the fallback copy failed
pub const FALLBACK_FAILED_MESSAGE: &str =
    "Oops, unable to copy. Please manually copy the text to share.";

/// Shape of the celebration played after a successful copy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfettiBurst {
    pub particle_count: u32,
    /// Fan angle in degrees, centred on straight up
    pub spread_degrees: f32,
    /// Launch point as a fraction of the viewport height from the top
    pub origin_y: f32,
}

pub const CELEBRATION: ConfettiBurst = ConfettiBurst {
    particle_count: 100,
    spread_degrees: 70.0,
    origin_y: 0.6,
};

/// Primary clipboard write
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Synchronous last-resort copy
pub trait FallbackCopy {
    fn copy_text(&mut self, text: &str) -> Result<()>;
}

/// Native share capability
pub trait ShareSheet {
    /// Whether this payload can be handed to [`ShareSheet::share`].
    fn can_share(&self, payload: &SharePayload) -> bool;

    fn share(&mut self, payload: &SharePayload) -> Result<()>;
}

/// User-visible, blocking message
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// Result of a copy action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Text is on the clipboard; expire the ticket after [`COPIED_RESET`]
    Copied(CopyTicket),
    /// The user was told to copy manually
    Failed,
}

/// Result of a share action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The native share sheet accepted the payload
    Shared,
    /// The text was copied for the user to paste somewhere
    CopiedForManualShare,
    /// Nothing worked; the user was told to copy manually
    Failed,
}

/// Write `text` to the clipboard and update `feedback`.
pub fn copy_to_clipboard<C, N>(
    clipboard: &mut C,
    text: &str,
    feedback: &mut CopyFeedback,
    notifier: &N,
) -> CopyOutcome
where
    C: Clipboard + ?Sized,
    N: Notifier + ?Sized,
{
    let result = clipboard.write_text(text);
    record_copy(result, feedback, notifier)
}

/// Apply the result of a clipboard write performed elsewhere.
///
/// Hosts that run the write off the UI thread call this once it completes.
pub fn record_copy<N>(
    result: Result<()>,
    feedback: &mut CopyFeedback,
    notifier: &N,
) -> CopyOutcome
where
    N: Notifier + ?Sized,
{
    match result {
        Ok(()) => {
            let ticket = feedback.mark_copied();
            tracing::info!("Copied profile summary to clipboard");
            CopyOutcome::Copied(ticket)
        }
        Err(e) => {
            tracing::error!("Error copying to clipboard: {}", e);
            notifier.alert(COPY_FAILED_MESSAGE);
            CopyOutcome::Failed
        }
    }
}

/// Share through the native sheet when it accepts the payload, otherwise
/// copy the text for manual sharing.
pub fn share_or_fallback<F, N>(
    share_sheet: Option<&mut dyn ShareSheet>,
    fallback: &mut F,
    payload: &SharePayload,
    notifier: &N,
) -> ShareOutcome
where
    F: FallbackCopy + ?Sized,
    N: Notifier + ?Sized,
{
    match share_sheet {
        Some(sheet) if sheet.can_share(payload) => match sheet.share(payload) {
            Ok(()) => {
                tracing::info!("Shared profile summary");
                ShareOutcome::Shared
            }
            Err(e) => {
                tracing::error!("Error sharing: {}", e);
                fallback_share(fallback, &payload.text, notifier)
            }
        },
        Some(_) => {
            tracing::debug!("Share sheet cannot handle payload, copying instead");
            fallback_share(fallback, &payload.text, notifier)
        }
        None => {
            tracing::debug!("No share sheet available, copying instead");
            fallback_share(fallback, &payload.text, notifier)
        }
    }
}

fn fallback_share<F, N>(fallback: &mut F, text: &str, notifier: &N) -> ShareOutcome
where
    F: FallbackCopy + ?Sized,
    N: Notifier + ?Sized,
{
    match fallback.copy_text(text) {
        Ok(()) => {
            notifier.alert(FALLBACK_COPIED_MESSAGE);
            ShareOutcome::CopiedForManualShare
        }
        Err(e) => {
            tracing::error!("Fallback: unable to copy: {}", e);
            notifier.alert(FALLBACK_FAILED_MESSAGE);
            ShareOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GamerTagsError;
    use crate::types::{Platform, ProfileState};
    use std::cell::RefCell;

    #[derive(Default)]
    struct Alerts(RefCell<Vec<String>>);

    impl Notifier for Alerts {
        fn alert(&self, message: &str) {
            self.0.borrow_mut().push(message.to_string());
        }
    }

    impl Alerts {
        fn messages(&self) -> Vec<String> {
            self.0.borrow().clone()
        }
    }

    #[derive(Default)]
    struct FakeClipboard {
        deny: bool,
        contents: Option<String>,
    }

    impl Clipboard for FakeClipboard {
        fn write_text(&mut self, text: &str) -> Result<()> {
            if self.deny {
                return Err(GamerTagsError::Clipboard("permission denied".to_string()));
            }
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    impl FallbackCopy for FakeClipboard {
        fn copy_text(&mut self, text: &str) -> Result<()> {
            self.write_text(text)
        }
    }

    struct FakeSheet {
        accepts: bool,
        fails: bool,
        shared: Vec<SharePayload>,
    }

    impl FakeSheet {
        fn new(accepts: bool, fails: bool) -> Self {
            Self {
                accepts,
                fails,
                shared: Vec::new(),
            }
        }
    }

    impl ShareSheet for FakeSheet {
        fn can_share(&self, _payload: &SharePayload) -> bool {
            self.accepts
        }

        fn share(&mut self, payload: &SharePayload) -> Result<()> {
            if self.fails {
                return Err(GamerTagsError::Share("user dismissed".to_string()));
            }
            self.shared.push(payload.clone());
            Ok(())
        }
    }

    fn payload() -> SharePayload {
        let state = ProfileState::empty().set(Platform::Steam, "Ace");
        share_payload(&state, None)
    }

    #[test]
    fn test_copy_success_sets_flag() {
        let mut clipboard = FakeClipboard::default();
        let mut feedback = CopyFeedback::new();
        let alerts = Alerts::default();

        let outcome = copy_to_clipboard(&mut clipboard, "hello", &mut feedback, &alerts);

        assert!(matches!(outcome, CopyOutcome::Copied(_)));
        assert!(feedback.is_copied());
        assert_eq!(clipboard.contents.as_deref(), Some("hello"));
        assert!(alerts.messages().is_empty());
    }

    #[test]
    fn test_copy_rejected_keeps_flag_off_and_alerts() {
        let state = ProfileState::empty().set(Platform::Xbox, "Chief");
        let mut clipboard = FakeClipboard {
            deny: true,
            ..Default::default()
        };
        let mut feedback = CopyFeedback::new();
        let alerts = Alerts::default();

        let outcome = copy_to_clipboard(
            &mut clipboard,
            &build_summary(&state),
            &mut feedback,
            &alerts,
        );

        assert_eq!(outcome, CopyOutcome::Failed);
        assert!(!feedback.is_copied());
        assert_eq!(alerts.messages(), vec![COPY_FAILED_MESSAGE.to_string()]);
    }

    #[test]
    fn test_record_copy_ticket_expires_flag() {
        let mut feedback = CopyFeedback::new();
        let alerts = Alerts::default();

        let CopyOutcome::Copied(ticket) = record_copy(Ok(()), &mut feedback, &alerts) else {
            panic!("expected a successful copy");
        };
        assert!(feedback.expire(ticket));
        assert!(!feedback.is_copied());
    }

    #[test]
    fn test_share_without_sheet_falls_back() {
        let mut fallback = FakeClipboard::default();
        let alerts = Alerts::default();
        let payload = payload();

        let outcome = share_or_fallback(None, &mut fallback, &payload, &alerts);

        assert_eq!(outcome, ShareOutcome::CopiedForManualShare);
        assert_eq!(fallback.contents.as_deref(), Some(payload.text.as_str()));
        assert_eq!(alerts.messages(), vec![FALLBACK_COPIED_MESSAGE.to_string()]);
    }

    #[test]
    fn test_share_uses_sheet_when_it_accepts() {
        let mut sheet = FakeSheet::new(true, false);
        let mut fallback = FakeClipboard::default();
        let alerts = Alerts::default();
        let payload = payload();

        let outcome = share_or_fallback(Some(&mut sheet), &mut fallback, &payload, &alerts);

        assert_eq!(outcome, ShareOutcome::Shared);
        assert_eq!(sheet.shared, vec![payload]);
        assert!(fallback.contents.is_none());
        assert!(alerts.messages().is_empty());
    }

    #[test]
    fn test_share_sheet_refusing_payload_falls_back() {
        let mut sheet = FakeSheet::new(false, false);
        let mut fallback = FakeClipboard::default();
        let alerts = Alerts::default();

        let outcome = share_or_fallback(Some(&mut sheet), &mut fallback, &payload(), &alerts);

        assert_eq!(outcome, ShareOutcome::CopiedForManualShare);
        assert!(sheet.shared.is_empty());
    }

    #[test]
    fn test_share_failure_falls_back() {
        let mut sheet = FakeSheet::new(true, true);
        let mut fallback = FakeClipboard::default();
        let alerts = Alerts::default();

        let outcome = share_or_fallback(Some(&mut sheet), &mut fallback, &payload(), &alerts);

        assert_eq!(outcome, ShareOutcome::CopiedForManualShare);
        assert_eq!(alerts.messages(), vec![FALLBACK_COPIED_MESSAGE.to_string()]);
    }

    #[test]
    fn test_fallback_failure_alerts() {
        let mut fallback = FakeClipboard {
            deny: true,
            ..Default::default()
        };
        let alerts = Alerts::default();

        let outcome = share_or_fallback(None, &mut fallback, &payload(), &alerts);

        assert_eq!(outcome, ShareOutcome::Failed);
        assert_eq!(alerts.messages(), vec![FALLBACK_FAILED_MESSAGE.to_string()]);
    }
}
