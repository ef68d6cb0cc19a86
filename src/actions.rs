//! Copy and Share actions wired to the desktop host.

use dioxus::prelude::*;
use gamertags_core::{
    record_copy, share_or_fallback, Clipboard, CopyOutcome, CopyTicket, GamerTagsError,
    COPIED_RESET,
};

use crate::context::AppState;
use crate::host::{DialogNotifier, SystemClipboard, TransientClipboard};

/// Copy the summary to the clipboard.
///
/// The write runs on the blocking pool. On success the "copied" flag turns
/// on, confetti plays, and the flag turns off [`COPIED_RESET`] later unless
/// a newer copy has replaced the ticket.
pub fn copy_summary(mut state: AppState) {
    let text = state.summary();

    spawn(async move {
        let result = tokio::task::spawn_blocking(move || SystemClipboard.write_text(&text))
            .await
            .unwrap_or_else(|e| Err(GamerTagsError::Clipboard(e.to_string())));

        let mut feedback = state.feedback.peek().clone();
        let outcome = record_copy(result, &mut feedback, &DialogNotifier);
        state.feedback.set(feedback);

        if let CopyOutcome::Copied(ticket) = outcome {
            state.celebrations += 1;
            reset_after(ticket, |ticket| state.feedback.write().expire(ticket)).await;
        }
    });
}

/// Wait [`COPIED_RESET`], then hand `ticket` to `expire`.
///
/// Returns whatever `expire` reports: `false` when a newer copy has already
/// replaced the ticket.
pub async fn reset_after<F>(ticket: CopyTicket, expire: F) -> bool
where
    F: FnOnce(CopyTicket) -> bool,
{
    tokio::time::sleep(COPIED_RESET).await;
    expire(ticket)
}

/// Share the summary, falling back to a plain copy.
pub fn share_summary(state: AppState) {
    let payload = state.share_payload();

    // Desktop webviews expose no native share sheet.
    let outcome = share_or_fallback(None, &mut TransientClipboard, &payload, &DialogNotifier);
    tracing::debug!("Share finished: {:?}", outcome);
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamertags_core::CopyFeedback;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tokio::task::JoinHandle;

    const ONE_MS: Duration = Duration::from_millis(1);

    fn schedule_reset(
        feedback: &Arc<Mutex<CopyFeedback>>,
        ticket: CopyTicket,
    ) -> JoinHandle<bool> {
        let feedback = Arc::clone(feedback);
        tokio::spawn(reset_after(ticket, move |ticket| {
            feedback.lock().unwrap().expire(ticket)
        }))
    }

    fn is_copied(feedback: &Arc<Mutex<CopyFeedback>>) -> bool {
        feedback.lock().unwrap().is_copied()
    }

    #[tokio::test(start_paused = true)]
    async fn copied_flag_clears_after_reset_delay() {
        let feedback = Arc::new(Mutex::new(CopyFeedback::new()));
        let ticket = feedback.lock().unwrap().mark_copied();
        let reset = schedule_reset(&feedback, ticket);
        // Let the timer register before moving the clock
        tokio::task::yield_now().await;

        tokio::time::advance(COPIED_RESET - ONE_MS).await;
        tokio::task::yield_now().await;
        assert!(is_copied(&feedback));
        assert!(!reset.is_finished());

        tokio::time::advance(ONE_MS).await;
        assert!(reset.await.unwrap());
        assert!(!is_copied(&feedback));
    }

    #[tokio::test(start_paused = true)]
    async fn older_reset_leaves_newer_copy_flagged() {
        let feedback = Arc::new(Mutex::new(CopyFeedback::new()));
        let first = feedback.lock().unwrap().mark_copied();
        let first_reset = schedule_reset(&feedback, first);
        tokio::task::yield_now().await;

        tokio::time::advance(Duration::from_millis(1000)).await;
        let second = feedback.lock().unwrap().mark_copied();
        let second_reset = schedule_reset(&feedback, second);
        tokio::task::yield_now().await;

        tokio::time::advance(Duration::from_millis(1000)).await;
        assert!(!first_reset.await.unwrap());
        assert!(is_copied(&feedback));

        tokio::time::advance(Duration::from_millis(1000)).await;
        assert!(second_reset.await.unwrap());
        assert!(!is_copied(&feedback));
    }
}
