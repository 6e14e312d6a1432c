//! Submission outcome reporting
//!
//! Turns the result of a submission into exactly one user-visible outcome
//! plus a diagnostic log entry for developer inspection.

use serde_json::Value;

use super::client::{SubmissionError, TranscriptClient};

/// Caller-facing outcome sink.
///
/// Implementations present the result of a submission to the user (status
/// line, toast, alert). Exactly one of the two methods runs per attempt.
pub trait SubmissionNotifier {
    /// The service accepted the transcript; `response` is its opaque body.
    fn on_success(&mut self, response: &Value);
    /// The submission failed. The raw error has already been written to
    /// the diagnostic log when this runs.
    fn on_failure(&mut self, error: &SubmissionError);
}

/// Notifier that reports outcomes through the diagnostic log only.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl SubmissionNotifier for LogNotifier {
    fn on_success(&mut self, response: &Value) {
        log::info!("[Submission] Transcript processed: {}", response);
    }

    fn on_failure(&mut self, _error: &SubmissionError) {
        log::info!("[Submission] Submission failed, transcript kept for manual retry");
    }
}

/// Submit one transcript and report the outcome exactly once.
///
/// A failure leaves no state behind; the caller may retry manually with
/// the same transcript.
pub async fn submit_and_notify<N: SubmissionNotifier>(
    client: &TranscriptClient,
    transcript: &str,
    send_whatsapp: bool,
    notifier: &mut N,
) -> Result<Value, SubmissionError> {
    match client.submit(transcript, send_whatsapp).await {
        Ok(response) => {
            notifier.on_success(&response);
            Ok(response)
        }
        Err(error) => {
            log::error!("[Submission] Error sending transcript: {}", error);
            notifier.on_failure(&error);
            Err(error)
        }
    }
}
