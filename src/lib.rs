//! Buzz Drop dictation client
//!
//! Tracks a microphone dictation session through a speech capture source
//! and submits the finished transcript to the Buzz Drop
//! transcript-processing service over HTTP.

pub mod capture;
pub mod config;
pub mod dictation;
pub mod submission;

#[cfg(test)]
mod tests;

pub use capture::{CaptureError, ScriptedCapture, SpeechCaptureSource};
pub use config::{ConfigError, ServiceConfig, SERVER_URL_ENV};
pub use dictation::DictationSession;
pub use submission::client::{
    ServiceEndpoint, SubmissionError, TranscriptClient, TranscriptSubmission,
};
pub use submission::outcome::{submit_and_notify, LogNotifier, SubmissionNotifier};

/// Initialize diagnostics: start the logger, then load `.env` if present.
///
/// Call once at startup; later calls are no-ops.
pub fn init() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .try_init();

    match dotenv::dotenv() {
        Ok(path) => log::info!("Loaded .env file from: {:?}", path),
        Err(e) => log::debug!("No .env file found or error loading it: {}", e),
    }
}
