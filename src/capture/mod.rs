//! Speech capture
//!
//! The dictation session consumes speech recognition through the
//! `SpeechCaptureSource` interface: a recording on/off signal, start/stop
//! controls, an interim (in-progress) text value, and the sequence of
//! finalized segments. The recognition engine itself lives behind this
//! boundary and is not part of this crate.

pub mod scripted;

pub use scripted::ScriptedCapture;

use thiserror::Error;

/// Errors from controlling a capture source.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CaptureError {
    /// No speech recognition capability exists on this system.
    #[error("speech capture is not available on this system")]
    Unavailable,
    #[error("already capturing")]
    AlreadyCapturing,
    #[error("not capturing")]
    NotCapturing,
}

/// Source of live speech-to-text output.
pub trait SpeechCaptureSource: Send {
    /// Whether the microphone is currently being captured.
    fn is_capturing(&self) -> bool;

    /// Begin capturing speech.
    fn start(&mut self) -> Result<(), CaptureError>;

    /// Stop capturing; any pending speech is finalized.
    fn stop(&mut self) -> Result<(), CaptureError>;

    /// In-progress text for the segment currently being spoken, if any.
    fn interim_text(&self) -> Option<String>;

    /// Finalized segments recognized so far, in recognition order.
    fn final_segments(&self) -> Vec<String>;
}
