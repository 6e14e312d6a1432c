//! Dictation session state
//!
//! Holds the recording flag and transcript accumulator for one dictation
//! session. The state lives here, on the caller's side of the capture
//! boundary; the submission client receives the finished transcript as a
//! plain argument.

use crate::capture::{CaptureError, SpeechCaptureSource};

/// One dictation session over a speech capture source.
pub struct DictationSession {
    source: Box<dyn SpeechCaptureSource>,
}

impl DictationSession {
    /// Create a session over the given capture source
    pub fn new(source: Box<dyn SpeechCaptureSource>) -> Self {
        Self { source }
    }

    /// Whether the microphone is currently recording
    pub fn is_recording(&self) -> bool {
        self.source.is_capturing()
    }

    /// Mic button behavior: start when idle, stop when recording.
    pub fn toggle_recording(&mut self) -> Result<(), CaptureError> {
        if self.source.is_capturing() {
            self.stop_recording()
        } else {
            self.start_recording()
        }
    }

    /// Start recording
    pub fn start_recording(&mut self) -> Result<(), CaptureError> {
        self.source.start()?;
        log::info!("[Capture] Recording started");
        Ok(())
    }

    /// Stop recording; pending speech is finalized into the transcript
    pub fn stop_recording(&mut self) -> Result<(), CaptureError> {
        self.source.stop()?;
        log::info!(
            "[Capture] Recording stopped ({} finalized segments)",
            self.source.final_segments().len()
        );
        Ok(())
    }

    /// In-progress text for the segment currently being spoken
    pub fn interim_text(&self) -> Option<String> {
        self.source.interim_text()
    }

    /// All finalized segments combined into one transcript string
    pub fn final_transcript(&self) -> String {
        self.source.final_segments().join(" ")
    }

    /// Whether the transcript is ready to send.
    ///
    /// The send control is enabled only once recording has stopped and
    /// there is text to submit. A failed submission changes nothing here,
    /// so the user can simply send again.
    pub fn can_submit(&self) -> bool {
        !self.is_recording() && !self.final_transcript().is_empty()
    }
}
