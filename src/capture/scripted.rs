//! Scripted capture source
//!
//! In-memory `SpeechCaptureSource` used by tests and as a stand-in where
//! no recognition engine is wired up. Segments can be fed while capturing,
//! or staged up front and finalized when capture stops.

use super::{CaptureError, SpeechCaptureSource};

/// Capture source driven by scripted text instead of a microphone.
#[derive(Debug, Default)]
pub struct ScriptedCapture {
    unavailable: bool,
    capturing: bool,
    interim: Option<String>,
    finalized: Vec<String>,
    /// Segments finalized in one batch when capture stops.
    script: Vec<String>,
}

impl ScriptedCapture {
    /// Create an empty scripted source; feed it with `push_interim` and
    /// `finalize_segment` while capturing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source whose segments finalize when capture stops.
    pub fn with_script<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: segments.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Create a source that behaves like a system without speech capture.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Simulate in-progress recognition of the current segment.
    pub fn push_interim(&mut self, text: impl Into<String>) {
        self.interim = Some(text.into());
    }

    /// Simulate the recognizer finalizing the current segment.
    pub fn finalize_segment(&mut self, text: impl Into<String>) {
        self.finalized.push(text.into());
        self.interim = None;
    }
}

impl SpeechCaptureSource for ScriptedCapture {
    fn is_capturing(&self) -> bool {
        self.capturing
    }

    fn start(&mut self) -> Result<(), CaptureError> {
        if self.unavailable {
            return Err(CaptureError::Unavailable);
        }
        if self.capturing {
            return Err(CaptureError::AlreadyCapturing);
        }
        self.capturing = true;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), CaptureError> {
        if !self.capturing {
            return Err(CaptureError::NotCapturing);
        }
        self.capturing = false;
        self.finalized.append(&mut self.script);
        self.interim = None;
        Ok(())
    }

    fn interim_text(&self) -> Option<String> {
        self.interim.clone()
    }

    fn final_segments(&self) -> Vec<String> {
        self.finalized.clone()
    }
}
