//! Transcript submission client
//!
//! HTTP client for sending a finished transcript to the Buzz Drop
//! transcript-processing service.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of a single submission attempt.
///
/// Either kind is terminal for the attempt: the client never retries, the
/// caller decides whether to submit again.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The request did not complete: DNS failure, connection refused,
    /// timeout, or an unreadable response body.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The service answered with a non-2xx status.
    #[error("server returned {status}")]
    Server {
        status: reqwest::StatusCode,
        /// Raw response body, kept for the diagnostic log.
        body: String,
    },
}

/// Address of the transcript-processing service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceEndpoint {
    /// Base URL without a trailing slash, e.g. `http://192.168.1.42:8000`
    pub base_url: String,
}

impl ServiceEndpoint {
    /// Create an endpoint from a base URL (trailing slashes are trimmed)
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Get the URL for the process_transcript endpoint
    pub fn process_transcript_url(&self) -> String {
        format!("{}/process_transcript", self.base_url)
    }
}

/// One outbound submission: the transcript text and the flag asking the
/// service to relay the generated message over WhatsApp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TranscriptSubmission {
    pub transcript: String,
    pub send_whatsapp: bool,
}

/// HTTP client for the transcript-processing service.
///
/// Stateless apart from the endpoint; cloning shares the underlying
/// connection pool. Each `submit` call is one independent request, so
/// overlapping submissions are allowed and none can be cancelled.
#[derive(Debug, Clone)]
pub struct TranscriptClient {
    endpoint: ServiceEndpoint,
    http: reqwest::Client,
}

impl TranscriptClient {
    /// Create a client for the given endpoint
    pub fn new(endpoint: ServiceEndpoint) -> Self {
        Self {
            endpoint,
            http: reqwest::Client::new(),
        }
    }

    /// Get the configured endpoint
    pub fn endpoint(&self) -> &ServiceEndpoint {
        &self.endpoint
    }

    /// Submit one transcript to the service.
    ///
    /// Serializes `{ transcript, send_whatsapp }` and issues a single POST.
    /// Any 2xx response resolves with the body parsed as opaque JSON,
    /// untouched; anything else is a `SubmissionError`. The transcript is
    /// sent as given, empty strings included.
    pub async fn submit(
        &self,
        transcript: &str,
        send_whatsapp: bool,
    ) -> Result<serde_json::Value, SubmissionError> {
        let url = self.endpoint.process_transcript_url();
        let payload = TranscriptSubmission {
            transcript: transcript.to_string(),
            send_whatsapp,
        };

        log::info!(
            "[Submission] Sending {} chars to '{}' (send_whatsapp={})",
            payload.transcript.len(),
            url,
            payload.send_whatsapp
        );

        let response = self.http.post(&url).json(&payload).send().await.map_err(|e| {
            log::warn!("[Submission] Request FAILED to '{}': {}", url, e);
            SubmissionError::Transport(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[Submission] Server error from '{}': {}", url, status);
            return Err(SubmissionError::Server { status, body });
        }

        let body: serde_json::Value = response.json().await.map_err(|e| {
            log::warn!("[Submission] Failed to parse response from '{}': {}", url, e);
            SubmissionError::Transport(e)
        })?;

        log::info!("[Submission] Server response: {}", body);

        Ok(body)
    }
}
