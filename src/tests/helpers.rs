//! Shared test helpers: a mock transcript-processing service and a
//! counting outcome notifier.

use serde_json::Value;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;
use warp::http::StatusCode;
use warp::Filter;

use crate::submission::client::{ServiceEndpoint, SubmissionError, TranscriptClient};
use crate::submission::outcome::SubmissionNotifier;

/// Local stand-in for the transcript-processing service.
///
/// Answers every POST to /process_transcript with a fixed status and body,
/// and records the request bodies it receives. Must be started from within
/// a tokio runtime. Shuts down when dropped.
pub struct MockService {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<Value>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockService {
    pub fn start(status: u16, body: Value) -> Self {
        let requests: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(Vec::new()));
        let seen = requests.clone();

        let route = warp::path("process_transcript")
            .and(warp::post())
            .and(warp::body::json())
            .map(move |request: Value| {
                seen.lock().expect("request log poisoned").push(request);
                warp::reply::with_status(
                    warp::reply::json(&body),
                    StatusCode::from_u16(status).expect("valid status code"),
                )
            });

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let (addr, server) =
            warp::serve(route).bind_with_graceful_shutdown(([127, 0, 0, 1], 0), async {
                shutdown_rx.await.ok();
            });
        tokio::spawn(server);

        Self {
            addr,
            requests,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    /// Client pointed at this mock service
    pub fn client(&self) -> TranscriptClient {
        TranscriptClient::new(ServiceEndpoint::new(format!("http://{}", self.addr)))
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().expect("request log poisoned").len()
    }

    pub fn last_request(&self) -> Option<Value> {
        self.requests
            .lock()
            .expect("request log poisoned")
            .last()
            .cloned()
    }
}

impl Drop for MockService {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Notifier that records every outcome it is handed.
#[derive(Debug, Default)]
pub struct CountingNotifier {
    pub successes: Vec<Value>,
    pub failures: usize,
}

impl SubmissionNotifier for CountingNotifier {
    fn on_success(&mut self, response: &Value) {
        self.successes.push(response.clone());
    }

    fn on_failure(&mut self, _error: &SubmissionError) {
        self.failures += 1;
    }
}
