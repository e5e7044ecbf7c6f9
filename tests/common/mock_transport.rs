//! Mock transport for testing

use async_trait::async_trait;
use gh_merge_pr::error::{Error, Result};
use gh_merge_pr::merge::MergeHttpRequest;
use gh_merge_pr::platform::{MergeTransport, TransportResponse};
use std::sync::Mutex;

/// Recording mock for `MergeTransport`
///
/// Returns a canned response (or error) and keeps every request it was
/// asked to send, so tests can check the exact URL, headers and body.
pub struct MockTransport {
    response: Mutex<Option<TransportResponse>>,
    error: Mutex<Option<String>>,
    calls: Mutex<Vec<MergeHttpRequest>>,
}

impl MockTransport {
    /// Mock answering with `status` and `body`
    pub fn responding(status: u16, body: &str) -> Self {
        Self {
            response: Mutex::new(Some(TransportResponse {
                status,
                body: body.to_string(),
            })),
            error: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Mock that fails every send, like an unreachable host
    pub fn failing(msg: &str) -> Self {
        Self {
            response: Mutex::new(None),
            error: Mutex::new(Some(msg.to_string())),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far
    pub fn calls(&self) -> Vec<MergeHttpRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MergeTransport for MockTransport {
    async fn put(&self, request: &MergeHttpRequest) -> Result<TransportResponse> {
        self.calls.lock().unwrap().push(request.clone());

        if let Some(msg) = self.error.lock().unwrap().as_ref() {
            return Err(Error::Transport(msg.clone()));
        }

        Ok(self
            .response
            .lock()
            .unwrap()
            .clone()
            .expect("mock transport has no response configured"))
    }
}
