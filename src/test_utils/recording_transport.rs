//! A transport that records posts in memory instead of touching the network.

use parking_lot::Mutex;

use crate::transport::{Transport, TransportError};

/// One call made through [`RecordingTransport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostedRequest {
    pub url: String,
    pub content_type: String,
    pub body: String,
}

/// Stores every request and answers with a fixed outcome.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    calls: Mutex<Vec<PostedRequest>>,
    failure: Option<TransportError>,
}

impl RecordingTransport {
    /// Transport whose posts always succeed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Transport whose posts always fail with `err`.
    pub fn failing(err: TransportError) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: Some(err),
        }
    }

    pub fn calls(&self) -> Vec<PostedRequest> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl Transport for RecordingTransport {
    fn post(&self, url: &str, content_type: &str, body: &str) -> Result<(), TransportError> {
        self.calls.lock().push(PostedRequest {
            url: url.to_owned(),
            content_type: content_type.to_owned(),
            body: body.to_owned(),
        });
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}
