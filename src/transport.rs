//! HTTP transport used to deliver envelopes.
//!
//! [`Transport`] is the seam between the client and the HTTP stack. The
//! production implementation wraps a `ureq` agent; tests substitute stubs
//! that record calls or simulate failures.

use std::{error::Error as _, io, time::Duration};

use thiserror::Error;
use ureq::{Agent, AgentBuilder, ErrorKind};

/// Overall request timeout applied by [`UreqTransport`] unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(7);

/// Transport-level failure. HTTP status codes are never reported here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(String),
    #[error("connection failed: {0}")]
    Connection(String),
}

/// Performs exactly one HTTP POST per call.
pub trait Transport: Send + Sync {
    /// Post `body` to `url`. Any received response counts as success.
    fn post(&self, url: &str, content_type: &str, body: &str) -> Result<(), TransportError>;
}

/// Blocking transport backed by a shared `ureq` agent.
#[derive(Clone, Debug)]
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        let agent = AgentBuilder::new().timeout(timeout).build();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl Transport for UreqTransport {
    fn post(&self, url: &str, content_type: &str, body: &str) -> Result<(), TransportError> {
        match self
            .agent
            .post(url)
            .set("Content-Type", content_type)
            .send_string(body)
        {
            // The response is dropped unread; non-2xx statuses are not inspected.
            Ok(_) | Err(ureq::Error::Status(..)) => Ok(()),
            Err(ureq::Error::Transport(err)) => Err(classify_transport(&err)),
        }
    }
}

fn classify_transport(err: &ureq::Transport) -> TransportError {
    match err.kind() {
        ErrorKind::InvalidUrl | ErrorKind::UnknownScheme => {
            TransportError::InvalidUrl(err.to_string())
        }
        ErrorKind::Io if is_timeout(err) => TransportError::Timeout,
        _ => TransportError::Connection(err.to_string()),
    }
}

fn is_timeout(err: &ureq::Transport) -> bool {
    err.source()
        .and_then(|source| source.downcast_ref::<io::Error>())
        .is_some_and(|io_err| {
            matches!(
                io_err.kind(),
                io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock
            )
        })
}
