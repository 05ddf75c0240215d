//! Error types surfaced by the client.

use std::io;

use thiserror::Error;

use crate::transport::TransportError;

/// Errors returned by client construction and delivery.
///
/// Only [`ClientError::InvalidLevel`] is ever returned from
/// [`LogglyClient::send`](crate::LogglyClient::send); delivery failures are
/// reported through [`LogglyClient::try_send`](crate::LogglyClient::try_send).
#[derive(Debug, Error)]
pub enum ClientError {
    /// The level is not a member of the allowed set.
    #[error("invalid level: {0}")]
    InvalidLevel(String),
    /// The envelope could not be encoded as JSON.
    #[error("could not create JSON payload: {0}")]
    Serialization(#[from] serde_json::Error),
    /// The HTTP exchange could not be completed.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// Invalid user supplied configuration.
    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),
    /// Reading a configuration file failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}
