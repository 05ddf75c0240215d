//! Blocking client for forwarding leveled log messages to a Loggly HTTP input.
//!
//! A [`LogglyClient`] is bound to one endpoint, built from a customer token
//! and a source tag. Each call to [`LogglyClient::send`] validates the level,
//! stamps the message with a millisecond-precision UTC timestamp and issues a
//! single JSON `POST`. Nothing is queued, batched or retried.
//!
//! ```no_run
//! use loggly_rs::LogglyClient;
//!
//! let client = LogglyClient::from_env("billing");
//! client.send("info", "invoice generated")?;
//! client.echo_send("error", "payment gateway unreachable")?;
//! # Ok::<(), loggly_rs::ClientError>(())
//! ```
//!
//! `send` reports only invalid levels; use [`LogglyClient::try_send`] when
//! transport failures must be observed.

pub mod builder;
pub mod client;
pub mod config;
pub mod diagnostics;
pub mod endpoint;
pub mod envelope;
pub mod error;
pub mod level;
pub mod transport;

#[cfg(test)]
mod test_utils;

pub use builder::ClientBuilder;
pub use client::{JSON_CONTENT_TYPE, LogglyClient};
pub use config::{CREDENTIAL_ENV_VAR, ClientConfig, credential_from_env};
#[cfg(feature = "tracing-compat")]
pub use diagnostics::TracingSink;
pub use diagnostics::{Diagnostic, DiagnosticSink, LogSink, MemorySink, StderrSink};
pub use endpoint::{DEFAULT_BASE_URL, SegmentEncoding, build_endpoint};
pub use envelope::Envelope;
pub use error::ClientError;
pub use level::{AllowedLevels, Level, is_allowed_level};
pub use transport::{DEFAULT_TIMEOUT, Transport, TransportError, UreqTransport};
