//! The client that validates, stamps and posts log messages.

use std::{fmt, sync::Arc};

use crate::{
    builder::ClientBuilder,
    config::{CREDENTIAL_ENV_VAR, ClientConfig},
    diagnostics::{DiagnosticSink, LOG_TARGET, LogSink},
    envelope::Envelope,
    error::ClientError,
    level::{AllowedLevels, Level},
    transport::{Transport, UreqTransport},
};

/// Content type sent with every delivery.
pub const JSON_CONTENT_TYPE: &str = "application/json";

const MISSING_CREDENTIAL_WARNING: &str =
    "no Loggly credential supplied; no messages can be sent to Loggly";

/// Blocking client bound to a single endpoint and tag.
///
/// All state is fixed at construction, so a client can be shared between
/// threads and used for concurrent sends without locking. Each send issues
/// one independent HTTP request; nothing is queued, batched or retried.
pub struct LogglyClient {
    endpoint: String,
    tag: String,
    levels: AllowedLevels,
    transport: Arc<dyn Transport>,
    sink: Arc<dyn DiagnosticSink>,
}

impl LogglyClient {
    /// Create a client for `tag` with the default transport and sink.
    ///
    /// An empty `credential` is accepted: a warning is emitted through the
    /// `log` facade and every later delivery will fail at the transport layer.
    pub fn new(tag: impl Into<String>, credential: impl Into<String>) -> Self {
        Self::with_default_io(ClientConfig::new(tag, credential))
    }

    /// Create a client for `tag`, taking the credential from `LOGGLY_TOKEN`.
    pub fn from_env(tag: impl Into<String>) -> Self {
        let config = ClientConfig::from_env(tag);
        if config.credential.is_empty() {
            log::debug!(target: LOG_TARGET, "{CREDENTIAL_ENV_VAR} is unset or empty");
        }
        Self::with_default_io(config)
    }

    fn with_default_io(config: ClientConfig) -> Self {
        let transport = Arc::new(UreqTransport::new(config.timeout));
        Self::from_parts(config, transport, Arc::new(LogSink))
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub(crate) fn from_parts(
        config: ClientConfig,
        transport: Arc<dyn Transport>,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Self {
        if config.credential.is_empty() {
            sink.warn(MISSING_CREDENTIAL_WARNING);
        }
        let endpoint = config.endpoint();
        log::debug!(target: LOG_TARGET, "created client for tag {}", config.tag);
        Self {
            endpoint,
            tag: config.tag,
            levels: config.levels,
            transport,
            sink,
        }
    }

    /// Destination URL. Contains the credential; avoid logging it.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn levels(&self) -> &AllowedLevels {
        &self.levels
    }

    /// Validate `level`, stamp the message and post it once.
    ///
    /// Only an invalid level is reported. Once validation passes the result
    /// of the delivery is discarded, so timeouts and connection failures
    /// still yield `Ok(())`. Use [`LogglyClient::try_send`] to observe them.
    ///
    /// # Errors
    ///
    /// [`ClientError::InvalidLevel`] when `level` is not in the allowed set.
    /// No request is made in that case.
    pub fn send(&self, level: &str, message: &str) -> Result<(), ClientError> {
        let envelope = self.envelope(level, message)?;
        let _ = self.deliver(&envelope);
        Ok(())
    }

    /// Like [`LogglyClient::send`], but delivery failures are returned.
    ///
    /// # Errors
    ///
    /// [`ClientError::InvalidLevel`], [`ClientError::Serialization`] or
    /// [`ClientError::Transport`].
    pub fn try_send(&self, level: &str, message: &str) -> Result<(), ClientError> {
        let envelope = self.envelope(level, message)?;
        self.deliver(&envelope)
    }

    /// Send, then echo `level` and `message` to the diagnostic sink.
    ///
    /// Nothing is echoed when the level is rejected.
    pub fn echo_send(&self, level: &str, message: &str) -> Result<(), ClientError> {
        self.send(level, message)?;
        self.sink.echo(level, message);
        Ok(())
    }

    fn envelope(&self, level: &str, message: &str) -> Result<Envelope, ClientError> {
        self.levels.validate(level)?;
        Ok(Envelope::now(level, message))
    }

    fn deliver(&self, envelope: &Envelope) -> Result<(), ClientError> {
        let body = envelope.to_json()?;
        self.transport
            .post(&self.endpoint, JSON_CONTENT_TYPE, &body)
            .map_err(ClientError::from)
    }

    fn send_level(&self, level: Level, message: &str) -> Result<(), ClientError> {
        self.send(level.as_str(), message)
    }

    pub fn error(&self, message: &str) -> Result<(), ClientError> {
        self.send_level(Level::Error, message)
    }

    pub fn warn(&self, message: &str) -> Result<(), ClientError> {
        self.send_level(Level::Warn, message)
    }

    pub fn info(&self, message: &str) -> Result<(), ClientError> {
        self.send_level(Level::Info, message)
    }

    pub fn verbose(&self, message: &str) -> Result<(), ClientError> {
        self.send_level(Level::Verbose, message)
    }

    pub fn debug(&self, message: &str) -> Result<(), ClientError> {
        self.send_level(Level::Debug, message)
    }

    pub fn silly(&self, message: &str) -> Result<(), ClientError> {
        self.send_level(Level::Silly, message)
    }
}

impl fmt::Debug for LogglyClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogglyClient")
            .field("tag", &self.tag)
            .field("levels", &self.levels)
            .finish_non_exhaustive()
    }
}
