//! Builder for [`LogglyClient`].
//!
//! Exposes the ingestion base, credential, tag, timeout, level set, segment
//! encoding and the injectable transport and diagnostic sink.

use std::{fmt, sync::Arc, time::Duration};

use crate::{
    client::LogglyClient,
    config::ClientConfig,
    diagnostics::{DiagnosticSink, LogSink},
    endpoint::SegmentEncoding,
    error::ClientError,
    level::AllowedLevels,
    transport::{Transport, UreqTransport},
};

macro_rules! option_setter {
    ($(#[$meta:meta])* $fn_name:ident, $field:ident, $ty:ty) => {
        $(#[$meta])*
        pub fn $fn_name(mut self, value: $ty) -> Self {
            self.$field = Some(value);
            self
        }
    };
}

/// Builder for constructing [`LogglyClient`] instances.
#[derive(Clone, Default)]
pub struct ClientBuilder {
    tag: Option<String>,
    credential: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    levels: Option<AllowedLevels>,
    segment_encoding: SegmentEncoding,
    transport: Option<Arc<dyn Transport>>,
    sink: Option<Arc<dyn DiagnosticSink>>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration, e.g. one loaded from INI.
    pub fn from_config(config: ClientConfig) -> Self {
        Self {
            tag: Some(config.tag),
            credential: Some(config.credential),
            base_url: Some(config.base_url),
            timeout: Some(config.timeout),
            levels: Some(config.levels),
            segment_encoding: config.segment_encoding,
            transport: None,
            sink: None,
        }
    }

    /// Set the source tag (required).
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Set the customer token. An empty or missing token only triggers a warning.
    pub fn with_credential(mut self, credential: impl Into<String>) -> Self {
        self.credential = Some(credential.into());
        self
    }

    /// Override the ingestion base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    option_setter!(
        #[doc = "Override the per-request timeout of the default transport."]
        with_timeout,
        timeout,
        Duration
    );
    option_setter!(
        #[doc = "Restrict or replace the accepted level vocabulary."]
        with_levels,
        levels,
        AllowedLevels
    );

    /// Percent-encode credential and tag when building the endpoint.
    pub fn with_percent_encoded_segments(mut self) -> Self {
        self.segment_encoding = SegmentEncoding::Percent;
        self
    }

    /// Replace the HTTP transport.
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replace the diagnostic sink used for warnings and echoes.
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    fn build_config(&self) -> Result<ClientConfig, ClientError> {
        let Some(tag) = self.tag.clone() else {
            return Err(ClientError::InvalidConfig("client requires a tag".into()));
        };
        let defaults = ClientConfig::default();
        let config = ClientConfig {
            base_url: self.base_url.clone().unwrap_or(defaults.base_url),
            credential: self.credential.clone().unwrap_or_default(),
            tag,
            timeout: self.timeout.unwrap_or(defaults.timeout),
            levels: self.levels.clone().unwrap_or(defaults.levels),
            segment_encoding: self.segment_encoding,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the settings and construct the client.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidConfig`] when the tag is missing, the
    /// base URL is empty or the timeout is zero.
    pub fn build(self) -> Result<LogglyClient, ClientError> {
        let config = self.build_config()?;
        let transport = self
            .transport
            .unwrap_or_else(|| Arc::new(UreqTransport::new(config.timeout)));
        let sink = self.sink.unwrap_or_else(|| Arc::new(LogSink));
        Ok(LogglyClient::from_parts(config, transport, sink))
    }
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("tag", &self.tag)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("levels", &self.levels)
            .field("segment_encoding", &self.segment_encoding)
            .field("custom_transport", &self.transport.is_some())
            .field("custom_sink", &self.sink.is_some())
            .finish_non_exhaustive()
    }
}
