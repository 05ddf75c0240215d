//! Configuration values consumed by [`LogglyClient`](crate::LogglyClient).
//!
//! [`ClientBuilder`](crate::ClientBuilder) and the INI loader both produce a
//! [`ClientConfig`]. Environment lookups live here, at the boundary, and are
//! never performed by the client itself.

use std::{fs, path::Path, time::Duration};

use ini::Ini;

use crate::{
    endpoint::{DEFAULT_BASE_URL, SegmentEncoding, build_endpoint},
    error::ClientError,
    level::AllowedLevels,
    transport::DEFAULT_TIMEOUT,
};

/// Environment variable holding the Loggly customer token.
pub const CREDENTIAL_ENV_VAR: &str = "LOGGLY_TOKEN";

/// Section read by [`ClientConfig::from_ini_str`].
pub const INI_SECTION: &str = "loggly";

/// Read the credential from [`CREDENTIAL_ENV_VAR`].
///
/// An unset or non-UTF-8 variable yields an empty string; the client warns
/// about it at construction rather than failing.
pub fn credential_from_env() -> String {
    std::env::var(CREDENTIAL_ENV_VAR).unwrap_or_default()
}

/// Everything needed to construct a client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Ingestion base; the credential is appended without a separator.
    pub base_url: String,
    /// Customer token embedded in the endpoint path. May be empty.
    pub credential: String,
    /// Source label appended after `/tag/`.
    pub tag: String,
    /// Overall timeout for a single delivery.
    pub timeout: Duration,
    /// Levels accepted by `send`.
    pub levels: AllowedLevels,
    /// How credential and tag are inserted into the URL.
    pub segment_encoding: SegmentEncoding,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            credential: String::new(),
            tag: String::new(),
            timeout: DEFAULT_TIMEOUT,
            levels: AllowedLevels::default(),
            segment_encoding: SegmentEncoding::default(),
        }
    }
}

impl ClientConfig {
    /// Default configuration for `tag` and `credential`.
    pub fn new(tag: impl Into<String>, credential: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            credential: credential.into(),
            ..Self::default()
        }
    }

    /// Default configuration for `tag` using the credential from the environment.
    pub fn from_env(tag: impl Into<String>) -> Self {
        Self::new(tag, credential_from_env())
    }

    /// The destination URL described by this configuration.
    pub fn endpoint(&self) -> String {
        build_endpoint(
            &self.base_url,
            &self.credential,
            &self.tag,
            self.segment_encoding,
        )
    }

    pub(crate) fn validate(&self) -> Result<(), ClientError> {
        if self.base_url.trim().is_empty() {
            return Err(ClientError::InvalidConfig(
                "base URL must not be empty".into(),
            ));
        }
        if self.timeout.is_zero() {
            return Err(ClientError::InvalidConfig(
                "timeout must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Load a configuration from an INI file.
    ///
    /// See [`ClientConfig::from_ini_str`] for the recognised keys.
    pub fn from_ini_file(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let text = fs::read_to_string(path)?;
        Self::from_ini_str(&text)
    }

    /// Parse the `[loggly]` section of an INI document.
    ///
    /// Recognised keys are `token`, `tag`, `base_url`, `timeout_ms` and
    /// `encode_segments`. Missing keys, or a missing section, keep their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidConfig`] when the document cannot be
    /// parsed or a numeric/boolean value is malformed.
    pub fn from_ini_str(text: &str) -> Result<Self, ClientError> {
        let ini = Ini::load_from_str(text)
            .map_err(|err| ClientError::InvalidConfig(format!("malformed INI: {err}")))?;
        let mut config = Self::default();
        let Some(section) = ini.section(Some(INI_SECTION)) else {
            return Ok(config);
        };
        if let Some(token) = section.get("token") {
            config.credential = token.to_owned();
        }
        if let Some(tag) = section.get("tag") {
            config.tag = tag.to_owned();
        }
        if let Some(base_url) = section.get("base_url") {
            config.base_url = base_url.to_owned();
        }
        if let Some(timeout) = section.get("timeout_ms") {
            config.timeout = parse_timeout_ms(timeout)?;
        }
        if let Some(flag) = section.get("encode_segments") {
            config.segment_encoding = if parse_flag("encode_segments", flag)? {
                SegmentEncoding::Percent
            } else {
                SegmentEncoding::Verbatim
            };
        }
        Ok(config)
    }
}

fn parse_timeout_ms(value: &str) -> Result<Duration, ClientError> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ClientError::InvalidConfig(format!("timeout_ms is not a number: {value}")))
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ClientError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(ClientError::InvalidConfig(format!(
            "{key} must be a boolean, got {value}"
        ))),
    }
}
