//! Severity vocabulary accepted by the ingestion endpoint.
//!
//! Levels are matched as exact, case-sensitive strings. [`AllowedLevels`]
//! carries the accepted set as an explicit value so clients can be built with
//! a narrower vocabulary without touching any process-wide state.

use std::fmt;
use std::str::FromStr;

use crate::error::ClientError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    Error,
    Warn,
    Info,
    Verbose,
    Debug,
    Silly,
}

impl Level {
    /// Every level understood by the endpoint.
    pub const ALL: [Level; 6] = [
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Verbose,
        Level::Debug,
        Level::Silly,
    ];

    /// Wire representation of the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warn => "warn",
            Level::Info => "info",
            Level::Verbose => "verbose",
            Level::Debug => "debug",
            Level::Silly => "silly",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| ClientError::InvalidLevel(s.to_owned()))
    }
}

/// Immutable set of level strings a client will transmit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllowedLevels {
    levels: Vec<String>,
}

impl AllowedLevels {
    /// Build a set from arbitrary strings.
    ///
    /// Members are stored verbatim; no trimming or case folding is applied.
    pub fn new<I, S>(levels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            levels: levels.into_iter().map(Into::into).collect(),
        }
    }

    /// Return `true` when `level` exactly equals one of the members.
    pub fn contains(&self, level: &str) -> bool {
        self.levels.iter().any(|allowed| allowed == level)
    }

    /// Reject `level` with [`ClientError::InvalidLevel`] if it is not a member.
    pub fn validate(&self, level: &str) -> Result<(), ClientError> {
        if self.contains(level) {
            Ok(())
        } else {
            Err(ClientError::InvalidLevel(level.to_owned()))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.levels.iter().map(String::as_str)
    }
}

impl Default for AllowedLevels {
    fn default() -> Self {
        Self::new(Level::ALL.iter().map(Level::as_str))
    }
}

/// Check `level` against the default vocabulary.
pub fn is_allowed_level(level: &str) -> bool {
    Level::ALL.iter().any(|allowed| allowed.as_str() == level)
}
