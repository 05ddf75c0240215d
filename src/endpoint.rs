//! Destination URL construction.
//!
//! The endpoint is `<base><credential>/tag/<tag>`. Segments are inserted
//! verbatim unless [`SegmentEncoding::Percent`] is selected, in which case
//! both are percent-encoded so that `/`, `?` and `#` cannot alter the path.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Default Loggly HTTP input base. The credential is appended directly.
pub const DEFAULT_BASE_URL: &str = "http://logs-01.loggly.com/inputs/";

/// Characters escaped in a path segment when percent-encoding is enabled.
///
/// Unreserved characters (alphanumeric, `-`, `_`, `.`, `~`) pass through.
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// How credential and tag are placed into the endpoint path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SegmentEncoding {
    /// Insert segments unchanged. Callers must supply URL-safe values.
    #[default]
    Verbatim,
    /// Percent-encode reserved characters in each segment.
    Percent,
}

impl SegmentEncoding {
    fn apply(self, segment: &str) -> String {
        match self {
            Self::Verbatim => segment.to_owned(),
            Self::Percent => utf8_percent_encode(segment, PATH_SEGMENT_ENCODE_SET).to_string(),
        }
    }
}

/// Build the destination URL for `credential` and `tag`.
pub fn build_endpoint(
    base_url: &str,
    credential: &str,
    tag: &str,
    encoding: SegmentEncoding,
) -> String {
    format!(
        "{base_url}{}/tag/{}",
        encoding.apply(credential),
        encoding.apply(tag)
    )
}
