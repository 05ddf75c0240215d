//! Test-only helpers shared across crate unit tests.

mod recording_transport;

pub use recording_transport::RecordingTransport;
