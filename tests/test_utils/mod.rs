#[allow(dead_code)]
pub mod mock_server;

pub use mock_server::{CapturedRequest, MockServer};
