//! Event backend implementations.

mod http;
mod mock;

pub use http::HttpBackend;
pub use mock::MockBackend;
