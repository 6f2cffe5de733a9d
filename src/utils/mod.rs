//! Utility modules for common functionality.
//!
//! - constants: Compiled-in network constants
//! - http: HTTP client utilities (i.e. creation of retryable HTTP clients)
//! - logging: Logging and error context utilities
//! - tests: Test utilities

pub mod constants;
pub mod http;
pub mod logging;
pub mod tests;

pub use constants::*;
pub use http::*;
