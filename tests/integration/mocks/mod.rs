//! Mock implementations for testing purposes.
//!
//! - Node transports
//! - Network registries with substitute genesis data
//!
//! The mocks are implemented using the `mockall` crate.

mod transports;
#[allow(unused_imports)]
pub use registry::*;
#[allow(unused_imports)]
pub use transports::*;
