//! Test helper utilities
//!
//! This module contains test helper utilities for the application.
//!
//! - `builders`: Test helper utilities for creating test instances of models
//! - `http`: Test helper utilities for JSON-RPC transports and responses

pub mod builders {
	pub mod configuration;
	pub mod network;
}


pub use builders::*;
pub use http::*;
