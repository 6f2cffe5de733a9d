//! Network registry.
//!
//! Holds the compiled-in descriptor of every supported network together with the
//! constants shared by all of them. The registry is built once at startup, never
//! mutated, and shared by reference (usually behind an `Arc`) with every consumer.

mod error;
mod network;

pub use error::RegistryError;
pub use network::{NetworkRegistry, NetworkRegistryTrait};
