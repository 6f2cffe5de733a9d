//! Network registry for a Rosetta-style Corechain adapter.
//!
//! Holds the compiled-in facts about every supported network (genesis block,
//! chain id, node launch arguments), the operation taxonomy used when decoding
//! traces, and the capability flags advertised to API clients. A thin transport
//! layer lets the process verify that a node serves the configured network.
//!
//! # Module Structure
//!
//! - `bootstrap`: builds the registry and verifies the node on startup
//! - `models`: operation taxonomy, network descriptors and configuration
//! - `registry`: the read-only network registry
//! - `services`: node transport, node validation and call passthrough
//! - `utils`: constants, logging and HTTP helpers

pub mod bootstrap;
pub mod models;
pub mod registry;
pub mod services;
pub mod utils;
