//! Services that talk to a node.
//!
//! - `transport`: JSON-RPC transport trait and its HTTP implementation
//! - `validation`: checks a node's genesis block and chain id against the registry
//! - `call`: whitelisted passthrough of node query methods

pub mod call;
pub mod transport;
pub mod validation;
