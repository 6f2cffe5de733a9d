//! Domain models.
//!
//! - `operation`: operation taxonomy and statuses
//! - `network`: network names, descriptors and identifiers
//! - `currency`: the native currency
//! - `options`: reward parameters, capability flags, call whitelist, network options
//! - `config`: process configuration

mod config;
mod currency;
mod network;
mod operation;
mod options;

pub use config::{ConfigError, Configuration, Mode};
pub use currency::Currency;
pub use network::{BlockIdentifier, ChainConfig, NetworkDescriptor, NetworkIdentifier, NetworkName};
pub use operation::{
	classify, is_call_family, is_create_family, OperationFamily, OperationStatus,
	OperationStatusKind, OperationType,
};
pub use options::{CallMethods, CapabilityFlags, NetworkOptions, RewardParameters, WorkflowDefaults};
