//! Process-wide parameters consulted when building network options and status
//! responses: reward parameters, capability flags and the passthrough whitelist.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{
	models::{Currency, NetworkIdentifier, OperationStatus, OperationType},
	registry::RegistryError,
	utils::constants::{
		CALL_METHODS, HISTORICAL_BALANCE_SUPPORTED, INCLUDE_MEMPOOL_COINS, MAX_UNCLE_DEPTH,
		NODE_VERSION, TRANSFER_GAS_LIMIT, UNCLES_REWARD_MULTIPLIER,
	},
};

/// Inputs of the uncle reward rule.
///
/// The reward arithmetic lives with the block processor; only the constants are
/// owned here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RewardParameters {
	pub uncles_reward_multiplier: u64,
	pub max_uncle_depth: u64,
}

impl RewardParameters {
	pub const fn new() -> Self {
		Self {
			uncles_reward_multiplier: UNCLES_REWARD_MULTIPLIER,
			max_uncle_depth: MAX_UNCLE_DEPTH,
		}
	}

	/// An uncle `depth` blocks below the including block is rewarded iff
	/// `depth <= max_uncle_depth`.
	pub fn is_uncle_eligible(&self, depth: u64) -> bool {
		depth <= self.max_uncle_depth
	}
}

impl Default for RewardParameters {
	fn default() -> Self {
		Self::new()
	}
}

/// Optional features advertised to API clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CapabilityFlags {
	pub historical_balance_supported: bool,
	pub include_mempool_coins: bool,
}

impl CapabilityFlags {
	pub const fn new() -> Self {
		Self {
			historical_balance_supported: HISTORICAL_BALANCE_SUPPORTED,
			include_mempool_coins: INCLUDE_MEMPOOL_COINS,
		}
	}
}

impl Default for CapabilityFlags {
	fn default() -> Self {
		Self::new()
	}
}

/// Closed whitelist of node query methods reachable through the call passthrough
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallMethods {
	methods: &'static [&'static str],
}

impl CallMethods {
	pub const fn new() -> Self {
		Self {
			methods: &CALL_METHODS,
		}
	}

	pub fn as_slice(&self) -> &'static [&'static str] {
		self.methods
	}

	/// Case-sensitive membership check.
	pub fn contains(&self, method: &str) -> bool {
		self.methods.iter().any(|m| *m == method)
	}

	/// Fails with [`RegistryError::DisallowedMethod`] for methods outside the whitelist.
	pub fn ensure_allowed(&self, method: &str) -> Result<(), RegistryError> {
		if self.contains(method) {
			return Ok(());
		}
		Err(RegistryError::disallowed_method(
			format!("method {} is not allowed", method),
			None,
			Some(HashMap::from([("method".to_string(), method.to_string())])),
		))
	}

	pub fn to_vec(&self) -> Vec<String> {
		self.methods.iter().map(|m| m.to_string()).collect()
	}
}

impl Default for CallMethods {
	fn default() -> Self {
		Self::new()
	}
}

/// What the adapter supports, as returned by a network options request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkOptions {
	pub node_version: String,
	pub operation_statuses: Vec<OperationStatus>,
	pub operation_types: Vec<OperationType>,
	pub historical_balance_lookup: bool,
	pub call_methods: Vec<String>,
	pub mempool_coins: bool,
}

impl NetworkOptions {
	pub fn new(capabilities: &CapabilityFlags, call_methods: &CallMethods) -> Self {
		Self {
			node_version: NODE_VERSION.to_string(),
			operation_statuses: OperationStatus::all(),
			operation_types: OperationType::all(),
			historical_balance_lookup: capabilities.historical_balance_supported,
			call_methods: call_methods.to_vec(),
			mempool_coins: capabilities.include_mempool_coins,
		}
	}
}

/// Literals the external scenario runner needs to drive a funded transfer
/// against a network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowDefaults {
	pub network: NetworkIdentifier,
	pub currency: Currency,
	pub transfer_operation_type: OperationType,
	pub transfer_gas_limit: u64,
}

impl WorkflowDefaults {
	pub fn new(network: NetworkIdentifier) -> Self {
		Self {
			network,
			currency: Currency::native(),
			transfer_operation_type: OperationType::Call,
			transfer_gas_limit: TRANSFER_GAS_LIMIT,
		}
	}
}
