//! Compiled-in network descriptors and the lookups over them.

#![allow(clippy::result_large_err)]

use alloy::primitives::U256;
use std::collections::HashMap;
use strum::IntoEnumIterator;

use crate::{
	models::{
		BlockIdentifier, CallMethods, CapabilityFlags, ChainConfig, Currency, NetworkDescriptor,
		NetworkIdentifier, NetworkName, NetworkOptions, OperationStatus, RewardParameters,
		WorkflowDefaults,
	},
	registry::error::RegistryError,
	utils::constants::*,
};

/// Read-only registry of every supported network
#[derive(Debug, Clone)]
pub struct NetworkRegistry {
	/// Descriptors in declaration order of [`NetworkName`]
	descriptors: Vec<NetworkDescriptor>,
	currency: Currency,
	reward_parameters: RewardParameters,
	capabilities: CapabilityFlags,
	call_methods: CallMethods,
}

impl NetworkRegistry {
	/// Builds the registry from the compiled-in constants.
	pub fn new() -> Self {
		let descriptors = NetworkName::iter().map(build_descriptor).collect();
		Self {
			descriptors,
			currency: Currency::native(),
			reward_parameters: RewardParameters::new(),
			capabilities: CapabilityFlags::new(),
			call_methods: CallMethods::new(),
		}
	}

	pub fn currency(&self) -> &Currency {
		&self.currency
	}

	pub fn reward_parameters(&self) -> &RewardParameters {
		&self.reward_parameters
	}

	pub fn capabilities(&self) -> &CapabilityFlags {
		&self.capabilities
	}

	pub fn call_methods(&self) -> &CallMethods {
		&self.call_methods
	}

	pub fn operation_statuses(&self) -> Vec<OperationStatus> {
		OperationStatus::all()
	}

	/// Options advertised to API clients; identical for every network.
	pub fn network_options(&self) -> NetworkOptions {
		NetworkOptions::new(&self.capabilities, &self.call_methods)
	}

	/// Identifiers of every supported network, for a network list response.
	pub fn network_identifiers(&self) -> Vec<NetworkIdentifier> {
		self.descriptors
			.iter()
			.map(NetworkDescriptor::network_identifier)
			.collect()
	}

	/// Literals the scenario runner needs for the given network.
	pub fn workflow_defaults(&self, network_name: &str) -> Result<WorkflowDefaults, RegistryError> {
		let descriptor = self.descriptor_for(network_name)?;
		Ok(WorkflowDefaults::new(descriptor.network_identifier()))
	}
}

impl Default for NetworkRegistry {
	fn default() -> Self {
		Self::new()
	}
}

fn build_descriptor(name: NetworkName) -> NetworkDescriptor {
	let (genesis_hash, chain_id) = match name {
		NetworkName::Mainnet => (MAINNET_GENESIS_HASH, MAINNET_CHAIN_ID),
		NetworkName::Ropsten => (ROPSTEN_GENESIS_HASH, ROPSTEN_CHAIN_ID),
		NetworkName::Rinkeby => (RINKEBY_GENESIS_HASH, RINKEBY_CHAIN_ID),
		NetworkName::Goerli => (GOERLI_GENESIS_HASH, GOERLI_CHAIN_ID),
		NetworkName::Dev => (DEV_GENESIS_HASH, DEV_CHAIN_ID),
		NetworkName::Core => (CORE_GENESIS_HASH, CORE_CHAIN_ID),
		NetworkName::Buffalo => (BUFFALO_GENESIS_HASH, BUFFALO_CHAIN_ID),
	};

	NetworkDescriptor {
		name,
		blockchain: BLOCKCHAIN.to_string(),
		genesis_block_identifier: BlockIdentifier::genesis(genesis_hash),
		chain_config: ChainConfig::new(chain_id),
		node_launch_arguments: launch_arguments(name),
	}
}

/// `base + " --" + suffix` where the network needs a CLI flag, `base` otherwise.
fn launch_arguments(name: NetworkName) -> String {
	match name.launch_suffix() {
		Some(suffix) => format!("{} --{}", BASE_NODE_ARGUMENTS, suffix),
		None => BASE_NODE_ARGUMENTS.to_string(),
	}
}

/// Interface for network registry implementations
///
/// Consumers depend on this trait so tests can substitute a registry with
/// different genesis data.
pub trait NetworkRegistryTrait: Send + Sync {
	/// Exact, case-sensitive lookup of a network descriptor.
	///
	/// Unknown names fail with [`RegistryError::UnsupportedNetwork`]; there is no
	/// fallback network.
	fn descriptor_for(&self, network_name: &str) -> Result<NetworkDescriptor, RegistryError>;

	/// All descriptors, in declaration order.
	fn descriptors(&self) -> Vec<NetworkDescriptor>;

	/// Arguments used to launch a node bound to the network.
	fn launch_arguments_for(&self, network_name: &str) -> Result<String, RegistryError> {
		Ok(self.descriptor_for(network_name)?.node_launch_arguments)
	}

	/// Compares the genesis block reported by a node against the registry.
	///
	/// A mismatch is fatal: the node belongs to a different chain.
	fn validate_genesis(
		&self,
		network_name: &str,
		observed: &BlockIdentifier,
	) -> Result<(), RegistryError> {
		let expected = self.descriptor_for(network_name)?.genesis_block_identifier;
		if expected == *observed {
			return Ok(());
		}
		Err(RegistryError::genesis_mismatch(
			format!(
				"node genesis {} does not match expected genesis {}",
				observed, expected
			),
			None,
			Some(HashMap::from([
				("network".to_string(), network_name.to_string()),
				("expected_hash".to_string(), expected.hash_hex()),
				("observed_hash".to_string(), observed.hash_hex()),
				("observed_index".to_string(), observed.index.to_string()),
			])),
		))
	}

	/// Compares the chain id reported by a node against the registry.
	fn validate_chain_id(&self, network_name: &str, observed: U256) -> Result<(), RegistryError> {
		let expected = self.descriptor_for(network_name)?.chain_id();
		if expected == observed {
			return Ok(());
		}
		Err(RegistryError::genesis_mismatch(
			format!(
				"node chain id {} does not match expected chain id {}",
				observed, expected
			),
			None,
			Some(HashMap::from([
				("network".to_string(), network_name.to_string()),
				("expected_chain_id".to_string(), expected.to_string()),
				("observed_chain_id".to_string(), observed.to_string()),
			])),
		))
	}
}

impl NetworkRegistryTrait for NetworkRegistry {
	fn descriptor_for(&self, network_name: &str) -> Result<NetworkDescriptor, RegistryError> {
		let name: NetworkName = network_name.parse()?;
		self.descriptors
			.iter()
			.find(|d| d.name == name)
			.cloned()
			.ok_or_else(|| {
				RegistryError::unsupported_network(
					format!("network {} has no descriptor", network_name),
					None,
					Some(HashMap::from([(
						"network".to_string(),
						network_name.to_string(),
					)])),
				)
			})
	}

	fn descriptors(&self) -> Vec<NetworkDescriptor> {
		self.descriptors.clone()
	}
}
