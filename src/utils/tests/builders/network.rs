//! Test helper utilities for network descriptors
//!
//! - `NetworkDescriptorBuilder`: Builder for creating test NetworkDescriptor instances

use alloy::primitives::B256;

use crate::{
	models::{BlockIdentifier, ChainConfig, NetworkDescriptor, NetworkName},
	utils::constants::{BASE_NODE_ARGUMENTS, BLOCKCHAIN, BUFFALO_CHAIN_ID, BUFFALO_GENESIS_HASH},
};

/// Builder for creating test NetworkDescriptor instances
///
/// Defaults to the Buffalo testnet.
pub struct NetworkDescriptorBuilder {
	name: NetworkName,
	genesis_hash: B256,
	genesis_index: i64,
	chain_id: u64,
	node_launch_arguments: String,
}

impl Default for NetworkDescriptorBuilder {
	fn default() -> Self {
		Self {
			name: NetworkName::Buffalo,
			genesis_hash: BUFFALO_GENESIS_HASH,
			genesis_index: 0,
			chain_id: BUFFALO_CHAIN_ID,
			node_launch_arguments: BASE_NODE_ARGUMENTS.to_string(),
		}
	}
}

impl NetworkDescriptorBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn name(mut self, name: NetworkName) -> Self {
		self.name = name;
		self
	}

	pub fn genesis_hash(mut self, hash: B256) -> Self {
		self.genesis_hash = hash;
		self
	}

	pub fn genesis_index(mut self, index: i64) -> Self {
		self.genesis_index = index;
		self
	}

	pub fn chain_id(mut self, chain_id: u64) -> Self {
		self.chain_id = chain_id;
		self
	}

	pub fn node_launch_arguments(mut self, arguments: &str) -> Self {
		self.node_launch_arguments = arguments.to_string();
		self
	}

	pub fn build(self) -> NetworkDescriptor {
		NetworkDescriptor {
			name: self.name,
			blockchain: BLOCKCHAIN.to_string(),
			genesis_block_identifier: BlockIdentifier {
				index: self.genesis_index,
				hash: self.genesis_hash,
			},
			chain_config: ChainConfig::new(self.chain_id),
			node_launch_arguments: self.node_launch_arguments,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		registry::{NetworkRegistry, NetworkRegistryTrait},
		utils::constants::CORE_GENESIS_HASH,
	};
	use alloy::primitives::U256;

	#[test]
	fn test_default_matches_registry() {
		let registry = NetworkRegistry::new();
		assert_eq!(
			NetworkDescriptorBuilder::new().build(),
			registry.descriptor_for("Buffalo").unwrap()
		);
	}

	#[test]
	fn test_overrides() {
		let descriptor = NetworkDescriptorBuilder::new()
			.name(NetworkName::Core)
			.genesis_hash(CORE_GENESIS_HASH)
			.genesis_index(3)
			.chain_id(1116)
			.node_launch_arguments("--dev")
			.build();

		assert_eq!(descriptor.name, NetworkName::Core);
		assert_eq!(descriptor.genesis_block_identifier.index, 3);
		assert_eq!(descriptor.chain_id(), U256::from(1116u64));
		assert_eq!(descriptor.node_launch_arguments, "--dev");
	}
}
