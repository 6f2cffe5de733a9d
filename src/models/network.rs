//! Network descriptors and identifiers.

use alloy::primitives::{B256, U256};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt, str::FromStr};
use strum::{AsRefStr, Display, EnumIter, IntoStaticStr};

use crate::{
	registry::RegistryError,
	utils::constants::{BLOCKCHAIN, GENESIS_BLOCK_INDEX},
};

/// Closed set of networks the registry knows about
#[derive(
	Debug,
	Clone,
	Copy,
	PartialEq,
	Eq,
	Hash,
	Display,
	AsRefStr,
	IntoStaticStr,
	EnumIter,
	Serialize,
	Deserialize,
)]
pub enum NetworkName {
	Mainnet,
	Ropsten,
	Rinkeby,
	Goerli,
	/// Corechain devnet
	Dev,
	/// Corechain mainnet
	Core,
	/// Corechain testnet
	Buffalo,
}

impl NetworkName {
	pub fn as_str(&self) -> &'static str {
		(*self).into()
	}

	/// CLI flag selecting the network on legacy Ethereum testnets.
	///
	/// Corechain networks select themselves through the node's configuration file,
	/// so they have no suffix.
	pub fn launch_suffix(&self) -> Option<&'static str> {
		match self {
			Self::Ropsten => Some("ropsten"),
			Self::Rinkeby => Some("rinkeby"),
			Self::Goerli => Some("goerli"),
			Self::Mainnet | Self::Dev | Self::Core | Self::Buffalo => None,
		}
	}
}

impl FromStr for NetworkName {
	type Err = RegistryError;

	/// Exact, case-sensitive match; anything else is an unsupported network.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"Mainnet" => Ok(Self::Mainnet),
			"Ropsten" => Ok(Self::Ropsten),
			"Rinkeby" => Ok(Self::Rinkeby),
			"Goerli" => Ok(Self::Goerli),
			"Dev" => Ok(Self::Dev),
			"Core" => Ok(Self::Core),
			"Buffalo" => Ok(Self::Buffalo),
			_ => Err(RegistryError::unsupported_network(
				format!("network {} is not supported", s),
				None,
				Some(HashMap::from([("network".to_string(), s.to_string())])),
			)),
		}
	}
}

/// Hash and index of a block, as exchanged with API clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockIdentifier {
	pub index: i64,
	pub hash: B256,
}

impl BlockIdentifier {
	/// Identifier of a genesis block with the given hash.
	pub const fn genesis(hash: B256) -> Self {
		Self {
			index: GENESIS_BLOCK_INDEX,
			hash,
		}
	}

	/// The hash as `0x` followed by 64 lowercase hex characters.
	pub fn hash_hex(&self) -> String {
		self.hash.to_string()
	}
}

impl fmt::Display for BlockIdentifier {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}@{}", self.hash, self.index)
	}
}

/// Subset of the node's chain configuration the registry enforces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainConfig {
	pub chain_id: U256,
}

impl ChainConfig {
	pub fn new(chain_id: u64) -> Self {
		Self {
			chain_id: U256::from(chain_id),
		}
	}
}

/// Blockchain and network pair identifying a network to API clients
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetworkIdentifier {
	pub blockchain: String,
	pub network: String,
}

impl NetworkIdentifier {
	pub fn new(network: NetworkName) -> Self {
		Self {
			blockchain: BLOCKCHAIN.to_string(),
			network: network.as_str().to_string(),
		}
	}
}

/// Immutable facts needed to bootstrap and validate a node connection for one network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkDescriptor {
	/// Network name (e.g. "Buffalo")
	pub name: NetworkName,

	/// Always "Corechain"
	pub blockchain: String,

	/// Genesis block the node must report
	pub genesis_block_identifier: BlockIdentifier,

	/// Chain configuration the node must report
	pub chain_config: ChainConfig,

	/// Flags used to start a node bound to this network
	pub node_launch_arguments: String,
}

impl NetworkDescriptor {
	pub fn network_identifier(&self) -> NetworkIdentifier {
		NetworkIdentifier::new(self.name)
	}

	pub fn chain_id(&self) -> U256 {
		self.chain_config.chain_id
	}
}
