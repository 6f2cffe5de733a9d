//! Compiled-in constants shared by every supported network.

use alloy::primitives::{b256, B256};

/// Version of the node software the registry is built against.
pub const NODE_VERSION: &str = "1.9.24";

/// Blockchain name reported in every network identifier.
pub const BLOCKCHAIN: &str = "Corechain";

/// Symbol of the native currency.
pub const CURRENCY_SYMBOL: &str = "CORE";

/// Decimals of the native currency.
pub const CURRENCY_DECIMALS: u8 = 18;

/// Index of a genesis block.
pub const GENESIS_BLOCK_INDEX: i64 = 0;

/// Gas limit of a plain value transfer.
pub const TRANSFER_GAS_LIMIT: u64 = 21_000;

/// Multiplier applied when rewarding uncle blocks.
pub const UNCLES_REWARD_MULTIPLIER: u64 = 32;

/// Maximum distance from the including block for an uncle to be rewarded.
pub const MAX_UNCLE_DEPTH: u64 = 8;

/// Historical balance lookups are served by the archive node.
pub const HISTORICAL_BALANCE_SUPPORTED: bool = true;

/// Account-based chain, so mempool coins never apply.
pub const INCLUDE_MEMPOOL_COINS: bool = false;

/// Arguments shared by every node instance.
pub const BASE_NODE_ARGUMENTS: &str =
	"--config=/app/ethereum/geth.toml --cache=8000 --gcmode=archive --graphql";

/// Node query methods exposed through the call passthrough.
pub const CALL_METHODS: [&str; 4] = [
	"eth_getBlockByNumber",
	"eth_getTransactionReceipt",
	"eth_call",
	"eth_estimateGas",
];

/// Default node endpoint when none is configured.
pub const DEFAULT_NODE_URL: &str = "http://localhost:8545";

// Genesis hashes
pub const MAINNET_GENESIS_HASH: B256 =
	b256!("0xd4e56740f876aef8c010b86a40d5f56745a118d0906a34e69aec8c0db1cb8fa3");
pub const ROPSTEN_GENESIS_HASH: B256 =
	b256!("0x41941023680923e0fe4d74a34bdac8141f2540e3ae90623718e47d66d1ca4a2d");
pub const RINKEBY_GENESIS_HASH: B256 =
	b256!("0x6341fd3daf94b748c72ced5a5b26028f2474f5f00d824504e4fa37a75767e177");
pub const GOERLI_GENESIS_HASH: B256 =
	b256!("0xbf7e331f7f7c1dd2e05159666b3bf8bc7a8a3a9eb1d518969eab529dd9b88c1a");
pub const DEV_GENESIS_HASH: B256 =
	b256!("0x0000000000000000000000000000000000000000000000000000000000000000");
pub const CORE_GENESIS_HASH: B256 =
	b256!("0xf7fc87f11e61508a5828cd1508060ed1714c8d32a92744ae10acb43c953357ad");
pub const BUFFALO_GENESIS_HASH: B256 =
	b256!("0xd90508c51efd64e75363cdf51114d9f2a90a79e6cd0f78f3c3038b47695c034a");

// Chain IDs
pub const MAINNET_CHAIN_ID: u64 = 1;
pub const ROPSTEN_CHAIN_ID: u64 = 3;
pub const RINKEBY_CHAIN_ID: u64 = 4;
pub const GOERLI_CHAIN_ID: u64 = 5;
pub const DEV_CHAIN_ID: u64 = 1112;
pub const BUFFALO_CHAIN_ID: u64 = 1115;
pub const CORE_CHAIN_ID: u64 = 1116;
