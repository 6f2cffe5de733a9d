//! Node validation.
//!
//! Confirms that the node behind a transport serves the chain the configured
//! network describes: the genesis block and the chain id must both match the
//! registry.

mod error;

pub use error::ValidationError;

use alloy::primitives::{B256, U256};
use serde_json::{json, Value};
use std::{collections::HashMap, str::FromStr, sync::Arc};
use tracing::instrument;

use crate::{
	models::BlockIdentifier,
	registry::NetworkRegistryTrait,
	services::transport::{JsonRpcTransport, RpcRequest, TransportError},
};

const GET_BLOCK_BY_NUMBER: &str = "eth_getBlockByNumber";
const CHAIN_ID: &str = "eth_chainId";

/// What a node reported about itself during verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeReport {
	pub genesis: BlockIdentifier,
	pub chain_id: U256,
}

/// Checks a node against the registry
pub struct NodeValidator<T: JsonRpcTransport, R: NetworkRegistryTrait> {
	transport: Arc<T>,
	registry: Arc<R>,
}

impl<T: JsonRpcTransport, R: NetworkRegistryTrait> NodeValidator<T, R> {
	pub fn new(transport: Arc<T>, registry: Arc<R>) -> Self {
		Self {
			transport,
			registry,
		}
	}

	/// Reads block 0 from the node.
	#[instrument(skip(self), fields(url = %self.transport.url()))]
	pub async fn fetch_genesis(&self) -> Result<BlockIdentifier, ValidationError> {
		let block = self
			.transport
			.call(GET_BLOCK_BY_NUMBER, genesis_params())
			.await?;
		Ok(parse_block_identifier(&block)?)
	}

	/// Reads the chain id from the node.
	#[instrument(skip(self), fields(url = %self.transport.url()))]
	pub async fn fetch_chain_id(&self) -> Result<U256, ValidationError> {
		let chain_id = self.transport.call(CHAIN_ID, json!([])).await?;
		Ok(parse_quantity(CHAIN_ID, &chain_id)?)
	}

	/// Fetches genesis and chain id in one round trip and compares both with the
	/// descriptor of `network_name`.
	///
	/// The network is resolved before any traffic is sent, so an unknown name never
	/// reaches the node.
	#[instrument(skip(self), fields(network = %network_name))]
	pub async fn verify(&self, network_name: &str) -> Result<NodeReport, ValidationError> {
		self.registry.descriptor_for(network_name)?;

		let responses = self
			.transport
			.batch_call(vec![
				RpcRequest::new(GET_BLOCK_BY_NUMBER, genesis_params()),
				RpcRequest::new(CHAIN_ID, json!([])),
			])
			.await?;

		let mut responses = responses.into_iter();
		let (Some(genesis), Some(chain_id)) = (responses.next(), responses.next()) else {
			return Err(TransportError::response_parse(
				"batch response is missing entries",
				None,
				Some(HashMap::from([("network".to_string(), network_name.to_string())])),
			)
			.into());
		};

		let report = NodeReport {
			genesis: parse_block_identifier(&genesis?)?,
			chain_id: parse_quantity(CHAIN_ID, &chain_id?)?,
		};

		self.registry
			.validate_genesis(network_name, &report.genesis)?;
		self.registry
			.validate_chain_id(network_name, report.chain_id)?;

		tracing::info!(
			genesis = %report.genesis,
			chain_id = %report.chain_id,
			"node matches network"
		);
		Ok(report)
	}
}

fn genesis_params() -> Value {
	json!(["0x0", false])
}

fn parse_error(method: &str, msg: impl Into<String>) -> TransportError {
	TransportError::response_parse(
		msg,
		None,
		Some(HashMap::from([("method".to_string(), method.to_string())])),
	)
}

/// Reads `hash` and `number` from an `eth_getBlockByNumber` result.
pub fn parse_block_identifier(block: &Value) -> Result<BlockIdentifier, TransportError> {
	if block.is_null() {
		return Err(parse_error(GET_BLOCK_BY_NUMBER, "node returned no block"));
	}

	let hash = block
		.get("hash")
		.and_then(Value::as_str)
		.ok_or_else(|| parse_error(GET_BLOCK_BY_NUMBER, "block has no hash"))?;
	let hash = B256::from_str(hash)
		.map_err(|e| parse_error(GET_BLOCK_BY_NUMBER, format!("invalid block hash {}: {}", hash, e)))?;

	let number = block
		.get("number")
		.and_then(Value::as_str)
		.ok_or_else(|| parse_error(GET_BLOCK_BY_NUMBER, "block has no number"))?;
	let index = number
		.strip_prefix("0x")
		.and_then(|digits| i64::from_str_radix(digits, 16).ok())
		.ok_or_else(|| {
			parse_error(
				GET_BLOCK_BY_NUMBER,
				format!("invalid block number {}", number),
			)
		})?;

	Ok(BlockIdentifier { index, hash })
}

/// Parses a `0x`-prefixed hex quantity.
pub fn parse_quantity(method: &str, value: &Value) -> Result<U256, TransportError> {
	let raw = value
		.as_str()
		.ok_or_else(|| parse_error(method, format!("expected a hex quantity, got {}", value)))?;
	let digits = raw
		.strip_prefix("0x")
		.ok_or_else(|| parse_error(method, format!("quantity {} is not 0x-prefixed", raw)))?;
	U256::from_str_radix(digits, 16)
		.map_err(|e| parse_error(method, format!("invalid quantity {}: {}", raw, e)))
}
