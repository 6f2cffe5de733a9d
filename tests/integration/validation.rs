//! Node validation tests against mocked transports, mocked registries and a mock
//! HTTP node.

use alloy::primitives::{b256, U256};
use mockito::Matcher;
use serde_json::json;
use std::sync::Arc;

use corechain_registry::{
	models::{BlockIdentifier, NetworkName},
	registry::{NetworkRegistry, RegistryError},
	services::{
		transport::TransportError,
		validation::{NodeValidator, ValidationError},
	},
	utils::{
		constants::{BUFFALO_GENESIS_HASH, CORE_GENESIS_HASH},
		tests::{block_result, create_test_transport, network::NetworkDescriptorBuilder, rpc_result},
	},
};

use crate::integration::mocks::{MockNetworkRegistry, MockNodeTransport};

fn transport_answering(genesis: serde_json::Value, chain_id: &'static str) -> MockNodeTransport {
	let mut transport = MockNodeTransport::new();
	transport
		.expect_url()
		.returning(|| "http://node.test/".to_string());
	transport
		.expect_batch_call()
		.times(1)
		.returning(move |_| Ok(vec![Ok(genesis.clone()), Ok(json!(chain_id))]));
	transport
}

#[tokio::test]
async fn test_verify_against_substitute_registry() {
	let private_genesis = b256!("0x1111111111111111111111111111111111111111111111111111111111111111");

	let mut registry = MockNetworkRegistry::new();
	registry
		.expect_descriptor_for()
		.withf(|name| name == "Dev")
		.returning(move |_| {
			Ok(NetworkDescriptorBuilder::new()
				.name(NetworkName::Dev)
				.genesis_hash(private_genesis)
				.chain_id(9999)
				.build())
		});

	let transport = transport_answering(block_result(&private_genesis.to_string(), "0x0"), "0x270f");
	let validator = NodeValidator::new(Arc::new(transport), Arc::new(registry));

	let report = validator.verify("Dev").await.unwrap();
	assert_eq!(report.genesis, BlockIdentifier::genesis(private_genesis));
	assert_eq!(report.chain_id, U256::from(9999u64));
}

#[tokio::test]
async fn test_verify_rejects_node_on_other_chain() {
	let transport = transport_answering(block_result(&CORE_GENESIS_HASH.to_string(), "0x0"), "0x45c");
	let validator = NodeValidator::new(Arc::new(transport), Arc::new(NetworkRegistry::new()));

	let err = validator.verify("Buffalo").await.unwrap_err();
	assert!(err.is_fatal());
	match err {
		ValidationError::Registry(RegistryError::GenesisMismatch(ctx)) => {
			assert_eq!(
				ctx.metadata_value("expected_hash"),
				Some(BUFFALO_GENESIS_HASH.to_string().as_str())
			);
			assert_eq!(ctx.metadata_value("observed_index"), Some("0"));
		}
		other => panic!("expected GenesisMismatch, got {:?}", other),
	}
}

#[tokio::test]
async fn test_verify_rejects_non_genesis_block() {
	let transport = transport_answering(
		block_result(&BUFFALO_GENESIS_HASH.to_string(), "0x1"),
		"0x45b",
	);
	let validator = NodeValidator::new(Arc::new(transport), Arc::new(NetworkRegistry::new()));

	assert!(validator.verify("Buffalo").await.unwrap_err().is_fatal());
}

#[tokio::test]
async fn test_verify_reports_missing_block() {
	let transport = transport_answering(serde_json::Value::Null, "0x45b");
	let validator = NodeValidator::new(Arc::new(transport), Arc::new(NetworkRegistry::new()));

	let err = validator.verify("Buffalo").await.unwrap_err();
	assert!(!err.is_fatal());
	assert!(matches!(
		err,
		ValidationError::Transport(TransportError::ResponseParse(_))
	));
}

#[tokio::test]
async fn test_verify_over_http() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("POST", "/")
		.match_body(Matcher::PartialJson(json!([
			{ "method": "eth_getBlockByNumber", "params": ["0x0", false] },
			{ "method": "eth_chainId" }
		])))
		.with_header("content-type", "application/json")
		.with_body(
			json!([
				rpc_result(2, json!("0x45b")),
				rpc_result(
					1,
					block_result(&BUFFALO_GENESIS_HASH.to_string(), "0x0")
				),
			])
			.to_string(),
		)
		.create_async()
		.await;

	let transport = create_test_transport(&server.url());
	let validator = NodeValidator::new(Arc::new(transport), Arc::new(NetworkRegistry::new()));

	let report = validator.verify("Buffalo").await.unwrap();
	assert_eq!(report.chain_id, U256::from(1115u64));
	assert_eq!(report.genesis.hash, BUFFALO_GENESIS_HASH);
	mock.assert_async().await;
}
