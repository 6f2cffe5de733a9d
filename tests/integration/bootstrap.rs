//! Startup tests.

use serde_json::json;
use std::sync::Arc;

use corechain_registry::{
	bootstrap::{initialize, initialize_with, BootstrapError},
	models::{Mode, NetworkName},
	registry::NetworkRegistry,
	services::transport::TransportError,
	utils::{
		constants::{DEV_GENESIS_HASH, MAINNET_GENESIS_HASH},
		tests::{block_result, configuration::ConfigurationBuilder, network::NetworkDescriptorBuilder},
	},
};

use crate::integration::mocks::MockNodeTransport;

fn dev_configuration(mode: Mode) -> corechain_registry::models::Configuration {
	ConfigurationBuilder::new()
		.mode(mode)
		.network(
			NetworkDescriptorBuilder::new()
				.name(NetworkName::Dev)
				.genesis_hash(DEV_GENESIS_HASH)
				.chain_id(1112)
				.build(),
		)
		.build()
}

#[tokio::test]
async fn test_offline_startup() {
	let registry = Arc::new(NetworkRegistry::new());
	let context = initialize(Arc::clone(&registry), dev_configuration(Mode::Offline))
		.await
		.unwrap();
	assert!(Arc::ptr_eq(&registry, &context.registry));
	assert!(!context.is_online());
	assert!(context.call_service().is_none());
}

#[tokio::test]
async fn test_online_startup_with_dev_node() {
	let mut transport = MockNodeTransport::new();
	transport
		.expect_url()
		.returning(|| "http://localhost:8545/".to_string());
	transport.expect_batch_call().times(1).returning(|_| {
		Ok(vec![
			Ok(block_result(&DEV_GENESIS_HASH.to_string(), "0x0")),
			Ok(json!("0x458")),
		])
	});

	let context = initialize_with(
		dev_configuration(Mode::Online),
		Arc::new(NetworkRegistry::new()),
		Some(Arc::new(transport)),
	)
	.await
	.unwrap();

	assert!(context.is_online());
	assert_eq!(context.node.unwrap().genesis.hash, DEV_GENESIS_HASH);
}

#[tokio::test]
async fn test_mainnet_node_on_dev_network_is_fatal() {
	let mut transport = MockNodeTransport::new();
	transport
		.expect_url()
		.returning(|| "http://localhost:8545/".to_string());
	transport.expect_batch_call().returning(|_| {
		Ok(vec![
			Ok(block_result(&MAINNET_GENESIS_HASH.to_string(), "0x0")),
			Ok(json!("0x1")),
		])
	});

	let err = initialize_with(
		dev_configuration(Mode::Online),
		Arc::new(NetworkRegistry::new()),
		Some(Arc::new(transport)),
	)
	.await
	.err()
	.unwrap();

	assert!(err.is_fatal());
}

#[tokio::test]
async fn test_rpc_failure_is_not_fatal() {
	let mut transport = MockNodeTransport::new();
	transport
		.expect_url()
		.returning(|| "http://localhost:8545/".to_string());
	transport
		.expect_batch_call()
		.returning(|_| Err(TransportError::rpc(-32601, "batch requests disabled", None)));

	let err = initialize_with(
		dev_configuration(Mode::Online),
		Arc::new(NetworkRegistry::new()),
		Some(Arc::new(transport)),
	)
	.await
	.err()
	.unwrap();

	assert!(matches!(
		err,
		BootstrapError::Transport(TransportError::Rpc { code: -32601, .. })
	));
	assert!(!err.is_fatal());
}
