//! Call passthrough tests.

use mockito::Matcher;
use serde_json::json;
use std::sync::Arc;

use corechain_registry::{
	models::CallMethods,
	registry::RegistryError,
	services::call::{CallError, CallService},
	utils::tests::{create_test_transport, rpc_result},
};

use crate::integration::mocks::MockNodeTransport;

#[tokio::test]
async fn test_send_raw_transaction_never_reaches_node() {
	let mut transport = MockNodeTransport::new();
	transport.expect_call().never();
	transport.expect_batch_call().never();

	let service = CallService::new(Arc::new(transport), CallMethods::new());
	let err = service
		.call("eth_sendRawTransaction", json!(["0xf86c"]))
		.await
		.unwrap_err();

	assert!(matches!(
		err,
		CallError::Registry(RegistryError::DisallowedMethod(_))
	));
}

#[tokio::test]
async fn test_every_whitelisted_method_is_forwarded() {
	let methods = CallMethods::new();

	let mut transport = MockNodeTransport::new();
	transport
		.expect_call()
		.times(methods.as_slice().len())
		.returning(|method, _| Ok(json!({ "method": method })));

	let service = CallService::new(Arc::new(transport), methods);
	for method in methods.as_slice() {
		let result = service.call(method, json!([])).await.unwrap();
		assert_eq!(result["method"], *method);
	}
}

#[tokio::test]
async fn test_receipt_lookup_over_http() {
	let tx_hash = "0x5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060";

	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("POST", "/")
		.match_body(Matcher::PartialJson(json!({
			"method": "eth_getTransactionReceipt",
			"params": [tx_hash]
		})))
		.with_header("content-type", "application/json")
		.with_body(rpc_result(1, json!({ "transactionHash": tx_hash, "status": "0x1" })).to_string())
		.create_async()
		.await;

	let service = CallService::new(
		Arc::new(create_test_transport(&server.url())),
		CallMethods::new(),
	);
	let receipt = service
		.call("eth_getTransactionReceipt", json!([tx_hash]))
		.await
		.unwrap();

	assert_eq!(receipt["status"], "0x1");
	mock.assert_async().await;
}
