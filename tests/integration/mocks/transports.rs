use async_trait::async_trait;
use mockall::mock;
use serde_json::Value;

use corechain_registry::services::transport::{JsonRpcTransport, RpcRequest, TransportError};

// Mock implementation of a node transport.
// Used for testing validation and passthrough without a node.
mock! {
	pub NodeTransport {}

	#[async_trait]
	impl JsonRpcTransport for NodeTransport {
		fn url(&self) -> String;
		async fn call(&self, method: &str, params: Value) -> Result<Value, TransportError>;
		async fn batch_call(
			&self,
			requests: Vec<RpcRequest>,
		) -> Result<Vec<Result<Value, TransportError>>, TransportError>;
	}
}
