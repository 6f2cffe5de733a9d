//! Node transport.
//!
//! The registry never talks to a node itself; it only supplies the values a node
//! must agree with. This module is the seam through which the validation and call
//! services reach a node: the [`JsonRpcTransport`] trait plus a JSON-RPC over HTTP
//! implementation.

mod error;
mod http;

pub use error::TransportError;
pub use http::HttpTransportClient;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// A single method invocation inside a batch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RpcRequest {
	pub method: String,
	pub params: Value,
}

impl RpcRequest {
	pub fn new(method: impl Into<String>, params: Value) -> Self {
		Self {
			method: method.into(),
			params,
		}
	}
}

/// Capability to invoke node JSON-RPC methods
#[async_trait]
pub trait JsonRpcTransport: Send + Sync {
	/// Endpoint the transport talks to
	fn url(&self) -> String;

	/// Invokes `method` and returns the `result` member of the response.
	async fn call(&self, method: &str, params: Value) -> Result<Value, TransportError>;

	/// Invokes several methods in one round trip.
	///
	/// The outer error covers the round trip itself; each inner result is the
	/// outcome of the request at the same position.
	async fn batch_call(
		&self,
		requests: Vec<RpcRequest>,
	) -> Result<Vec<Result<Value, TransportError>>, TransportError>;
}

#[cfg(test)]
mockall::mock! {
	pub JsonRpcTransport {}

	#[async_trait]
	impl JsonRpcTransport for JsonRpcTransport {
		fn url(&self) -> String;
		async fn call(&self, method: &str, params: Value) -> Result<Value, TransportError>;
		async fn batch_call(
			&self,
			requests: Vec<RpcRequest>,
		) -> Result<Vec<Result<Value, TransportError>>, TransportError>;
	}
}

/// Extracts the `result` of a JSON-RPC response, turning an `error` member into
/// [`TransportError::Rpc`].
pub fn decode_response(method: &str, mut response: Value) -> Result<Value, TransportError> {
	if let Some(error) = response.get("error").filter(|e| !e.is_null()) {
		let code = error.get("code").and_then(Value::as_i64).unwrap_or_default();
		let message = error
			.get("message")
			.and_then(Value::as_str)
			.unwrap_or("unknown error")
			.to_string();
		return Err(TransportError::rpc(
			code,
			message,
			Some(HashMap::from([("method".to_string(), method.to_string())])),
		));
	}

	match response.get_mut("result") {
		Some(result) => Ok(result.take()),
		None => Err(TransportError::response_parse(
			"missing 'result' field",
			None,
			Some(HashMap::from([("method".to_string(), method.to_string())])),
		)),
	}
}
