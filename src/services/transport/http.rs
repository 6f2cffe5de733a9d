//! JSON-RPC over HTTP.
//!
//! Requests go through a retryable `reqwest` client, so transient failures
//! (connection errors, 429, 5xx) are retried with exponential backoff before an
//! error reaches the caller.

use anyhow::Context;
use async_trait::async_trait;
use reqwest_middleware::ClientWithMiddleware;
use serde_json::{json, Value};
use std::{
	collections::HashMap,
	sync::{
		atomic::{AtomicU64, Ordering},
		Arc,
	},
	time::Duration,
};
use tracing::instrument;
use url::Url;

use crate::{
	services::transport::{decode_response, JsonRpcTransport, RpcRequest, TransportError},
	utils::http::{create_retryable_http_client, RetryConfig},
};

/// HTTP transport bound to a single node endpoint
///
/// Cheap to clone; clones share the connection pool and the request id counter.
#[derive(Clone, Debug)]
pub struct HttpTransportClient {
	client: ClientWithMiddleware,
	url: Url,
	next_id: Arc<AtomicU64>,
}

impl HttpTransportClient {
	/// Creates a client with the default retry policy.
	pub fn new(url: Url) -> Result<Self, anyhow::Error> {
		Self::with_retry_config(url, &RetryConfig::default())
	}

	/// Creates a client with a specific retry policy.
	pub fn with_retry_config(url: Url, retry_config: &RetryConfig) -> Result<Self, anyhow::Error> {
		let base_client = reqwest::ClientBuilder::new()
			.pool_idle_timeout(Duration::from_secs(90))
			.pool_max_idle_per_host(32)
			.timeout(Duration::from_secs(30))
			.connect_timeout(Duration::from_secs(20))
			.build()
			.context("Failed to create base HTTP client")?;

		Ok(Self {
			client: create_retryable_http_client(retry_config, base_client),
			url,
			next_id: Arc::new(AtomicU64::new(1)),
		})
	}

	fn next_request_id(&self) -> u64 {
		self.next_id.fetch_add(1, Ordering::Relaxed)
	}

	fn envelope(&self, id: u64, method: &str, params: &Value) -> Value {
		json!({
			"jsonrpc": "2.0",
			"id": id,
			"method": method,
			"params": params,
		})
	}

	async fn post(&self, body: &Value) -> Result<Value, TransportError> {
		let url = self.url.to_string();

		let response = self
			.client
			.post(self.url.clone())
			.json(body)
			.send()
			.await
			.map_err(|e| {
				TransportError::network(
					format!("failed to send request to {}", url),
					Some(Box::new(e)),
					Some(HashMap::from([("url".to_string(), url.clone())])),
				)
			})?;

		let status = response.status();
		if !status.is_success() {
			let error_body = response.text().await.unwrap_or_default();
			tracing::warn!(%url, %status, "Request failed: {}", error_body);
			return Err(TransportError::http(status, url, error_body, None, None));
		}

		response.json().await.map_err(|e| {
			TransportError::response_parse(
				"Failed to parse JSON response",
				Some(Box::new(e)),
				Some(HashMap::from([("url".to_string(), url.clone())])),
			)
		})
	}
}

#[async_trait]
impl JsonRpcTransport for HttpTransportClient {
	fn url(&self) -> String {
		self.url.to_string()
	}

	#[instrument(skip(self, params), fields(url = %self.url))]
	async fn call(&self, method: &str, params: Value) -> Result<Value, TransportError> {
		let body = self.envelope(self.next_request_id(), method, &params);
		let response = self.post(&body).await?;
		decode_response(method, response)
	}

	#[instrument(skip(self, requests), fields(url = %self.url, batch_size = requests.len()))]
	async fn batch_call(
		&self,
		requests: Vec<RpcRequest>,
	) -> Result<Vec<Result<Value, TransportError>>, TransportError> {
		if requests.is_empty() {
			return Ok(Vec::new());
		}

		let ids: Vec<u64> = requests.iter().map(|_| self.next_request_id()).collect();
		let body = Value::Array(
			requests
				.iter()
				.zip(&ids)
				.map(|(request, id)| self.envelope(*id, &request.method, &request.params))
				.collect(),
		);

		let response = self.post(&body).await?;
		let Value::Array(responses) = response else {
			return Err(TransportError::response_parse(
				"batch response is not an array",
				None,
				Some(HashMap::from([("url".to_string(), self.url.to_string())])),
			));
		};

		// Nodes may answer a batch in any order
		let mut by_id: HashMap<u64, Value> = responses
			.into_iter()
			.filter_map(|r| r.get("id").and_then(Value::as_u64).map(|id| (id, r)))
			.collect();

		Ok(requests
			.iter()
			.zip(ids)
			.map(|(request, id)| match by_id.remove(&id) {
				Some(response) => decode_response(&request.method, response),
				None => Err(TransportError::response_parse(
					format!("missing response for request {}", id),
					None,
					Some(HashMap::from([(
						"method".to_string(),
						request.method.clone(),
					)])),
				)),
			})
			.collect())
	}
}
