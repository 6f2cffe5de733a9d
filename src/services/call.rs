//! Whitelisted passthrough of node query methods.

use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::instrument;

use crate::{
	models::CallMethods,
	registry::RegistryError,
	services::transport::{JsonRpcTransport, TransportError},
	utils::logging::error::TraceableError,
};

#[derive(Debug, Error)]
pub enum CallError {
	/// The method is outside the whitelist
	#[error(transparent)]
	Registry(#[from] RegistryError),

	/// The node call failed
	#[error(transparent)]
	Transport(#[from] TransportError),
}

impl TraceableError for CallError {
	fn trace_id(&self) -> String {
		match self {
			Self::Registry(err) => err.trace_id(),
			Self::Transport(err) => err.trace_id(),
		}
	}
}

/// Forwards whitelisted methods to the node
pub struct CallService<T: JsonRpcTransport> {
	transport: Arc<T>,
	methods: CallMethods,
}

impl<T: JsonRpcTransport> CallService<T> {
	pub fn new(transport: Arc<T>, methods: CallMethods) -> Self {
		Self { transport, methods }
	}

	pub fn methods(&self) -> &CallMethods {
		&self.methods
	}

	/// Invokes `method` on the node and returns its raw result.
	///
	/// Methods outside the whitelist fail with [`RegistryError::DisallowedMethod`]
	/// before anything is sent.
	#[instrument(skip(self, params))]
	pub async fn call(&self, method: &str, params: Value) -> Result<Value, CallError> {
		self.methods.ensure_allowed(method)?;
		Ok(self.transport.call(method, params).await?)
	}
}
