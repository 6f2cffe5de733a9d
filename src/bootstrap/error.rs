//! Error types for startup

use thiserror::Error;

use crate::{
	models::ConfigError,
	registry::RegistryError,
	services::{transport::TransportError, validation::ValidationError},
	utils::logging::error::{BoxedSource, ErrorContext, TraceableError},
};
use std::collections::HashMap;

#[derive(Debug, Error)]
pub enum BootstrapError {
	/// The environment does not describe a usable configuration
	#[error("Configuration error: {0}")]
	Config(#[from] ConfigError),

	/// The node does not belong to the configured network, or the network is unknown
	#[error("Registry error: {0}")]
	Registry(#[from] RegistryError),

	/// The node could not be reached or queried
	#[error("Transport error: {0}")]
	Transport(#[from] TransportError),

	/// A service could not be constructed
	#[error("Initialization error: {0}")]
	Initialization(ErrorContext),
}

impl BootstrapError {
	pub fn initialization(
		msg: impl Into<String>,
		source: Option<BoxedSource>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::Initialization(ErrorContext::new_with_log(msg, source, metadata))
	}

	/// A fatal error means the process must not serve requests for this network.
	pub fn is_fatal(&self) -> bool {
		match self {
			Self::Registry(err) => err.is_fatal(),
			Self::Config(_) | Self::Transport(_) | Self::Initialization(_) => false,
		}
	}
}

impl From<ValidationError> for BootstrapError {
	fn from(err: ValidationError) -> Self {
		match err {
			ValidationError::Registry(err) => Self::Registry(err),
			ValidationError::Transport(err) => Self::Transport(err),
		}
	}
}

impl TraceableError for BootstrapError {
	fn trace_id(&self) -> String {
		match self {
			Self::Config(err) => err.trace_id(),
			Self::Registry(err) => err.trace_id(),
			Self::Transport(err) => err.trace_id(),
			Self::Initialization(ctx) => ctx.trace_id.clone(),
		}
	}
}
