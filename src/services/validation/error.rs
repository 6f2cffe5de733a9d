//! Error types for node validation

use thiserror::Error;

use crate::{
	registry::RegistryError,
	services::transport::TransportError,
	utils::logging::error::TraceableError,
};

#[derive(Debug, Error)]
pub enum ValidationError {
	/// The node disagrees with the registry, or the network is unknown
	#[error(transparent)]
	Registry(#[from] RegistryError),

	/// The node could not be queried or answered with something unreadable
	#[error(transparent)]
	Transport(#[from] TransportError),
}

impl ValidationError {
	/// True when the node belongs to a different chain than the configured network.
	pub fn is_fatal(&self) -> bool {
		match self {
			Self::Registry(err) => err.is_fatal(),
			Self::Transport(_) => false,
		}
	}
}

impl TraceableError for ValidationError {
	fn trace_id(&self) -> String {
		match self {
			Self::Registry(err) => err.trace_id(),
			Self::Transport(err) => err.trace_id(),
		}
	}
}
