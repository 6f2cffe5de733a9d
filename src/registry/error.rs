//! Error types for registry lookups and classification.
//!
//! All variants are local validation failures; none of them is retried.
//! [`RegistryError::GenesisMismatch`] is the only fatal one: it means the process is
//! attached to a different chain than the one it was configured for. It is logged
//! where it is raised. The other variants answer a single lookup and are logged by
//! the caller, if at all.

use crate::utils::logging::error::{BoxedSource, ErrorContext, TraceableError};
use std::collections::HashMap;
use thiserror::Error as ThisError;

/// Represents errors that can occur while consulting the registry
#[derive(ThisError, Debug)]
pub enum RegistryError {
	/// The requested network name is not one of the compiled-in networks
	#[error("Unsupported network: {0}")]
	UnsupportedNetwork(ErrorContext),

	/// A raw action tag is outside the operation taxonomy
	#[error("Unrecognized operation type: {0}")]
	UnrecognizedOperationType(ErrorContext),

	/// The node reports a genesis identity or chain id different from the registry
	#[error("Genesis mismatch: {0}")]
	GenesisMismatch(ErrorContext),

	/// A passthrough query method outside the whitelist
	#[error("Disallowed method: {0}")]
	DisallowedMethod(ErrorContext),
}

impl RegistryError {
	// Unsupported network
	pub fn unsupported_network(
		msg: impl Into<String>,
		source: Option<BoxedSource>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::UnsupportedNetwork(ErrorContext::new(msg, source, metadata))
	}

	// Unrecognized operation type
	pub fn unrecognized_operation_type(
		msg: impl Into<String>,
		source: Option<BoxedSource>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::UnrecognizedOperationType(ErrorContext::new(msg, source, metadata))
	}

	// Genesis mismatch
	pub fn genesis_mismatch(
		msg: impl Into<String>,
		source: Option<BoxedSource>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::GenesisMismatch(ErrorContext::new_with_log(msg, source, metadata))
	}

	// Disallowed method
	pub fn disallowed_method(
		msg: impl Into<String>,
		source: Option<BoxedSource>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::DisallowedMethod(ErrorContext::new(msg, source, metadata))
	}

	/// Whether the process must stop serving after this error.
	pub fn is_fatal(&self) -> bool {
		matches!(self, Self::GenesisMismatch(_))
	}
}

impl TraceableError for RegistryError {
	fn trace_id(&self) -> String {
		match self {
			Self::UnsupportedNetwork(ctx) => ctx.trace_id.clone(),
			Self::UnrecognizedOperationType(ctx) => ctx.trace_id.clone(),
			Self::GenesisMismatch(ctx) => ctx.trace_id.clone(),
			Self::DisallowedMethod(ctx) => ctx.trace_id.clone(),
		}
	}
}
