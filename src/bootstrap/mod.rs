//! Startup wiring.
//!
//! Resolves the configuration against the shared registry and, in online mode,
//! builds the node transport. The node is verified against the configured network
//! before anything is handed out; a node serving a different chain aborts startup.

mod error;

pub use error::BootstrapError;

use std::{collections::HashMap, sync::Arc};
use tracing::{error, info, instrument};

use crate::{
	models::{CallMethods, ConfigError, Configuration},
	registry::{NetworkRegistry, NetworkRegistryTrait},
	services::{
		call::CallService,
		transport::{HttpTransportClient, JsonRpcTransport},
		validation::{NodeReport, NodeValidator},
	},
	utils::logging::error::TraceableError,
};

/// Type alias for bootstrap results
pub type Result<T> = std::result::Result<T, BootstrapError>;

/// Everything a request handler needs, built once at startup
pub struct Context<T = HttpTransportClient, R = NetworkRegistry>
where
	T: JsonRpcTransport,
	R: NetworkRegistryTrait,
{
	pub registry: Arc<R>,
	pub configuration: Configuration,
	/// Present in online mode only
	pub transport: Option<Arc<T>>,
	/// What the node reported during verification
	pub node: Option<NodeReport>,
}

impl<T: JsonRpcTransport, R: NetworkRegistryTrait> Context<T, R> {
	pub fn is_online(&self) -> bool {
		self.transport.is_some()
	}

	/// Passthrough for whitelisted node queries; `None` when offline.
	pub fn call_service(&self) -> Option<CallService<T>> {
		self.transport.as_ref().map(|transport| {
			CallService::new(Arc::clone(transport), CallMethods::new())
		})
	}
}

/// Reads the process configuration from the environment, resolving the network
/// through `registry`.
pub fn load_configuration<R: NetworkRegistryTrait>(registry: &R) -> Result<Configuration> {
	Configuration::from_env(registry).map_err(config_failure)
}

/// Same as [`load_configuration`] with a caller-provided variable lookup.
pub fn load_configuration_with<R, F>(registry: &R, lookup: F) -> Result<Configuration>
where
	R: NetworkRegistryTrait,
	F: Fn(&str) -> Option<String>,
{
	Configuration::from_lookup(registry, lookup).map_err(config_failure)
}

fn config_failure(err: ConfigError) -> BootstrapError {
	error!(
		variable = err.variable().unwrap_or_default(),
		trace_id = %err.trace_id(),
		"invalid configuration: {}",
		err
	);
	BootstrapError::Config(err)
}

/// Builds the context for `configuration`, connecting to the configured node when
/// online.
///
/// `registry` must be the instance `configuration` was resolved against; it is
/// stored in the context as is.
pub async fn initialize(
	registry: Arc<NetworkRegistry>,
	configuration: Configuration,
) -> Result<Context> {
	let transport = if configuration.is_online() {
		let client = HttpTransportClient::new(configuration.node_url.clone()).map_err(|e| {
			BootstrapError::initialization(
				"failed to create node transport",
				Some(e.into()),
				Some(HashMap::from([(
					"url".to_string(),
					configuration.node_url.to_string(),
				)])),
			)
		})?;
		Some(Arc::new(client))
	} else {
		None
	};

	initialize_with(configuration, registry, transport).await
}

/// Same as [`initialize`] with a caller-provided registry and transport.
///
/// The transport is ignored in offline mode.
#[instrument(skip_all, fields(network = %configuration.network.name, mode = %configuration.mode))]
pub async fn initialize_with<T, R>(
	configuration: Configuration,
	registry: Arc<R>,
	transport: Option<Arc<T>>,
) -> Result<Context<T, R>>
where
	T: JsonRpcTransport,
	R: NetworkRegistryTrait,
{
	let network_name = configuration.network.name.as_str();
	registry.descriptor_for(network_name)?;

	if !configuration.is_online() {
		info!("offline mode, skipping node verification");
		return Ok(Context {
			registry,
			configuration,
			transport: None,
			node: None,
		});
	}

	let Some(transport) = transport else {
		return Err(BootstrapError::initialization(
			"online mode requires a node transport",
			None,
			Some(HashMap::from([(
				"network".to_string(),
				network_name.to_string(),
			)])),
		));
	};

	let validator = NodeValidator::new(Arc::clone(&transport), Arc::clone(&registry));
	let node = match validator.verify(network_name).await {
		Ok(report) => report,
		Err(err) => {
			let err = BootstrapError::from(err);
			if err.is_fatal() {
				error!(url = %transport.url(), "node serves a different chain: {}", err);
			}
			return Err(err);
		}
	};

	info!(url = %transport.url(), genesis = %node.genesis, "node verified");
	Ok(Context {
		registry,
		configuration,
		transport: Some(transport),
		node: Some(node),
	})
}
