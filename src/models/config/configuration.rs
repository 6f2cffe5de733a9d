use std::{collections::HashMap, env, fmt, str::FromStr};
use url::Url;

use crate::{
	models::{config::error::ConfigError, NetworkDescriptor},
	registry::NetworkRegistryTrait,
	utils::constants::DEFAULT_NODE_URL,
};

/// Selects online or offline operation
pub const MODE_ENV: &str = "MODE";
/// Name of the network to serve
pub const NETWORK_ENV: &str = "NETWORK";
/// Port the API server listens on
pub const PORT_ENV: &str = "PORT";
/// URL of an already running node; when unset a local node is assumed
pub const NODE_URL_ENV: &str = "GETH";
/// Skip admin calls against the node (e.g. peer management)
pub const SKIP_NODE_ADMIN_ENV: &str = "SKIP_GETH_ADMIN";

/// Whether the process may talk to a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
	/// Node access available; the node is validated against the registry on startup
	Online,
	/// No node access; only construction-style requests are served
	Offline,
}

impl FromStr for Mode {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"ONLINE" => Ok(Self::Online),
			"OFFLINE" => Ok(Self::Offline),
			_ => Err(ConfigError::validation_error(
				format!("{} is not a valid mode", s),
				None,
				Some(HashMap::from([(
					"variable".to_string(),
					MODE_ENV.to_string(),
				)])),
			)),
		}
	}
}

impl fmt::Display for Mode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Online => f.write_str("ONLINE"),
			Self::Offline => f.write_str("OFFLINE"),
		}
	}
}

/// Resolved process configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
	pub mode: Mode,
	/// Descriptor of the configured network
	pub network: NetworkDescriptor,
	pub port: u16,
	/// Node JSON-RPC endpoint
	pub node_url: Url,
	/// True when the node URL came from the environment rather than the default
	pub remote_node: bool,
	pub skip_node_admin: bool,
}

impl Configuration {
	/// Loads the configuration from the process environment.
	pub fn from_env<R: NetworkRegistryTrait>(registry: &R) -> Result<Self, ConfigError> {
		dotenvy::dotenv().ok();
		Self::from_lookup(registry, |key| env::var(key).ok())
	}

	/// Loads the configuration through an arbitrary variable lookup.
	pub fn from_lookup<R, F>(registry: &R, lookup: F) -> Result<Self, ConfigError>
	where
		R: NetworkRegistryTrait,
		F: Fn(&str) -> Option<String>,
	{
		let mode: Mode = required(&lookup, MODE_ENV)?.parse()?;

		let network_name = required(&lookup, NETWORK_ENV)?;
		let network = registry.descriptor_for(&network_name).map_err(|e| {
			ConfigError::validation_error(
				format!("{} is not a supported network", network_name),
				Some(Box::new(e)),
				Some(HashMap::from([(
					"variable".to_string(),
					NETWORK_ENV.to_string(),
				)])),
			)
		})?;

		let port_raw = required(&lookup, PORT_ENV)?;
		let port = port_raw.parse::<u16>().map_err(|e| {
			ConfigError::parse_error(
				format!("unable to parse port {}", port_raw),
				Some(Box::new(e)),
				Some(HashMap::from([(
					"variable".to_string(),
					PORT_ENV.to_string(),
				)])),
			)
		})?;

		let (node_url_raw, remote_node) = match non_empty(&lookup, NODE_URL_ENV) {
			Some(url) => (url, true),
			None => (DEFAULT_NODE_URL.to_string(), false),
		};
		let node_url = Url::parse(&node_url_raw).map_err(|e| {
			ConfigError::parse_error(
				format!("invalid node url {}", node_url_raw),
				Some(Box::new(e)),
				Some(HashMap::from([(
					"variable".to_string(),
					NODE_URL_ENV.to_string(),
				)])),
			)
		})?;

		let skip_node_admin = match non_empty(&lookup, SKIP_NODE_ADMIN_ENV) {
			Some(raw) => raw.parse::<bool>().map_err(|e| {
				ConfigError::parse_error(
					format!("unable to parse {} as a boolean", raw),
					Some(Box::new(e)),
					Some(HashMap::from([(
						"variable".to_string(),
						SKIP_NODE_ADMIN_ENV.to_string(),
					)])),
				)
			})?,
			None => false,
		};

		Ok(Self {
			mode,
			network,
			port,
			node_url,
			remote_node,
			skip_node_admin,
		})
	}

	pub fn is_online(&self) -> bool {
		self.mode == Mode::Online
	}
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
	F: Fn(&str) -> Option<String>,
{
	lookup(key).filter(|v| !v.is_empty())
}

fn required<F>(lookup: &F, key: &str) -> Result<String, ConfigError>
where
	F: Fn(&str) -> Option<String>,
{
	non_empty(lookup, key).ok_or_else(|| {
		ConfigError::validation_error(
			format!("{} must be populated", key),
			None,
			Some(HashMap::from([("variable".to_string(), key.to_string())])),
		)
	})
}
