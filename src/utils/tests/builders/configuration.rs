//! Test helper utilities for process configuration
//!
//! - `ConfigurationBuilder`: Builder for creating test Configuration instances

use url::Url;

use crate::{
	models::{Configuration, Mode, NetworkDescriptor},
	utils::{constants::DEFAULT_NODE_URL, tests::builders::network::NetworkDescriptorBuilder},
};

/// Builder for creating test Configuration instances
///
/// Defaults to an offline Buffalo configuration on port 8080.
pub struct ConfigurationBuilder {
	mode: Mode,
	network: NetworkDescriptor,
	port: u16,
	node_url: String,
	remote_node: bool,
	skip_node_admin: bool,
}

impl Default for ConfigurationBuilder {
	fn default() -> Self {
		Self {
			mode: Mode::Offline,
			network: NetworkDescriptorBuilder::new().build(),
			port: 8080,
			node_url: DEFAULT_NODE_URL.to_string(),
			remote_node: false,
			skip_node_admin: false,
		}
	}
}

impl ConfigurationBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn mode(mut self, mode: Mode) -> Self {
		self.mode = mode;
		self
	}

	pub fn network(mut self, network: NetworkDescriptor) -> Self {
		self.network = network;
		self
	}

	pub fn port(mut self, port: u16) -> Self {
		self.port = port;
		self
	}

	/// Sets a remote node URL.
	pub fn node_url(mut self, url: &str) -> Self {
		self.node_url = url.to_string();
		self.remote_node = true;
		self
	}

	pub fn skip_node_admin(mut self, skip: bool) -> Self {
		self.skip_node_admin = skip;
		self
	}

	pub fn build(self) -> Configuration {
		Configuration {
			mode: self.mode,
			network: self.network,
			port: self.port,
			node_url: Url::parse(&self.node_url).unwrap(),
			remote_node: self.remote_node,
			skip_node_admin: self.skip_node_admin,
		}
	}
}
