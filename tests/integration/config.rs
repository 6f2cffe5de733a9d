//! Configuration loading tests.

use std::collections::HashMap;

use corechain_registry::{
	models::{ConfigError, Configuration, Mode, NetworkName},
	registry::NetworkRegistry,
};

fn load(vars: &[(&str, &str)]) -> Result<Configuration, ConfigError> {
	let vars: HashMap<String, String> = vars
		.iter()
		.map(|(k, v)| (k.to_string(), v.to_string()))
		.collect();
	Configuration::from_lookup(&NetworkRegistry::new(), |key| vars.get(key).cloned())
}

#[test]
fn test_every_network_is_configurable() {
	for name in ["Mainnet", "Ropsten", "Rinkeby", "Goerli", "Dev", "Core", "Buffalo"] {
		let config = load(&[("MODE", "OFFLINE"), ("NETWORK", name), ("PORT", "8080")]).unwrap();
		assert_eq!(config.network.name.as_str(), name);
		assert_eq!(config.mode, Mode::Offline);
	}
}

#[test]
fn test_offline_configuration_keeps_default_node() {
	let config = load(&[("MODE", "OFFLINE"), ("NETWORK", "Core"), ("PORT", "9090")]).unwrap();
	assert!(!config.is_online());
	assert!(!config.remote_node);
	assert_eq!(config.node_url.as_str(), "http://localhost:8545/");
	assert_eq!(config.network.name, NetworkName::Core);
}

#[test]
fn test_rejects_unknown_values() {
	let cases: [(&[(&str, &str)], &str); 5] = [
		(&[("MODE", "online"), ("NETWORK", "Buffalo"), ("PORT", "8080")], "MODE"),
		(&[("MODE", "ONLINE"), ("NETWORK", "buffalo"), ("PORT", "8080")], "NETWORK"),
		(&[("MODE", "ONLINE"), ("NETWORK", "Buffalo"), ("PORT", "70000")], "PORT"),
		(&[("MODE", "ONLINE"), ("NETWORK", "Buffalo"), ("PORT", "eighty")], "PORT"),
		(
			&[
				("MODE", "ONLINE"),
				("NETWORK", "Buffalo"),
				("PORT", "8080"),
				("GETH", "not a url"),
			],
			"GETH",
		),
	];

	for (vars, variable) in cases {
		let err = load(vars).unwrap_err();
		assert_eq!(err.variable(), Some(variable), "{:?}", vars);
	}
}
