use corechain_registry::models::{NetworkName, OperationType};
use proptest::{prelude::*, sample::select};
use strum::IntoEnumIterator;

pub fn operation_type_strategy() -> impl Strategy<Value = OperationType> {
	select(OperationType::all())
}

pub fn network_name_strategy() -> impl Strategy<Value = NetworkName> {
	select(NetworkName::iter().collect::<Vec<_>>())
}

/// Known tags, their case variants, near misses and arbitrary text.
pub fn action_strategy() -> impl Strategy<Value = String> {
	prop_oneof![
		operation_type_strategy().prop_map(|t| t.as_str().to_string()),
		operation_type_strategy().prop_map(|t| t.as_str().to_lowercase()),
		operation_type_strategy().prop_map(|t| format!(" {}", t.as_str())),
		operation_type_strategy().prop_map(|t| format!("{}_", t.as_str())),
		"[A-Z_0-9]{0,14}",
		any::<String>(),
	]
}

/// Whitelisted methods, their case variants and arbitrary method-like names.
pub fn method_strategy(whitelist: &'static [&'static str]) -> impl Strategy<Value = String> {
	prop_oneof![
		select(whitelist.to_vec()).prop_map(str::to_string),
		select(whitelist.to_vec()).prop_map(str::to_uppercase),
		select(whitelist.to_vec()).prop_map(|m| format!("{}\n", m)),
		"(eth|net|web3|debug|admin)_[a-zA-Z]{1,24}",
		any::<String>(),
	]
}
