use crate::properties::strategies::{action_strategy, operation_type_strategy};

use corechain_registry::models::{
	classify, is_call_family, is_create_family, OperationFamily, OperationType,
};
use proptest::{prelude::*, test_runner::Config};

proptest! {
	#![proptest_config(Config {
		failure_persistence: None,
		..Config::default()
	})]

	// Predicates are pure: same input, same answer
	#[test]
	fn test_predicates_are_stable(action in action_strategy()) {
		prop_assert_eq!(is_call_family(&action), is_call_family(&action));
		prop_assert_eq!(is_create_family(&action), is_create_family(&action));
		prop_assert_eq!(classify(&action).ok(), classify(&action).ok());
	}

	#[test]
	fn test_families_are_mutually_exclusive(action in action_strategy()) {
		prop_assert!(!(is_call_family(&action) && is_create_family(&action)));
	}

	// Every tag decodes back to its variant
	#[test]
	fn test_classify_roundtrip(operation_type in operation_type_strategy()) {
		let decoded = classify(operation_type.as_str()).unwrap();
		prop_assert_eq!(decoded, operation_type);
		prop_assert_eq!(decoded.as_str(), operation_type.as_str());
	}

	// Anything outside the tag set is rejected, never defaulted
	#[test]
	fn test_classify_is_total(action in action_strategy()) {
		let known = OperationType::tags().contains(&action);
		prop_assert_eq!(classify(&action).is_ok(), known);
		if !known {
			prop_assert!(!is_call_family(&action));
			prop_assert!(!is_create_family(&action));
		}
	}

	#[test]
	fn test_predicates_follow_family(operation_type in operation_type_strategy()) {
		let tag = operation_type.as_str();
		prop_assert_eq!(
			is_call_family(tag),
			operation_type.family() == OperationFamily::Call
		);
		prop_assert_eq!(
			is_create_family(tag),
			operation_type.family() == OperationFamily::Create
		);
	}
}

#[test]
fn test_family_examples() {
	assert!(is_call_family("STATICCALL"));
	assert!(!is_call_family("CREATE2"));
	assert!(is_create_family("CREATE2"));
	assert!(!is_call_family("DESTRUCT"));
	assert!(!is_create_family("DESTRUCT"));
	assert!(!is_call_family("SELFDESTRUCT"));
}
