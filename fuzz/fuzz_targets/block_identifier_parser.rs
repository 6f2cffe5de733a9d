#![no_main]

use corechain_registry::services::validation::{parse_block_identifier, parse_quantity};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) {
        let _ = parse_block_identifier(&value);
        let _ = parse_quantity("eth_chainId", &value);
    }
});
