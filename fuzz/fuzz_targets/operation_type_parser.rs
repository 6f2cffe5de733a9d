#![no_main]

use corechain_registry::models::{classify, is_call_family, is_create_family};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let action = String::from_utf8_lossy(data);
    if let Ok(operation_type) = classify(&action) {
        assert_eq!(operation_type.as_str(), action);
    }
    assert!(!(is_call_family(&action) && is_create_family(&action)));
});
