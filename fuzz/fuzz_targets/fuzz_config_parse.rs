//! Fuzz target for obfuscation configuration parsing.
//!
//! Tests that JSON configuration parsing and semantic validation handle
//! arbitrary input without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sp_config::ObfuscationConfig;

fuzz_target!(|data: &[u8]| {
    // Try to parse as JSON - should never panic, only return an error
    if let Ok(config) = serde_json::from_slice::<ObfuscationConfig>(data) {
        let _ = sp_config::validate(&config);
    }
});
