//! Fuzz target for rule compilation and masking.
//!
//! Tests that compiling arbitrary pattern sources and masking arbitrary
//! attribute values never panics; compilation may only return an error.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sp_config::PatternSpec;
use sp_obfuscate::ObfuscationRule;

fuzz_target!(|input: (String, Option<String>, String, String)| {
    let (pattern, replace_regex, key, value) = input;

    let mut spec = PatternSpec::new(pattern).check_key(true).check_data(true);
    if let Some(replace) = replace_regex {
        spec = spec.replace_regex(replace);
    }

    if let Ok(rule) = ObfuscationRule::compile(&spec) {
        if rule.matches(&key, &value) {
            let masked = rule.apply(&value);
            // A triggered value is never longer than original + token
            // growth; mainly we care that apply returns at all.
            let _ = masked;
        }
    }
});
