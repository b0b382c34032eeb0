//! Obfuscation configuration loading and validation.
//!
//! This crate provides:
//! - Typed Rust structs for the obfuscation rule set
//! - JSON load/save for configuration snapshots
//! - Semantic validation with stable error codes
//!
//! The configuration is a plain data model: it declares *what* should be
//! obfuscated, never *how*. Compiling patterns into executable rules is
//! the job of the `sp-obfuscate` crate, which also decides what happens
//! when a declared pattern turns out to be malformed.

pub mod model;
pub mod validate;

pub use model::{ObfuscationConfig, PatternSpec};
pub use validate::{validate, ValidationError, ValidationResult, ValidationWarning};
