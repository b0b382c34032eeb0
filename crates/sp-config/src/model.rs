//! Typed obfuscation configuration model.
//!
//! Mirrors the configuration snapshot handed to the obfuscation manager:
//! a global on/off switch plus an ordered list of pattern entries.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::validate::{ValidationError, ValidationResult};

/// Obfuscation configuration snapshot.
///
/// Handed to the obfuscation manager wholesale on every reconfiguration;
/// the manager never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObfuscationConfig {
    /// Whether attribute obfuscation is active at all.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Ordered pattern entries. Order decides which rule's mask wins
    /// when several rules trigger for the same attribute.
    #[serde(default)]
    pub patterns: Vec<PatternSpec>,
}

fn default_true() -> bool {
    true
}

impl Default for ObfuscationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            patterns: Vec::new(),
        }
    }
}

impl ObfuscationConfig {
    /// Create an enabled configuration with the given patterns.
    pub fn new(patterns: Vec<PatternSpec>) -> Self {
        Self {
            enabled: true,
            patterns,
        }
    }

    /// Create a disabled configuration.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            patterns: Vec::new(),
        }
    }

    /// Load configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> ValidationResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ValidationError::IoError(e.to_string()))?;
        let config: ObfuscationConfig =
            serde_json::from_str(&content).map_err(|e| ValidationError::ParseError(e.to_string()))?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> ValidationResult<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ValidationError::ParseError(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| ValidationError::IoError(e.to_string()))?;
        Ok(())
    }
}

/// One declared obfuscation pattern.
///
/// `check_key` and `check_data` select which half of an attribute the
/// trigger regex is tested against. A spec with both flags false is
/// inert; validation flags it (see [`crate::validate`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternSpec {
    /// Trigger regex source. Unanchored: the rule fires if the regex is
    /// found anywhere in the tested field.
    pub pattern: String,

    /// Test the trigger against the attribute key.
    #[serde(default)]
    pub check_key: bool,

    /// Test the trigger against the attribute value.
    #[serde(default)]
    pub check_data: bool,

    /// Compile the trigger (and the replace regex) case-insensitively.
    #[serde(default)]
    pub case_insensitive: bool,

    /// Optional mask regex. When present, masking replaces the matched
    /// parts of the value instead of the whole value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replace_regex: Option<String>,
}

impl PatternSpec {
    /// Create a spec with the given trigger and all flags off.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            check_key: false,
            check_data: false,
            case_insensitive: false,
            replace_regex: None,
        }
    }

    /// Test the trigger against attribute keys.
    pub fn check_key(mut self, check: bool) -> Self {
        self.check_key = check;
        self
    }

    /// Test the trigger against attribute values.
    pub fn check_data(mut self, check: bool) -> Self {
        self.check_data = check;
        self
    }

    /// Toggle case-insensitive compilation.
    pub fn case_insensitive(mut self, insensitive: bool) -> Self {
        self.case_insensitive = insensitive;
        self
    }

    /// Set a mask regex for partial-value replacement.
    pub fn replace_regex(mut self, regex: impl Into<String>) -> Self {
        self.replace_regex = Some(regex.into());
        self
    }
}
