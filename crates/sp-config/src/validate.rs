//! Semantic validation for obfuscation configuration.
//!
//! Validation is advisory tooling for the configuration path: it lets
//! operators learn about malformed or inert rules before a snapshot
//! reaches the hot path and silently degrades obfuscation. The engine
//! itself still fails safe when handed an unvalidated bad config.

use regex::RegexBuilder;
use thiserror::Error;

use crate::model::ObfuscationConfig;

/// Validation result type.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Configuration validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Pattern {index} has an empty trigger")]
    EmptyPattern { index: usize },

    #[error("Pattern {index} has an invalid trigger regex `{pattern}`: {message}")]
    InvalidTriggerRegex {
        index: usize,
        pattern: String,
        message: String,
    },

    #[error("Pattern {index} has an invalid replace regex `{pattern}`: {message}")]
    InvalidReplaceRegex {
        index: usize,
        pattern: String,
        message: String,
    },
}

impl ValidationError {
    /// Error code for structured error reporting.
    pub fn code(&self) -> u32 {
        match self {
            ValidationError::IoError(_) => 70,
            ValidationError::ParseError(_) => 71,
            ValidationError::EmptyPattern { .. } => 72,
            ValidationError::InvalidTriggerRegex { .. } => 73,
            ValidationError::InvalidReplaceRegex { .. } => 74,
        }
    }
}

/// Non-fatal findings about a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationWarning {
    /// Both `check_key` and `check_data` are false; the rule can never fire.
    InertPattern { index: usize },

    /// Obfuscation is enabled but no patterns are declared.
    EnabledWithoutPatterns,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationWarning::InertPattern { index } => {
                write!(
                    f,
                    "pattern {} checks neither key nor data and will never fire",
                    index
                )
            }
            ValidationWarning::EnabledWithoutPatterns => {
                write!(f, "obfuscation is enabled but no patterns are declared")
            }
        }
    }
}

/// Validate a configuration semantically.
///
/// Returns the list of warnings on success, or the first hard error.
/// Regex syntax is checked here with the same case-sensitivity flags the
/// engine will use, so a config that validates cleanly also compiles.
pub fn validate(config: &ObfuscationConfig) -> ValidationResult<Vec<ValidationWarning>> {
    let mut warnings = Vec::new();

    if config.enabled && config.patterns.is_empty() {
        warnings.push(ValidationWarning::EnabledWithoutPatterns);
    }

    for (index, spec) in config.patterns.iter().enumerate() {
        if spec.pattern.is_empty() {
            return Err(ValidationError::EmptyPattern { index });
        }

        check_regex(&spec.pattern, spec.case_insensitive).map_err(|e| {
            ValidationError::InvalidTriggerRegex {
                index,
                pattern: spec.pattern.clone(),
                message: e.to_string(),
            }
        })?;

        if let Some(replace) = &spec.replace_regex {
            check_regex(replace, spec.case_insensitive).map_err(|e| {
                ValidationError::InvalidReplaceRegex {
                    index,
                    pattern: replace.clone(),
                    message: e.to_string(),
                }
            })?;
        }

        if !spec.check_key && !spec.check_data {
            warnings.push(ValidationWarning::InertPattern { index });
        }
    }

    Ok(warnings)
}

fn check_regex(pattern: &str, case_insensitive: bool) -> Result<(), regex::Error> {
    RegexBuilder::new(pattern)
        .case_insensitive(case_insensitive)
        .build()
        .map(|_| ())
}
