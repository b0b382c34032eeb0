//! Error types for rule compilation.

use thiserror::Error;

/// Result type for rule compilation.
pub type Result<T> = std::result::Result<T, CompileError>;

/// Errors produced while turning a pattern spec into an executable rule.
///
/// Messages carry the operator-supplied pattern source, never attribute
/// keys or values.
#[derive(Error, Debug)]
pub enum CompileError {
    /// The trigger regex failed to compile.
    #[error("invalid trigger pattern `{pattern}`: {source}")]
    InvalidTrigger {
        pattern: String,
        source: regex::Error,
    },

    /// The replace regex failed to compile.
    #[error("invalid replace pattern `{pattern}`: {source}")]
    InvalidMask {
        pattern: String,
        source: regex::Error,
    },
}

impl CompileError {
    /// The pattern source that failed to compile.
    pub fn pattern(&self) -> &str {
        match self {
            CompileError::InvalidTrigger { pattern, .. } => pattern,
            CompileError::InvalidMask { pattern, .. } => pattern,
        }
    }
}
