//! Unified error handling for lpbot.
//!
//! Line parsing never fails on server input beyond the cases in
//! [`lpbot_proto::ParseError`]. The errors here come from operator input:
//! hostmask patterns and command rules, both compiled once when the
//! configuration is loaded.

use thiserror::Error;

// ============================================================================
// Pattern Errors (admin / owner hostmasks)
// ============================================================================

/// A hostmask pattern that cannot be compiled.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("empty hostmask pattern")]
    Empty,

    #[error("hostmask pattern {pattern:?} contains illegal character {found:?}")]
    IllegalCharacter { pattern: String, found: char },

    #[error("hostmask pattern {pattern:?} failed to compile: {source}")]
    Regex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

// ============================================================================
// Rule Errors (command matching)
// ============================================================================

/// A command rule that cannot be compiled.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("rule name is empty")]
    EmptyName,

    #[error("rule {name:?} needs exactly one of command, nickname_command or pattern")]
    Shape { name: String },

    #[error("rule {name:?} failed to compile: {source}")]
    Regex {
        name: String,
        #[source]
        source: regex::Error,
    },
}

impl PatternError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "empty_pattern",
            Self::IllegalCharacter { .. } => "illegal_character",
            Self::Regex { .. } => "regex",
        }
    }
}
