//! Error types for line tokenizing.
//!
//! Almost nothing a server sends is fatal to the tokenizer: malformed tags,
//! missing prefixes and absent trailing parameters all degrade to empty
//! fields. The variants here cover the lines that carry no command at all.

use thiserror::Error;

/// Convenience type alias for Results using [`ParseError`].
pub type Result<T, E = ParseError> = std::result::Result<T, E>;

/// A line that cannot be turned into a [`PreTrigger`](crate::PreTrigger).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The line was empty once the trailing CR/LF was stripped.
    #[error("empty message")]
    EmptyMessage,

    /// Tags and/or a prefix were present but no command verb followed.
    #[error("no command in line: {line:?}")]
    MissingCommand {
        /// The offending line.
        line: String,
    },
}

impl ParseError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyMessage => "empty_message",
            Self::MissingCommand { .. } => "missing_command",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(ParseError::EmptyMessage.to_string(), "empty message");
        let err = ParseError::MissingCommand {
            line: ":nick!user@host".to_owned(),
        };
        assert_eq!(err.to_string(), "no command in line: \":nick!user@host\"");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ParseError::EmptyMessage.error_code(), "empty_message");
        let err = ParseError::MissingCommand {
            line: "@a=b".to_owned(),
        };
        assert_eq!(err.error_code(), "missing_command");
    }
}
