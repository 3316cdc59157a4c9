//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.
//! Pattern syntax is checked separately, when patterns are compiled.

use super::Config;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("core.nick is required")]
    MissingNick,
    #[error("core.nick must not contain whitespace, got {0:?}")]
    NickWhitespace(String),
    #[error("core.prefix must not be empty")]
    EmptyPrefix,
    #[error("rule #{0} needs exactly one of command, nickname_command or pattern")]
    RuleShape(usize),
    #[error("rule #{0} has an empty event name")]
    EmptyEvent(usize),
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let nick = &config.core.nick;
    if nick.is_empty() {
        errors.push(ValidationError::MissingNick);
    } else if nick.chars().any(char::is_whitespace) {
        errors.push(ValidationError::NickWhitespace(nick.clone()));
    }

    if config.core.prefix.is_empty() {
        errors.push(ValidationError::EmptyPrefix);
    }

    for (index, rule) in config.rules.iter().enumerate() {
        let kinds = [&rule.command, &rule.nickname_command, &rule.pattern]
            .iter()
            .filter(|k| k.is_some())
            .count();
        if kinds != 1 {
            errors.push(ValidationError::RuleShape(index));
        }
        if rule.events.iter().any(|e| e.trim().is_empty()) {
            errors.push(ValidationError::EmptyEvent(index));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
