//! Core configuration types and loading.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use super::validation::{self, ValidationError};
use crate::error::{PatternError, RuleError};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
    #[error("invalid admin or owner pattern: {0}")]
    Pattern(#[from] PatternError),
    #[error("invalid rule: {0}")]
    Rule(#[from] RuleError),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Bot configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Identity and privileges.
    pub core: CoreConfig,
    /// Command rules, in matching order.
    #[serde(default, rename = "rule")]
    pub rules: Vec<RuleConfig>,
}

impl Config {
    /// Load configuration from a TOML file and validate it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        content.parse()
    }
}

impl std::str::FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: Config = toml::from_str(s)?;
        validation::validate(&config).map_err(ConfigError::Invalid)?;
        Ok(config)
    }
}

/// The `[core]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct CoreConfig {
    /// The bot's own nickname.
    pub nick: String,
    /// Owner identity: a nickname or hostmask pattern.
    #[serde(default)]
    pub owner: Option<String>,
    /// Admin hostmask patterns (`nick`, `nick@host`, wildcards allowed).
    #[serde(default)]
    pub admins: Vec<String>,
    /// Regex that introduces a command (default: `\.`).
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

fn default_prefix() -> String {
    r"\.".to_string()
}

/// A `[[rule]]` entry.
///
/// Exactly one of `command`, `nickname_command` or `pattern` must be set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuleConfig {
    /// Name used in logs; defaults to the command word or the pattern.
    pub name: Option<String>,
    /// `.help`-style command word.
    pub command: Option<String>,
    /// `lpbot: reload`-style command word.
    pub nickname_command: Option<String>,
    /// Raw regex; `$nick` expands to the bot's nickname and separator.
    pub pattern: Option<String>,
    /// Events the rule listens on (default: `PRIVMSG`).
    #[serde(default)]
    pub events: Vec<String>,
}
