//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Core config struct definitions (Config, CoreConfig, RuleConfig)
//! - [`validation`]: Structural checks run by [`Config::load`]
//!
//! Hostmask patterns and rule regexes are compiled from here by
//! [`crate::context::BotContext::from_config`] and
//! [`crate::rule::Rule::from_config`].

mod types;
pub mod validation;

pub use types::{Config, ConfigError, CoreConfig, RuleConfig};
pub use validation::ValidationError;
