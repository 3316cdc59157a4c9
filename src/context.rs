//! Read-only bot state consulted while parsing and triggering.

use lpbot_proto::{Identifier, ParseError, PreTrigger};
use tracing::{debug, info};

use crate::config::CoreConfig;
use crate::error::PatternError;
use crate::hostmask::{AdminList, HostmaskPattern};

/// The bot's own nickname and its compiled privilege patterns.
///
/// Built once when configuration loads and never mutated afterwards, so
/// one instance can be shared (e.g. behind an `Arc`) by every task that
/// parses lines.
#[derive(Debug, Clone)]
pub struct BotContext {
    nick: Identifier,
    admins: AdminList,
    owner: Option<HostmaskPattern>,
}

impl BotContext {
    /// Assemble a context from already compiled parts.
    pub fn new(nick: impl Into<Identifier>, admins: AdminList, owner: Option<HostmaskPattern>) -> Self {
        Self {
            nick: nick.into(),
            admins,
            owner,
        }
    }

    /// Compile the `[core]` section.
    pub fn from_config(core: &CoreConfig) -> Result<Self, PatternError> {
        let admins = AdminList::compile(&core.admins)?;
        for pattern in admins.iter() {
            debug!(pattern = %pattern.as_str(), "Compiled admin pattern");
        }

        let owner = core
            .owner
            .as_deref()
            .filter(|o| !o.is_empty())
            .map(HostmaskPattern::compile)
            .transpose()?;

        info!(
            nick = %core.nick,
            admins = admins.len(),
            owner = owner.is_some(),
            "Bot context ready"
        );

        Ok(Self::new(core.nick.as_str(), admins, owner))
    }

    /// The bot's own nickname.
    pub fn nick(&self) -> &Identifier {
        &self.nick
    }

    /// Compiled admin patterns.
    pub fn admins(&self) -> &AdminList {
        &self.admins
    }

    /// Compiled owner pattern, if an owner is configured.
    pub fn owner(&self) -> Option<&HostmaskPattern> {
        self.owner.as_ref()
    }

    /// Parse a line as received by this bot.
    pub fn parse(&self, line: &str) -> Result<PreTrigger, ParseError> {
        PreTrigger::parse(self.nick.as_str(), line)
    }
}
