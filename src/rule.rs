//! Command rules: the regexes that decide which lines become triggers.
//!
//! Three shapes are supported:
//!
//! | Shape | Example line | Regex |
//! |-------|--------------|-------|
//! | command | `.help seen` | `^(?:{prefix})(help)(?:\s+(.*))?$` |
//! | nickname command | `lpbot: reload admin` | `^{nick}[:,]?\s+(reload)(?:\s+(.*))?$` |
//! | pattern | anything | `^(?:{regex})`, `$nick` expanded |
//!
//! For the first two shapes group 1 is the command word and group 2 its
//! arguments. Nicknames match case-insensitively; command words do not.

use lpbot_proto::PreTrigger;
use regex::Regex;

use crate::config::RuleConfig;
use crate::error::RuleError;
use crate::trigger::MatchGroups;

/// The placeholder expanded to the bot's nickname in pattern rules.
pub const NICK_PLACEHOLDER: &str = "$nick";

const DEFAULT_EVENT: &str = "PRIVMSG";

/// A compiled command rule.
#[derive(Debug, Clone)]
pub struct Rule {
    name: String,
    events: Vec<String>,
    regex: Regex,
}

impl Rule {
    /// A `.name`-style command introduced by `prefix` (itself a regex).
    pub fn command(prefix: &str, name: &str) -> Result<Self, RuleError> {
        let source = format!(r"^(?:{prefix})({})(?:\s+(.*))?$", regex::escape(name));
        Self::build(name, &source)
    }

    /// A command addressed to the bot by nickname: `lpbot: name args`.
    pub fn nickname_command(nick: &str, name: &str) -> Result<Self, RuleError> {
        let source = format!(
            r"^{}\s+({})(?:\s+(.*))?$",
            nick_address(nick),
            regex::escape(name)
        );
        Self::build(name, &source)
    }

    /// A free-form regex, anchored at the start of the text. `$nick`
    /// expands to the addressed-nickname prefix.
    pub fn pattern(nick: &str, name: &str, pattern: &str) -> Result<Self, RuleError> {
        let expanded = pattern.replace(NICK_PLACEHOLDER, &format!(r"{}\s+", nick_address(nick)));
        Self::build(name, &format!("^(?:{expanded})"))
    }

    /// Compile a `[[rule]]` entry.
    pub fn from_config(config: &RuleConfig, nick: &str, prefix: &str) -> Result<Self, RuleError> {
        let rule = match (&config.command, &config.nickname_command, &config.pattern) {
            (Some(command), None, None) => Self::command(prefix, command)?,
            (None, Some(command), None) => Self::nickname_command(nick, command)?,
            (None, None, Some(pattern)) => {
                let name = config.name.as_deref().unwrap_or(pattern);
                Self::pattern(nick, name, pattern)?
            }
            _ => {
                return Err(RuleError::Shape {
                    name: config.name.clone().unwrap_or_default(),
                });
            }
        };

        let rule = match &config.name {
            Some(name) => rule.with_name(name)?,
            None => rule,
        };
        Ok(rule.with_events(&config.events))
    }

    fn build(name: &str, source: &str) -> Result<Self, RuleError> {
        if name.is_empty() {
            return Err(RuleError::EmptyName);
        }
        let regex = Regex::new(source).map_err(|source| RuleError::Regex {
            name: name.to_string(),
            source,
        })?;
        Ok(Self {
            name: name.to_string(),
            events: vec![DEFAULT_EVENT.to_string()],
            regex,
        })
    }

    /// Rename the rule.
    pub fn with_name(mut self, name: &str) -> Result<Self, RuleError> {
        if name.is_empty() {
            return Err(RuleError::EmptyName);
        }
        self.name = name.to_string();
        Ok(self)
    }

    /// Listen on these events instead of `PRIVMSG`. An empty list keeps
    /// the current events.
    pub fn with_events<S: AsRef<str>>(mut self, events: &[S]) -> Self {
        if !events.is_empty() {
            self.events = events
                .iter()
                .map(|e| e.as_ref().trim().to_ascii_uppercase())
                .collect();
        }
        self
    }

    /// The rule's name, for logs.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Events this rule listens on.
    pub fn events(&self) -> &[String] {
        &self.events
    }

    /// Match a line: its event must be one of the rule's events and its
    /// trailing text must match the regex.
    pub fn matches(&self, message: &PreTrigger) -> Option<MatchGroups> {
        if !self
            .events
            .iter()
            .any(|e| e.eq_ignore_ascii_case(message.command()))
        {
            return None;
        }
        self.regex
            .captures(message.text())
            .map(|c| MatchGroups::from_captures(&c))
    }
}

/// `(?i:nick)[:,]?`, the way users address the bot.
fn nick_address(nick: &str) -> String {
    format!("(?i:{})[:,]?", regex::escape(nick))
}
