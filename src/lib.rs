//! lpbot - event parsing and command triggering for an IRC bot.
//!
//! Raw lines are tokenized by [`lpbot_proto`] into [`PreTrigger`]s. This
//! crate holds the bot-side half: configuration, compiled admin/owner
//! hostmask patterns ([`BotContext`]), command [`Rule`]s and the
//! [`Trigger`] handed to command handlers.
//!
//! ```
//! use lpbot::{BotContext, Rule, Trigger, hostmask::AdminList};
//!
//! let context = BotContext::new("lpbot", AdminList::compile(["alice"]).unwrap(), None);
//! let rule = Rule::command(r"\.", "seen").unwrap();
//!
//! let message = context.parse(":alice!a@example.org PRIVMSG #lpbot :.seen bob").unwrap();
//! let matched = rule.matches(&message).unwrap();
//! let trigger = Trigger::new(&context, &message, matched);
//!
//! assert!(trigger.admin());
//! assert_eq!(trigger.group(2), Some("bob"));
//! ```

pub mod config;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod hostmask;
pub mod rule;
pub mod telemetry;
pub mod trigger;

pub use lpbot_proto::{Identifier, IntentKind, PreTrigger, Tags};

pub use self::config::{Config, ConfigError};
pub use self::context::BotContext;
pub use self::dispatch::dispatch;
pub use self::error::{PatternError, RuleError};
pub use self::rule::Rule;
pub use self::trigger::{MatchGroups, Trigger};
