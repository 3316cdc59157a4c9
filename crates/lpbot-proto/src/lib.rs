//! # lpbot-proto
//!
//! Turns raw IRC lines into the event values the lpbot command layer
//! matches against.
//!
//! ## Features
//!
//! - IRCv3 message tags, with flags kept apart from empty values
//! - `nick!user@host` prefix decomposition
//! - Case-insensitive [`Identifier`]s using RFC 1459 case mapping
//! - Private-message aware reply targets
//! - CTCP verbs lifted into an `intent` tag
//!
//! Parsing never panics and never fails on malformed tags, missing
//! prefixes or missing trailing text; those degrade to empty fields.
//!
//! ## Quick Start
//!
//! ```rust
//! use lpbot_proto::{IntentKind, PreTrigger};
//!
//! let raw = "@time=2024-05-01T12:00:00Z :dan!d@example.org PRIVMSG #lpbot :\x01ACTION waves\x01";
//! let message = PreTrigger::parse("lpbot", raw).expect("line has a command");
//!
//! assert_eq!(message.tags().value("time"), Some("2024-05-01T12:00:00Z"));
//! assert_eq!(message.intent(), Some(IntentKind::Action));
//! assert_eq!(message.text(), "waves");
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod casemap;
pub mod error;
pub mod identifier;
pub mod intent;
pub mod prefix;
pub mod pretrigger;
pub mod tags;

pub use self::error::ParseError;
pub use self::identifier::Identifier;
pub use self::intent::IntentKind;
pub use self::prefix::Sender;
pub use self::pretrigger::PreTrigger;
pub use self::tags::{Tags, INTENT_TAG};
