//! Sender prefix decomposition.
//!
//! The prefix of a line is `nick[!user][@host]`. Server-originated lines
//! carry a bare server name, which lands in the nick slot.
//!
//! # Reference
//! - RFC 2812 Section 2.3.1: Message format

use crate::identifier::Identifier;

/// The `nick`, `user` and `host` parts of a sender prefix.
///
/// Absent parts are empty strings, never missing, so formatting code can
/// use them unconditionally.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sender {
    /// Nickname, or the server name for server-originated lines.
    pub nick: Identifier,
    /// Local username (ident).
    pub user: String,
    /// Hostname.
    pub host: String,
}

impl Sender {
    /// Split a raw prefix (without the leading `:`).
    pub fn parse(prefix: &str) -> Self {
        let (nick, user, host) = split_prefix(prefix);
        Self {
            nick: Identifier::new(nick),
            user: user.to_owned(),
            host: host.to_owned(),
        }
    }

    /// The `nick@host` form used when matching hostmask patterns.
    pub fn nick_at_host(&self) -> String {
        format!("{}@{}", self.nick, self.host)
    }
}

/// Split a prefix into borrowed `(nick, user, host)` parts.
///
/// The host is everything after the first `@`; the user sits between the
/// first `!` and that `@`.
///
/// ```
/// use lpbot_proto::prefix::split_prefix;
///
/// assert_eq!(split_prefix("nick!user@host"), ("nick", "user", "host"));
/// assert_eq!(split_prefix("nick@host"), ("nick", "", "host"));
/// assert_eq!(split_prefix("irc.example.net"), ("irc.example.net", "", ""));
/// ```
pub fn split_prefix(prefix: &str) -> (&str, &str, &str) {
    let (before_host, host) = prefix.split_once('@').unwrap_or((prefix, ""));
    let (nick, user) = before_host.split_once('!').unwrap_or((before_host, ""));
    (nick, user, host)
}
