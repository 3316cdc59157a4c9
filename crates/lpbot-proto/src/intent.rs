//! CTCP markers inside PRIVMSG and NOTICE text.
//!
//! A CTCP message is wrapped in `\x01` bytes: `\x01ACTION waves\x01`. The
//! bot treats the verb like an IRCv3 intent tag and hands handlers the
//! inner text, so `/me waves` and `waves` both reach a handler as `waves`.
//!
//! # Reference
//! - <https://modern.ircdocs.horse/ctcp.html>

use std::fmt;

/// The CTCP delimiter character (`\x01`).
pub const CTCP_DELIM: char = '\x01';

/// Known CTCP verbs.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum IntentKind {
    /// ACTION - `/me` messages.
    Action,
    /// VERSION - client version query or reply.
    Version,
    /// PING - latency probe.
    Ping,
    /// TIME - local time query or reply.
    Time,
    /// Anything else.
    Other(String),
}

impl IntentKind {
    /// Classify a verb, ignoring ASCII case.
    pub fn parse(verb: &str) -> Self {
        match verb.to_ascii_uppercase().as_str() {
            "ACTION" => Self::Action,
            "VERSION" => Self::Version,
            "PING" => Self::Ping,
            "TIME" => Self::Time,
            _ => Self::Other(verb.to_owned()),
        }
    }

    /// The verb as it appears on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Action => "ACTION",
            Self::Version => "VERSION",
            Self::Ping => "PING",
            Self::Time => "TIME",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Split a delimited CTCP body into `(verb, text)`.
///
/// The body must open with `\x01`, then a verb with no whitespace, exactly
/// one space, the text, and a closing `\x01`. The closing delimiter is the
/// last one in the body; anything after it is ignored. Bodies that do not
/// fit (no space after the verb, no closing delimiter, a line feed in the
/// text) return `None`.
///
/// ```
/// use lpbot_proto::intent::extract;
///
/// assert_eq!(extract("\x01ACTION waves\x01"), Some(("ACTION", "waves")));
/// assert_eq!(extract("\x01VERSION\x01"), None);
/// assert_eq!(extract("plain text"), None);
/// ```
pub fn extract(body: &str) -> Option<(&str, &str)> {
    let inner = body.strip_prefix(CTCP_DELIM)?;
    let close = inner.rfind(CTCP_DELIM)?;
    let inner = &inner[..close];

    let verb_end = inner.find(char::is_whitespace)?;
    let (verb, rest) = inner.split_at(verb_end);
    if verb.is_empty() {
        return None;
    }
    let text = rest.strip_prefix(' ')?;
    if text.contains('\n') {
        return None;
    }
    Some((verb, text))
}

/// Whether the command verb can carry a CTCP body.
#[inline]
pub fn carries_ctcp(command: &str) -> bool {
    command.eq_ignore_ascii_case("PRIVMSG") || command.eq_ignore_ascii_case("NOTICE")
}
