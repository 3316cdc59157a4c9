//! Case-insensitive nickname and channel names.
//!
//! # Reference
//! - RFC 2812 Section 1.2.1: Users
//! - RFC 2812 Section 1.3: Channels

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::casemap;

/// Characters that introduce a channel name.
pub const CHANNEL_PREFIXES: [char; 4] = ['#', '&', '+', '!'];

/// A nickname or channel name that compares case-insensitively.
///
/// The original spelling is kept for display; equality, ordering and
/// hashing all go through the RFC 1459 folded form, so `Identifier`s can be
/// used as map keys without normalising them first.
///
/// ```
/// use lpbot_proto::Identifier;
///
/// let nick = Identifier::new("LpBot[m]");
/// assert_eq!(nick, Identifier::new("lpbot{M}"));
/// assert_eq!(nick.as_str(), "LpBot[m]");
/// assert!(Identifier::new("#rust").is_channel());
/// ```
#[derive(Clone, Default)]
pub struct Identifier {
    raw: String,
    folded: String,
}

impl Identifier {
    /// Wrap a name.
    pub fn new(name: impl Into<String>) -> Self {
        let raw = name.into();
        let folded = casemap::fold(&raw);
        Self { raw, folded }
    }

    /// The name as it was received.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The case-folded form used for comparisons.
    #[inline]
    pub fn folded(&self) -> &str {
        &self.folded
    }

    /// Whether the name is empty (e.g. a line with no prefix).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Whether this names a channel rather than a user.
    pub fn is_channel(&self) -> bool {
        self.raw.starts_with(CHANNEL_PREFIXES)
    }

    /// Whether this names a user.
    pub fn is_nick(&self) -> bool {
        !self.raw.is_empty() && !self.is_channel()
    }

    /// Consume the identifier, returning the original spelling.
    pub fn into_string(self) -> String {
        self.raw
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.folded == other.folded
    }
}

impl Eq for Identifier {}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        casemap::eq(&self.raw, other)
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        casemap::eq(&self.raw, other)
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.folded.cmp(&other.folded)
    }
}

impl Hash for Identifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.folded.hash(state);
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Identifier").field(&self.raw).finish()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Identifier {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
