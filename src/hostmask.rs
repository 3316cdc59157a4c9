//! Admin and owner hostmask patterns.
//!
//! Patterns use IRC wildcards: `*` matches any run of characters and `?`
//! matches exactly one. Everything else is literal. Matching is
//! case-insensitive under RFC 1459 case mapping and always covers the
//! whole candidate.
//!
//! A sender matches a pattern when the pattern matches either the bare
//! nickname or `nick@host`. Operators key admin entries on the nickname
//! alone when the host is unstable, and on `nick@host` when the nickname
//! is shared; both forms are honoured.

use lpbot_proto::{casemap, Sender};
use regex::{Regex, RegexBuilder};

use crate::error::PatternError;

/// A compiled hostmask pattern.
#[derive(Debug, Clone)]
pub struct HostmaskPattern {
    source: String,
    regex: Regex,
}

impl HostmaskPattern {
    /// Compile a pattern such as `alice`, `alice@*.example.org` or `ad?in*`.
    ///
    /// Fails on empty patterns and on patterns containing whitespace or
    /// control characters, which can never match a sender.
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        if pattern.is_empty() {
            return Err(PatternError::Empty);
        }
        if let Some(found) = pattern.chars().find(|c| c.is_whitespace() || c.is_control()) {
            return Err(PatternError::IllegalCharacter {
                pattern: pattern.to_string(),
                found,
            });
        }

        let regex = RegexBuilder::new(&wildcard_to_regex(&casemap::fold(pattern)))
            .dot_matches_new_line(true)
            .build()
            .map_err(|source| PatternError::Regex {
                pattern: pattern.to_string(),
                source,
            })?;

        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// The pattern as configured.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Test one candidate string.
    pub fn is_match(&self, candidate: &str) -> bool {
        self.regex.is_match(&casemap::fold(candidate))
    }

    /// Test a sender's bare nickname, then its `nick@host` form.
    pub fn matches_sender(&self, sender: &Sender) -> bool {
        self.regex.is_match(sender.nick.folded()) || self.is_match(&sender.nick_at_host())
    }
}

/// Translate an already case-folded wildcard pattern into an anchored regex.
fn wildcard_to_regex(pattern: &str) -> String {
    let mut regex = String::with_capacity(pattern.len() + 8);
    regex.push('^');
    let mut buf = [0u8; 4];
    for c in pattern.chars() {
        match c {
            '*' => regex.push_str(".*"),
            '?' => regex.push('.'),
            c => regex.push_str(&regex::escape(c.encode_utf8(&mut buf))),
        }
    }
    regex.push('$');
    regex
}

/// The configured admin patterns, compiled once at load time.
#[derive(Debug, Clone, Default)]
pub struct AdminList {
    patterns: Vec<HostmaskPattern>,
}

impl AdminList {
    /// Compile every pattern, failing on the first bad one.
    pub fn compile<I, S>(patterns: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| HostmaskPattern::compile(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Whether any pattern matches the sender.
    pub fn matches_sender(&self, sender: &Sender) -> bool {
        self.patterns.iter().any(|p| p.matches_sender(sender))
    }

    /// Number of patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Iterate over the compiled patterns.
    pub fn iter(&self) -> impl Iterator<Item = &HostmaskPattern> {
        self.patterns.iter()
    }
}
