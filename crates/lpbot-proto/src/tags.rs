//! IRCv3 message tags.
//!
//! A tag either carries a value (`key=value`, possibly `key=`) or is a bare
//! flag (`key`). The two are kept apart: a flag maps to `None`, an empty
//! value maps to `Some("")`.
//!
//! # Reference
//! - <https://ircv3.net/specs/extensions/message-tags>

use std::collections::HashMap;

/// The tag key under which an embedded CTCP verb is recorded.
pub const INTENT_TAG: &str = "intent";

/// Tags attached to one line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tags(HashMap<String, Option<String>>);

impl Tags {
    /// An empty tag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the tag segment of a line, without the leading `@`.
    ///
    /// Entries with an empty key are skipped; the rest of the segment is
    /// still used.
    pub fn parse(segment: &str) -> Self {
        let mut tags = HashMap::new();
        for entry in segment.split(';') {
            let (key, value) = match entry.split_once('=') {
                Some((key, value)) => (key, Some(unescape_tag_value(value))),
                None => (entry, None),
            };
            if key.is_empty() {
                if !entry.is_empty() {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(entry = %entry, "skipping tag with empty key");
                }
                continue;
            }
            tags.insert(key.to_owned(), value);
        }
        Self(tags)
    }

    /// Look up a tag.
    ///
    /// Returns `None` when the tag is absent, `Some(None)` for a bare flag
    /// and `Some(Some(value))` otherwise.
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.0.get(key).map(Option::as_deref)
    }

    /// The value of a tag, if it is present and carries one.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.get(key).flatten()
    }

    /// Whether the tag is present, with or without a value.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Set a tag, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Option<String>) {
        self.0.insert(key.into(), value);
    }

    /// Number of tags.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no tags.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(key, value)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }
}

/// Unescape a tag value from wire format.
///
/// `\:` `\s` `\\` `\r` `\n` map to `;`, space, `\`, CR and LF. Any other
/// escaped character stands for itself and a lone trailing backslash is
/// dropped.
pub fn unescape_tag_value(value: &str) -> String {
    if !value.contains('\\') {
        return value.to_owned();
    }

    let mut unescaped = String::with_capacity(value.len());
    let mut iter = value.chars();
    while let Some(c) = iter.next() {
        if c != '\\' {
            unescaped.push(c);
            continue;
        }
        match iter.next() {
            Some(':') => unescaped.push(';'),
            Some('s') => unescaped.push(' '),
            Some('r') => unescaped.push('\r'),
            Some('n') => unescaped.push('\n'),
            Some(other) => unescaped.push(other),
            None => break,
        }
    }
    unescaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_and_flag() {
        let tags = Tags::parse("badge=1;vip");
        assert_eq!(tags.len(), 2);
        assert_eq!(tags.get("badge"), Some(Some("1")));
        assert_eq!(tags.get("vip"), Some(None));
        assert_eq!(tags.get("missing"), None);
    }

    #[test]
    fn test_empty_value_is_not_a_flag() {
        let tags = Tags::parse("empty=;flag");
        assert_eq!(tags.get("empty"), Some(Some("")));
        assert_eq!(tags.get("flag"), Some(None));
        assert_eq!(tags.value("flag"), None);
    }

    #[test]
    fn test_value_split_once() {
        let tags = Tags::parse("expr=a=b");
        assert_eq!(tags.value("expr"), Some("a=b"));
    }

    #[test]
    fn test_malformed_entries_skipped() {
        let tags = Tags::parse(";;=orphan;ok=1;");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags.value("ok"), Some("1"));
    }

    #[test]
    fn test_empty_segment() {
        assert!(Tags::parse("").is_empty());
    }

    #[test]
    fn test_last_duplicate_wins() {
        let tags = Tags::parse("k=1;k=2");
        assert_eq!(tags.value("k"), Some("2"));
    }

    #[test]
    fn test_unescape() {
        assert_eq!(unescape_tag_value("plain"), "plain");
        assert_eq!(unescape_tag_value("a\\:b"), "a;b");
        assert_eq!(unescape_tag_value("hello\\sworld"), "hello world");
        assert_eq!(unescape_tag_value("c\\\\d"), "c\\d");
        assert_eq!(unescape_tag_value("x\\ry\\nz"), "x\ry\nz");
        assert_eq!(unescape_tag_value("a\\xb"), "axb");
        assert_eq!(unescape_tag_value("test\\"), "test");
    }

    #[test]
    fn test_insert_overrides() {
        let mut tags = Tags::new();
        tags.insert(INTENT_TAG, Some("ACTION".to_owned()));
        assert!(tags.contains(INTENT_TAG));
        assert_eq!(tags.value(INTENT_TAG), Some("ACTION"));
    }
}
