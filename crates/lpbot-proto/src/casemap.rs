//! RFC 1459 case mapping.
//!
//! Nicknames and channel names compare case-insensitively on IRC, and the
//! classic mapping also folds `[]\~` onto `{}|^` because of their position
//! in the Scandinavian character sets IRC grew up with. Everything outside
//! ASCII is left untouched.

use std::cmp::Ordering;

/// Fold a single character to its RFC 1459 lowercase form.
#[inline]
pub const fn fold_char(c: char) -> char {
    match c {
        'A'..='Z' => (c as u8 + 32) as char,
        '[' => '{',
        ']' => '}',
        '\\' => '|',
        '~' => '^',
        _ => c,
    }
}

/// Fold a whole string.
pub fn fold(s: &str) -> String {
    s.chars().map(fold_char).collect()
}

/// Case-insensitive equality without allocating.
pub fn eq(a: &str, b: &str) -> bool {
    a.len() == b.len() && a.chars().map(fold_char).eq(b.chars().map(fold_char))
}

/// Case-insensitive ordering without allocating.
pub fn cmp(a: &str, b: &str) -> Ordering {
    a.chars().map(fold_char).cmp(b.chars().map(fold_char))
}
