//! One-based list index.

use std::fmt;

/// A position in a displayed list.
///
/// Users see one-based positions; storage and lookups use zero-based offsets.
/// Keeping both behind one type stops the two from being mixed up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index(usize);

impl Index {
    /// Create an index from a one-based position.
    ///
    /// Returns `None` for 0, which has no zero-based counterpart.
    pub fn from_one_based(one_based: usize) -> Option<Self> {
        one_based.checked_sub(1).map(Self)
    }

    pub fn zero_based(&self) -> usize {
        self.0
    }

    pub fn one_based(&self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

/// Returns true if `s` is made only of ASCII digits and represents an `i32`
/// greater than zero.
///
/// Signs are rejected even though `str::parse` accepts a leading `+`.
pub fn is_non_zero_unsigned_integer(s: &str) -> bool {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    matches!(s.parse::<i32>(), Ok(value) if value > 0)
}
