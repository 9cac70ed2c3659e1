//! Numeric identifiers for CCAs (`Cid`) and persons (`Pid`).
//!
//! Both are the one-based position shown next to the entity in its list.

use super::index::Index;
use std::fmt;

macro_rules! numeric_id {
    ($(#[$meta:meta])* $ty:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $ty(u32);

        impl $ty {
            /// Field label used in error messages.
            pub const FIELD: &'static str = $field;

            /// Parse an already trimmed string.
            ///
            /// Returns `None` unless the text is an `i32` that is not negative.
            pub fn parse(text: &str) -> Option<Self> {
                let value = text.parse::<i32>().ok()?;
                u32::try_from(value).ok().map(Self)
            }

            pub fn value(&self) -> u32 {
                self.0
            }

            /// The list position this id refers to, if any.
            pub fn to_index(&self) -> Option<Index> {
                Index::from_one_based(self.0 as usize)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

numeric_id!(
    /// Identifies a CCA by its position in the CCA list.
    Cid,
    "cid"
);

numeric_id!(
    /// Identifies a person by their position in the person list.
    Pid,
    "pid"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_parse() {
        assert_eq!(Cid::parse("3").map(|c| c.value()), Some(3));
        assert_eq!(Pid::parse("0").map(|p| p.value()), Some(0));
        assert!(Cid::parse("abc").is_none());
        assert!(Cid::parse("-1").is_none());
        assert!(Pid::parse("").is_none());
        assert!(Pid::parse("99999999999").is_none());
    }

    #[test]
    fn test_id_to_index() {
        assert_eq!(Cid::parse("2").unwrap().to_index().unwrap().zero_based(), 1);
        assert!(Pid::parse("0").unwrap().to_index().is_none());
    }

    #[test]
    fn test_id_display_is_canonical() {
        assert_eq!(Cid::parse("007").unwrap().to_string(), "7");
    }
}
