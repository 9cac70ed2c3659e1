//! Person filtering predicates.

use crate::domain::NamedValue;
use crate::models::Person;

/// Matches persons whose name contains any of the keywords as a whole word.
///
/// Matching is case-insensitive. "Alice" matches "alice pauline" but "Ali"
/// does not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameContainsKeywordsPredicate {
    keywords: Vec<String>,
}

impl NameContainsKeywordsPredicate {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn test(&self, person: &Person) -> bool {
        self.keywords
            .iter()
            .any(|keyword| contains_word_ignore_case(person.name().as_str(), keyword))
    }
}

/// Returns true if `sentence` contains `word` as a whole, whitespace-separated word.
fn contains_word_ignore_case(sentence: &str, word: &str) -> bool {
    let word = word.trim();
    if word.is_empty() {
        return false;
    }
    sentence
        .split_whitespace()
        .any(|candidate| candidate.eq_ignore_ascii_case(word))
}
