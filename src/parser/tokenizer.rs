//! Prefix-based argument tokenizer.
//!
//! Splits `n/John Doe p/98765432 t/friend t/colleague` into a preamble (the
//! text before the first prefix) and the values following each prefix.

use std::collections::HashMap;

/// An argument prefix such as `n/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(prefix: &'static str) -> Self {
        Self(prefix)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");
pub const PREFIX_DATE: Prefix = Prefix::new("d/");
pub const PREFIX_CID: Prefix = Prefix::new("c/");
/// Same text as [`PREFIX_PHONE`]; no command takes both.
pub const PREFIX_PID: Prefix = PREFIX_PHONE;

/// Values found for each prefix, in the order they appeared.
#[derive(Debug, Default)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// The last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Every value given for `prefix`, possibly empty.
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values
            .get(&prefix)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn preamble(&self) -> &str {
        &self.preamble
    }
}

/// Tokenize `args` using `prefixes`.
///
/// A prefix only counts when it starts the string or follows whitespace, so
/// the `e/` inside `www.site.com/e/x` is left alone. Values are trimmed.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = Vec::new();
    for prefix in prefixes {
        let needle = prefix.as_str();
        let mut from = 0;
        while let Some(found) = args[from..].find(needle) {
            let at = from + found;
            let at_boundary = at == 0
                || args[..at]
                    .chars()
                    .next_back()
                    .map_or(false, char::is_whitespace);
            if at_boundary {
                positions.push((at, *prefix));
            }
            from = at + needle.len();
        }
    }
    positions.sort_by_key(|(at, _)| *at);

    let preamble_end = positions.first().map_or(args.len(), |(at, _)| *at);
    let mut map = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (i, (at, prefix)) in positions.iter().enumerate() {
        let value_start = at + prefix.as_str().len();
        let value_end = positions.get(i + 1).map_or(args.len(), |(next, _)| *next);
        map.values
            .entry(*prefix)
            .or_default()
            .push(args[value_start..value_end].trim().to_string());
    }

    map
}
