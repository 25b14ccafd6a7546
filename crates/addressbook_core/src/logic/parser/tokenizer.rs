//! Prefix-based argument tokenizer.
//!
//! Splits `" n/John p/123 t/a t/b"` into a preamble plus values per prefix.
//! A prefix only counts when it starts the string or follows whitespace.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// Argument marker such as `n/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(prefix: &'static str) -> Self {
        Self(prefix)
    }

    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl Display for Prefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");
pub const PREFIX_REMARK: Prefix = Prefix::new("r/");

/// Tokenized arguments: preamble text and trimmed values per prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Text before the first recognised prefix, trimmed.
    pub fn preamble(&self) -> &str {
        self.preamble.as_str()
    }

    /// Last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Every value given for `prefix`, in input order.
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values
            .get(&prefix)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    /// Prefixes among `prefixes` that were given more than once.
    pub fn repeated(&self, prefixes: &[Prefix]) -> Vec<Prefix> {
        prefixes
            .iter()
            .copied()
            .filter(|prefix| self.all_values(*prefix).len() > 1)
            .collect()
    }
}

/// Tokenizes `args` using the given prefixes.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(|prefix| {
            args.match_indices(prefix.as_str())
                .map(|(start, _)| start)
                .filter(|start| {
                    args[..*start]
                        .chars()
                        .next_back()
                        .map_or(true, char::is_whitespace)
                })
                .map(move |start| (start, *prefix))
        })
        .collect();
    positions.sort_by_key(|(start, _)| *start);

    let preamble_end = positions.first().map_or(args.len(), |(start, _)| *start);
    let mut multimap = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (slot, (start, prefix)) in positions.iter().enumerate() {
        let value_start = start + prefix.as_str().len();
        let value_end = positions
            .get(slot + 1)
            .map_or(args.len(), |(next_start, _)| *next_start);
        multimap
            .values
            .entry(*prefix)
            .or_default()
            .push(args[value_start..value_end].trim().to_string());
    }

    multimap
}
