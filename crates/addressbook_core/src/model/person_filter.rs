//! Predicates selecting which persons the filtered list shows.

use crate::model::person::Person;

/// Filter applied to the address book to produce the visible person list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PersonFilter {
    /// Every person is visible.
    #[default]
    All,
    /// Persons whose name contains any keyword as a whole word, ignoring case.
    NameContainsKeywords(Vec<String>),
}

impl PersonFilter {
    pub fn matches(&self, person: &Person) -> bool {
        match self {
            Self::All => true,
            Self::NameContainsKeywords(keywords) => keywords.iter().any(|keyword| {
                person
                    .name
                    .as_str()
                    .split_whitespace()
                    .any(|word| word.to_lowercase() == keyword.to_lowercase())
            }),
        }
    }
}
