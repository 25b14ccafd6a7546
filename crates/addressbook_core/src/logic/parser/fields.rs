//! Conversions from raw argument text into validated values.
//!
//! All inputs are trimmed before validation.

use crate::logic::index::Index;
use crate::logic::parser::{ParseError, ParseResult};
use crate::model::person::{Address, Email, Name, Phone, Remark, Tag};
use std::collections::BTreeSet;

pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";

/// Parses a one-based index. Only plain ASCII digits are accepted.
pub fn parse_index(value: &str) -> ParseResult<Index> {
    let trimmed = value.trim();
    let invalid = || ParseError::InvalidIndex(trimmed.to_string());
    if trimmed.is_empty() || !trimmed.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(invalid());
    }
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or_else(invalid)
}

pub fn parse_name(value: &str) -> ParseResult<Name> {
    Ok(Name::parse(value.trim())?)
}

pub fn parse_phone(value: &str) -> ParseResult<Phone> {
    Ok(Phone::parse(value.trim())?)
}

pub fn parse_email(value: &str) -> ParseResult<Email> {
    Ok(Email::parse(value.trim())?)
}

pub fn parse_address(value: &str) -> ParseResult<Address> {
    Ok(Address::parse(value.trim())?)
}

pub fn parse_remark(value: &str) -> Remark {
    Remark::new(value.trim())
}

/// Parses every tag value; duplicates collapse.
pub fn parse_tags(values: &[String]) -> ParseResult<BTreeSet<Tag>> {
    values
        .iter()
        .map(|value| Tag::parse(value.trim()).map_err(ParseError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{parse_index, parse_tags};
    use crate::logic::parser::ParseError;

    #[test]
    fn parse_index_accepts_padded_positive_integers() {
        assert_eq!(parse_index("  2 ").unwrap().one_based(), 2);
    }

    #[test]
    fn parse_index_rejects_zero_negative_and_text() {
        for input in ["0", "-1", "+1", "abc", "", "1 2", "1.0"] {
            assert!(matches!(
                parse_index(input),
                Err(ParseError::InvalidIndex(_))
            ));
        }
    }

    #[test]
    fn parse_tags_deduplicates() {
        let tags = parse_tags(&["friend".to_string(), " friend ".to_string()]).unwrap();
        assert_eq!(tags.len(), 1);
    }
}
