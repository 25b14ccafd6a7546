//! Person domain model.
//!
//! # Responsibility
//! - Define the canonical contact record and its validated field types.
//! - Own the "same person" identity rule used by uniqueness checks.
//!
//! # Invariants
//! - Every field value is validated at construction and deserialization.
//! - Tags are kept sorted and deduplicated.
//! - Two persons are the same person iff their names match ignoring case
//!   and internal whitespace runs.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\p{N}][\p{L}\p{N} ]*$").expect("valid name regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{3,}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[\p{L}\p{N}]+([+_.\-][\p{L}\p{N}]+)*@([\p{L}\p{N}]+(-[\p{L}\p{N}]+)*\.)*[\p{L}\p{N}]{2,}(-[\p{L}\p{N}]+)*$",
    )
    .expect("valid email regex")
});
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\p{L}\p{N}]+$").expect("valid tag regex"));

pub const NAME_CONSTRAINTS: &str =
    "Names should only contain alphanumeric characters and spaces, and it should not be blank";
pub const PHONE_CONSTRAINTS: &str =
    "Phone numbers should only contain numbers, and it should be at least 3 digits long";
pub const EMAIL_CONSTRAINTS: &str = "Emails should be of the format local-part@domain. \
The local-part should only contain alphanumeric characters and the special characters +_.- \
and may not start or end with a special character. \
The domain is made up of labels separated by periods; each label starts and ends with an \
alphanumeric character, and the last label is at least 2 characters long";
pub const ADDRESS_CONSTRAINTS: &str = "Addresses can take any values, and it should not be blank";
pub const TAG_CONSTRAINTS: &str = "Tag names should be alphanumeric";

/// Field-level validation failure for person data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonValidationError {
    InvalidName(String),
    InvalidPhone(String),
    InvalidEmail(String),
    InvalidAddress(String),
    InvalidTag(String),
}

impl PersonValidationError {
    /// Human-readable constraint for the failing field.
    pub fn constraints(&self) -> &'static str {
        match self {
            Self::InvalidName(_) => NAME_CONSTRAINTS,
            Self::InvalidPhone(_) => PHONE_CONSTRAINTS,
            Self::InvalidEmail(_) => EMAIL_CONSTRAINTS,
            Self::InvalidAddress(_) => ADDRESS_CONSTRAINTS,
            Self::InvalidTag(_) => TAG_CONSTRAINTS,
        }
    }
}

impl Display for PersonValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.constraints())
    }
}

impl Error for PersonValidationError {}

macro_rules! string_field {
    ($ty:ident) => {
        impl $ty {
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl Display for $ty {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = PersonValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.0
            }
        }
    };
}

/// Contact display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn parse(value: impl Into<String>) -> Result<Self, PersonValidationError> {
        let value = value.into();
        if NAME_RE.is_match(&value) {
            Ok(Self(value))
        } else {
            Err(PersonValidationError::InvalidName(value))
        }
    }

    /// Key compared by the "same person" rule.
    pub fn identity_key(&self) -> String {
        self.0
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

string_field!(Name);

/// Contact phone number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn parse(value: impl Into<String>) -> Result<Self, PersonValidationError> {
        let value = value.into();
        if PHONE_RE.is_match(&value) {
            Ok(Self(value))
        } else {
            Err(PersonValidationError::InvalidPhone(value))
        }
    }
}

string_field!(Phone);

/// Contact email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn parse(value: impl Into<String>) -> Result<Self, PersonValidationError> {
        let value = value.into();
        if EMAIL_RE.is_match(&value) {
            Ok(Self(value))
        } else {
            Err(PersonValidationError::InvalidEmail(value))
        }
    }
}

string_field!(Email);

/// Contact postal address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub fn parse(value: impl Into<String>) -> Result<Self, PersonValidationError> {
        let value = value.into();
        match value.chars().next() {
            Some(first) if !first.is_whitespace() => Ok(Self(value)),
            _ => Err(PersonValidationError::InvalidAddress(value)),
        }
    }
}

string_field!(Address);

/// Single-word label attached to a person.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub fn parse(value: impl Into<String>) -> Result<Self, PersonValidationError> {
        let value = value.into();
        if TAG_RE.is_match(&value) {
            Ok(Self(value))
        } else {
            Err(PersonValidationError::InvalidTag(value))
        }
    }
}

string_field!(Tag);

/// Free-form annotation. Any text is accepted, including empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Remark(String);

impl Remark {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Remark {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonical contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    /// Missing in records written before remarks existed.
    #[serde(default)]
    pub remark: Remark,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
}

impl Person {
    /// Creates a person with an empty remark.
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            remark: Remark::default(),
            tags: tags.into_iter().collect(),
        }
    }

    /// Returns a copy of this person carrying `remark`; all other fields are kept.
    pub fn with_remark(&self, remark: Remark) -> Self {
        Self {
            remark,
            ..self.clone()
        }
    }

    /// Weaker notion of equality used to reject duplicate contacts.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name.identity_key() == other.name.identity_key()
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Remark: {}; Tags: ",
            self.name, self.phone, self.email, self.address, self.remark
        )?;
        for tag in &self.tags {
            write!(f, "[{tag}]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Address, Email, Name, Phone, Tag};

    #[test]
    fn name_rejects_blank_and_symbols() {
        assert!(Name::parse("").is_err());
        assert!(Name::parse(" Alice").is_err());
        assert!(Name::parse("Alice*").is_err());
        assert!(Name::parse("Alice Pauline 2nd").is_ok());
    }

    #[test]
    fn phone_requires_three_digits() {
        assert!(Phone::parse("91").is_err());
        assert!(Phone::parse("9a11").is_err());
        assert!(Phone::parse("911").is_ok());
    }

    #[test]
    fn email_accepts_common_shapes() {
        assert!(Email::parse("alice@example.com").is_ok());
        assert!(Email::parse("a.b+c@sub-domain.example.org").is_ok());
        assert!(Email::parse("alice@localhost").is_ok());
        assert!(Email::parse("-alice@example.com").is_err());
        assert!(Email::parse("alice@example.c").is_err());
        assert!(Email::parse("alice.example.com").is_err());
    }

    #[test]
    fn address_and_tag_rules() {
        assert!(Address::parse(" leading space").is_err());
        assert!(Address::parse("Blk 1, #01-01").is_ok());
        assert!(Tag::parse("owesMoney").is_ok());
        assert!(Tag::parse("owes money").is_err());
    }

    #[test]
    fn identity_key_ignores_case_and_spacing() {
        let a = Name::parse("Alice  Pauline").unwrap();
        let b = Name::parse("alice pauline").unwrap();
        assert_eq!(a.identity_key(), b.identity_key());
    }
}
