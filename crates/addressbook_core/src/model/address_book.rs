//! Address book aggregate.
//!
//! # Responsibility
//! - Keep the ordered list of persons shown to the user.
//! - Enforce the uniqueness invariant on every write path.
//!
//! # Invariants
//! - No two entries satisfy `Person::is_same_person`.
//! - Insertion order is preserved; edits keep the edited person's position.

use crate::model::person::Person;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type AddressBookResult<T> = Result<T, AddressBookError>;

/// Write-path violation for address book operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressBookError {
    /// The operation would leave two entries for the same person.
    DuplicatePerson,
    /// The target person is not in the address book.
    PersonNotFound,
}

impl Display for AddressBookError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicatePerson => write!(f, "Operation would result in duplicate persons"),
            Self::PersonNotFound => write!(f, "Cannot find the specified person"),
        }
    }
}

impl Error for AddressBookError {}

/// Ordered collection of unique persons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    persons: Vec<Person>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an address book, rejecting inputs that contain duplicates.
    pub fn from_persons(persons: Vec<Person>) -> AddressBookResult<Self> {
        let mut book = Self::new();
        book.set_persons(persons)?;
        Ok(book)
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Returns whether a person with the same identity is already present.
    pub fn has_person(&self, person: &Person) -> bool {
        self.persons
            .iter()
            .any(|existing| existing.is_same_person(person))
    }

    /// Appends `person` at the end of the list.
    pub fn add_person(&mut self, person: Person) -> AddressBookResult<()> {
        if self.has_person(&person) {
            return Err(AddressBookError::DuplicatePerson);
        }
        self.persons.push(person);
        Ok(())
    }

    /// Replaces `target` in place with `edited`.
    ///
    /// `edited` may keep the identity of `target`, but must not collide with
    /// any other entry.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> AddressBookResult<()> {
        let position = self.position_of(target)?;
        let collides = self
            .persons
            .iter()
            .enumerate()
            .any(|(index, existing)| index != position && existing.is_same_person(&edited));
        if collides {
            return Err(AddressBookError::DuplicatePerson);
        }
        self.persons[position] = edited;
        Ok(())
    }

    /// Removes the entry equal to `target`.
    pub fn remove_person(&mut self, target: &Person) -> AddressBookResult<()> {
        let position = self.position_of(target)?;
        self.persons.remove(position);
        Ok(())
    }

    /// Replaces the whole list. On error the current contents are untouched.
    pub fn set_persons(&mut self, persons: Vec<Person>) -> AddressBookResult<()> {
        for (index, person) in persons.iter().enumerate() {
            if persons[index + 1..]
                .iter()
                .any(|other| other.is_same_person(person))
            {
                return Err(AddressBookError::DuplicatePerson);
            }
        }
        self.persons = persons;
        Ok(())
    }

    fn position_of(&self, target: &Person) -> AddressBookResult<usize> {
        self.persons
            .iter()
            .position(|existing| existing == target)
            .ok_or(AddressBookError::PersonNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::{AddressBook, AddressBookError};
    use crate::model::person::{Address, Email, Name, Person, Phone};

    fn person(name: &str) -> Person {
        Person::new(
            Name::parse(name).unwrap(),
            Phone::parse("12345").unwrap(),
            Email::parse("someone@example.com").unwrap(),
            Address::parse("somewhere").unwrap(),
            [],
        )
    }

    #[test]
    fn set_persons_rejects_duplicates_and_keeps_old_state() {
        let mut book = AddressBook::from_persons(vec![person("Amy")]).unwrap();
        let err = book
            .set_persons(vec![person("Bob"), person("BOB")])
            .unwrap_err();
        assert_eq!(err, AddressBookError::DuplicatePerson);
        assert_eq!(book.persons(), &[person("Amy")]);
    }

    #[test]
    fn set_person_may_keep_own_identity() {
        let original = person("Amy");
        let mut book = AddressBook::from_persons(vec![original.clone(), person("Bob")]).unwrap();
        let mut edited = original.clone();
        edited.phone = Phone::parse("999").unwrap();
        book.set_person(&original, edited.clone()).unwrap();
        assert_eq!(book.persons()[0], edited);
    }
}
