//! Session model contract and in-memory implementation.
//!
//! # Responsibility
//! - Own the address book, user preferences and active person filter for
//!   one session.
//! - Expose the read/write surface commands execute against.
//!
//! # Invariants
//! - All address book mutations go through `AddressBook` write paths, so
//!   the uniqueness invariant holds after every call.
//! - A failed mutation leaves the model unchanged.

use crate::model::address_book::{AddressBook, AddressBookResult};
use crate::model::person::Person;
use crate::model::person_filter::PersonFilter;
use crate::model::user_prefs::UserPrefs;
use log::debug;
use std::path::{Path, PathBuf};

/// Read/write surface that commands execute against.
pub trait Model {
    fn user_prefs(&self) -> &UserPrefs;
    fn set_user_prefs(&mut self, user_prefs: UserPrefs);
    fn address_book_file_path(&self) -> &Path;
    fn set_address_book_file_path(&mut self, path: PathBuf);

    fn address_book(&self) -> &AddressBook;
    /// Replaces the whole address book, e.g. for `clear`.
    fn set_address_book(&mut self, address_book: AddressBook);
    fn has_person(&self, person: &Person) -> bool;
    /// Adds a person and resets the filter so the new entry is visible.
    fn add_person(&mut self, person: Person) -> AddressBookResult<()>;
    fn delete_person(&mut self, target: &Person) -> AddressBookResult<()>;
    fn set_person(&mut self, target: &Person, edited: Person) -> AddressBookResult<()>;

    /// Persons visible under the active filter, in address book order.
    fn filtered_person_list(&self) -> Vec<&Person>;
    fn person_filter(&self) -> &PersonFilter;
    fn update_filtered_person_list(&mut self, filter: PersonFilter);
}

/// Default in-memory model for one application session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelManager {
    address_book: AddressBook,
    user_prefs: UserPrefs,
    filter: PersonFilter,
}

impl ModelManager {
    pub fn new(address_book: AddressBook, user_prefs: UserPrefs) -> Self {
        debug!(
            "event=model_init module=model status=ok persons={}",
            address_book.len()
        );
        Self {
            address_book,
            user_prefs,
            filter: PersonFilter::All,
        }
    }
}

impl Model for ModelManager {
    fn user_prefs(&self) -> &UserPrefs {
        &self.user_prefs
    }

    fn set_user_prefs(&mut self, user_prefs: UserPrefs) {
        self.user_prefs = user_prefs;
    }

    fn address_book_file_path(&self) -> &Path {
        self.user_prefs.address_book_file_path.as_path()
    }

    fn set_address_book_file_path(&mut self, path: PathBuf) {
        self.user_prefs.address_book_file_path = path;
    }

    fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    fn set_address_book(&mut self, address_book: AddressBook) {
        self.address_book = address_book;
    }

    fn has_person(&self, person: &Person) -> bool {
        self.address_book.has_person(person)
    }

    fn add_person(&mut self, person: Person) -> AddressBookResult<()> {
        self.address_book.add_person(person)?;
        self.filter = PersonFilter::All;
        Ok(())
    }

    fn delete_person(&mut self, target: &Person) -> AddressBookResult<()> {
        self.address_book.remove_person(target)
    }

    fn set_person(&mut self, target: &Person, edited: Person) -> AddressBookResult<()> {
        self.address_book.set_person(target, edited)
    }

    fn filtered_person_list(&self) -> Vec<&Person> {
        self.address_book
            .persons()
            .iter()
            .filter(|person| self.filter.matches(person))
            .collect()
    }

    fn person_filter(&self) -> &PersonFilter {
        &self.filter
    }

    fn update_filtered_person_list(&mut self, filter: PersonFilter) {
        self.filter = filter;
    }
}
