//! Core domain logic for the address book.
//! This crate is the single source of truth for contact invariants.

pub mod db;
pub mod logging;
pub mod logic;
pub mod model;
pub mod repo;
pub mod storage;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use logic::commands::{
    AddCommand, ClearCommand, Command, CommandError, CommandOutput, CommandResult, DeleteCommand,
    EditCommand, EditPersonDescriptor, ExitCommand, FindCommand, HelpCommand, ListCommand,
    PlaceholderCommand, RemarkCommand, MESSAGE_NOT_IMPLEMENTED_YET,
};
pub use logic::index::Index;
pub use logic::parser::{AddressBookParser, ParseError, ParseResult};
pub use logic::{LogicError, LogicManager, LogicResult};
pub use model::address_book::{AddressBook, AddressBookError, AddressBookResult};
pub use model::model_manager::{Model, ModelManager};
pub use model::person::{
    Address, Email, Name, Person, PersonValidationError, Phone, Remark, Tag,
};
pub use model::person_filter::PersonFilter;
pub use model::sample_data::sample_address_book;
pub use model::user_prefs::UserPrefs;
pub use repo::person_repo::{PersonRepository, RepoError, RepoResult, SqlitePersonRepository};
pub use storage::{JsonUserPrefsStorage, Storage, StorageError, StorageManager, StorageResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
