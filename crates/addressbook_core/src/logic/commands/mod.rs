//! Command contract and concrete commands.
//!
//! # Responsibility
//! - Define the single execution contract every command implements.
//! - Define the command failure taxonomy surfaced to the user.
//!
//! # Invariants
//! - `execute` either succeeds or leaves the model unchanged.
//! - Each execution is one-shot; commands hold no state across runs.

use crate::logic::index::Index;
use crate::model::address_book::AddressBookError;
use crate::model::model_manager::Model;
use crate::model::person::Person;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod add;
mod clear;
mod delete;
mod edit;
mod exit;
mod find;
mod help;
mod list;
mod placeholder;
mod remark;

pub use add::AddCommand;
pub use clear::ClearCommand;
pub use delete::DeleteCommand;
pub use edit::{EditCommand, EditPersonDescriptor};
pub use exit::ExitCommand;
pub use find::FindCommand;
pub use help::HelpCommand;
pub use list::ListCommand;
pub use placeholder::{PlaceholderCommand, MESSAGE_NOT_IMPLEMENTED_YET};
pub use remark::RemarkCommand;

pub const MESSAGE_INVALID_PERSON_DISPLAYED_INDEX: &str = "The person index provided is invalid";
pub const MESSAGE_DUPLICATE_PERSON: &str = "This person already exists in the address book";

pub type CommandResult<T> = Result<T, CommandError>;

/// Failure of a single command execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Index does not address any person in the filtered list.
    InvalidPersonIndex { index: Index, list_size: usize },
    /// The result would contain two entries for the same person.
    DuplicatePerson,
    /// The command word is reserved but has no behaviour yet.
    NotImplemented,
    /// Any other model write-path violation.
    Model(AddressBookError),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPersonIndex { .. } => {
                write!(f, "{MESSAGE_INVALID_PERSON_DISPLAYED_INDEX}")
            }
            Self::DuplicatePerson => write!(f, "{MESSAGE_DUPLICATE_PERSON}"),
            Self::NotImplemented => write!(f, "{MESSAGE_NOT_IMPLEMENTED_YET}"),
            Self::Model(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Model(err) => Some(err),
            _ => None,
        }
    }
}

impl From<AddressBookError> for CommandError {
    fn from(value: AddressBookError) -> Self {
        match value {
            AddressBookError::DuplicatePerson => Self::DuplicatePerson,
            other => Self::Model(other),
        }
    }
}

/// Successful command outcome rendered by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Confirmation text shown to the user.
    pub feedback_to_user: String,
    /// Caller should display usage instructions.
    pub show_help: bool,
    /// Caller should end the session.
    pub exit: bool,
}

impl CommandOutput {
    pub fn new(feedback_to_user: impl Into<String>) -> Self {
        Self {
            feedback_to_user: feedback_to_user.into(),
            show_help: false,
            exit: false,
        }
    }
}

/// A unit of user intent executed against a model.
pub trait Command {
    /// Word that selects this command in user input; used for logging.
    fn command_word(&self) -> &'static str;

    fn execute(&self, model: &mut dyn Model) -> CommandResult<CommandOutput>;
}

/// Resolves `index` against the model's filtered list.
///
/// Returns an owned copy so callers can mutate the model afterwards.
pub(crate) fn person_at(model: &dyn Model, index: Index) -> CommandResult<Person> {
    let visible = model.filtered_person_list();
    visible
        .get(index.zero_based())
        .map(|person| (*person).clone())
        .ok_or(CommandError::InvalidPersonIndex {
            index,
            list_size: visible.len(),
        })
}
