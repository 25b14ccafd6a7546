//! Command parsing and execution pipeline.
//!
//! # Responsibility
//! - Turn one line of user input into a command and execute it.
//! - Persist the address book after every command that changes it.
//!
//! # Invariants
//! - Commands run one at a time against an exclusively owned model.
//! - Nothing is saved when parsing or execution fails.
//! - Commands that leave the address book untouched never write storage, so
//!   a book that failed to load is not overwritten by `help` or `list`.
//! - Log lines carry command words and counts only, never person data.

use crate::model::address_book::AddressBook;
use crate::model::model_manager::{Model, ModelManager};
use crate::model::person::Person;
use crate::model::user_prefs::UserPrefs;
use crate::storage::{Storage, StorageError};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub mod commands;
pub mod index;
pub mod parser;

use commands::{CommandError, CommandOutput};
use parser::{AddressBookParser, ParseError};

pub type LogicResult<T> = Result<T, LogicError>;

/// Failure anywhere in the parse → execute → save pipeline.
#[derive(Debug)]
pub enum LogicError {
    Parse(ParseError),
    Command(CommandError),
    /// The command succeeded in memory but could not be persisted.
    Storage(StorageError),
}

impl Display for LogicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::Command(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "Could not save data to file: {err}"),
        }
    }
}

impl Error for LogicError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Command(err) => Some(err),
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<ParseError> for LogicError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<CommandError> for LogicError {
    fn from(value: CommandError) -> Self {
        Self::Command(value)
    }
}

impl From<StorageError> for LogicError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Session entry point wiring parser, model and storage together.
pub struct LogicManager<S: Storage> {
    model: ModelManager,
    storage: S,
    parser: AddressBookParser,
}

impl<S: Storage> LogicManager<S> {
    pub fn new(model: ModelManager, storage: S) -> Self {
        Self {
            model,
            storage,
            parser: AddressBookParser::new(),
        }
    }

    /// Parses and executes one line of user input.
    ///
    /// # Side effects
    /// - Saves the address book when a successful command changed it.
    /// - Emits `command_execute` logging events with duration and status.
    pub fn execute(&mut self, command_text: &str) -> LogicResult<CommandOutput> {
        let started_at = Instant::now();

        let command = match self.parser.parse_command(command_text) {
            Ok(command) => command,
            Err(err) => {
                warn!(
                    "event=command_execute module=logic status=rejected error_code=parse_failed"
                );
                return Err(err.into());
            }
        };
        let command_word = command.command_word();
        let before = self.model.address_book().clone();

        let output = match command.execute(&mut self.model) {
            Ok(output) => output,
            Err(err) => {
                warn!(
                    "event=command_execute module=logic status=rejected command={command_word} duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err.into());
            }
        };

        if self.model.address_book() == &before {
            info!(
                "event=command_execute module=logic status=ok command={command_word} duration_ms={} saved=false",
                started_at.elapsed().as_millis()
            );
            return Ok(output);
        }

        if let Err(err) = self.storage.save_address_book(self.model.address_book()) {
            error!(
                "event=command_execute module=logic status=error command={command_word} duration_ms={} error_code=save_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }

        info!(
            "event=command_execute module=logic status=ok command={command_word} duration_ms={} saved=true persons={}",
            started_at.elapsed().as_millis(),
            self.model.address_book().len()
        );
        Ok(output)
    }

    pub fn address_book(&self) -> &AddressBook {
        self.model.address_book()
    }

    pub fn filtered_person_list(&self) -> Vec<&Person> {
        self.model.filtered_person_list()
    }

    pub fn user_prefs(&self) -> &UserPrefs {
        self.model.user_prefs()
    }

    pub fn model(&self) -> &ModelManager {
        &self.model
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Writes current user preferences; called once when the session ends.
    pub fn save_user_prefs(&self) -> LogicResult<()> {
        self.storage.save_user_prefs(self.model.user_prefs())?;
        Ok(())
    }
}
