use crate::logic::commands::{Command, CommandOutput, CommandResult};
use crate::model::address_book::AddressBook;
use crate::model::model_manager::Model;

/// Removes every person from the address book.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearCommand;

impl ClearCommand {
    pub const COMMAND_WORD: &'static str = "clear";
    pub const MESSAGE_SUCCESS: &'static str = "Address book has been cleared!";
}

impl Command for ClearCommand {
    fn command_word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn execute(&self, model: &mut dyn Model) -> CommandResult<CommandOutput> {
        model.set_address_book(AddressBook::new());
        Ok(CommandOutput::new(Self::MESSAGE_SUCCESS))
    }
}
