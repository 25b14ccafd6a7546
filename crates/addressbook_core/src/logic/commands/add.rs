use crate::logic::commands::{Command, CommandOutput, CommandResult};
use crate::model::model_manager::Model;
use crate::model::person::Person;

/// Adds a new person to the address book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    to_add: Person,
}

impl AddCommand {
    pub const COMMAND_WORD: &'static str = "add";
    pub const MESSAGE_USAGE: &'static str = "add: Adds a person to the address book.\n\
Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS [t/TAG]...\n\
Example: add n/John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2, #02-25 \
t/friends t/owesMoney";

    pub fn new(to_add: Person) -> Self {
        Self { to_add }
    }
}

impl Command for AddCommand {
    fn command_word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn execute(&self, model: &mut dyn Model) -> CommandResult<CommandOutput> {
        model.add_person(self.to_add.clone())?;
        Ok(CommandOutput::new(format!(
            "New person added: {}",
            self.to_add
        )))
    }
}
