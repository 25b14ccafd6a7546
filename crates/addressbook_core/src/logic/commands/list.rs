use crate::logic::commands::{Command, CommandOutput, CommandResult};
use crate::model::model_manager::Model;
use crate::model::person_filter::PersonFilter;

/// Shows every person in the address book.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCommand;

impl ListCommand {
    pub const COMMAND_WORD: &'static str = "list";
    pub const MESSAGE_SUCCESS: &'static str = "Listed all persons";
}

impl Command for ListCommand {
    fn command_word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn execute(&self, model: &mut dyn Model) -> CommandResult<CommandOutput> {
        model.update_filtered_person_list(PersonFilter::All);
        Ok(CommandOutput::new(Self::MESSAGE_SUCCESS))
    }
}
