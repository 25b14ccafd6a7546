use crate::logic::commands::{person_at, Command, CommandOutput, CommandResult};
use crate::logic::index::Index;
use crate::model::model_manager::Model;

/// Deletes the person at a displayed index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteCommand {
    target_index: Index,
}

impl DeleteCommand {
    pub const COMMAND_WORD: &'static str = "delete";
    pub const MESSAGE_USAGE: &'static str = "delete: Deletes the person identified by the index \
number used in the displayed person list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: delete 1";

    pub fn new(target_index: Index) -> Self {
        Self { target_index }
    }
}

impl Command for DeleteCommand {
    fn command_word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn execute(&self, model: &mut dyn Model) -> CommandResult<CommandOutput> {
        let target = person_at(model, self.target_index)?;
        model.delete_person(&target)?;
        Ok(CommandOutput::new(format!("Deleted Person: {target}")))
    }
}
