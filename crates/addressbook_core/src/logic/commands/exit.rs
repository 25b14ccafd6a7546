use crate::logic::commands::{Command, CommandOutput, CommandResult};
use crate::model::model_manager::Model;

/// Ends the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExitCommand;

impl ExitCommand {
    pub const COMMAND_WORD: &'static str = "exit";
    pub const MESSAGE_EXIT_ACKNOWLEDGEMENT: &'static str =
        "Exiting Address Book as requested ...";
}

impl Command for ExitCommand {
    fn command_word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn execute(&self, _model: &mut dyn Model) -> CommandResult<CommandOutput> {
        Ok(CommandOutput {
            exit: true,
            ..CommandOutput::new(Self::MESSAGE_EXIT_ACKNOWLEDGEMENT)
        })
    }
}
