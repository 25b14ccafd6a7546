use crate::logic::commands::{Command, CommandOutput, CommandResult};
use crate::model::model_manager::Model;

/// Asks the caller to show usage instructions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HelpCommand;

impl HelpCommand {
    pub const COMMAND_WORD: &'static str = "help";
    pub const MESSAGE_USAGE: &'static str =
        "help: Shows program usage instructions.\nExample: help";
    pub const SHOWING_HELP_MESSAGE: &'static str = "Showing usage instructions.";
}

impl Command for HelpCommand {
    fn command_word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn execute(&self, _model: &mut dyn Model) -> CommandResult<CommandOutput> {
        Ok(CommandOutput {
            show_help: true,
            ..CommandOutput::new(Self::SHOWING_HELP_MESSAGE)
        })
    }
}
