use crate::logic::commands::{Command, CommandError, CommandOutput, CommandResult};
use crate::model::model_manager::Model;

/// Failure text for recognised command words that have no behaviour yet.
pub const MESSAGE_NOT_IMPLEMENTED_YET: &str = "NOOO";

/// Stand-in for a reserved command word.
///
/// Always fails with `CommandError::NotImplemented` and never touches the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderCommand {
    command_word: &'static str,
}

impl PlaceholderCommand {
    /// Command words accepted by the parser but not built yet.
    pub const RESERVED_WORDS: &'static [&'static str] = &["undo", "redo"];

    pub fn new(command_word: &'static str) -> Self {
        Self { command_word }
    }
}

impl Command for PlaceholderCommand {
    fn command_word(&self) -> &'static str {
        self.command_word
    }

    fn execute(&self, _model: &mut dyn Model) -> CommandResult<CommandOutput> {
        Err(CommandError::NotImplemented)
    }
}
