use crate::logic::commands::{Command, CommandOutput, CommandResult};
use crate::model::model_manager::Model;
use crate::model::person_filter::PersonFilter;

/// Narrows the displayed list to persons whose name contains any keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    filter: PersonFilter,
}

impl FindCommand {
    pub const COMMAND_WORD: &'static str = "find";
    pub const MESSAGE_USAGE: &'static str = "find: Finds all persons whose names contain any of \
the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find alice bob charlie";

    pub fn new(keywords: Vec<String>) -> Self {
        Self {
            filter: PersonFilter::NameContainsKeywords(keywords),
        }
    }
}

impl Command for FindCommand {
    fn command_word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn execute(&self, model: &mut dyn Model) -> CommandResult<CommandOutput> {
        model.update_filtered_person_list(self.filter.clone());
        let listed = model.filtered_person_list().len();
        Ok(CommandOutput::new(format!("{listed} persons listed!")))
    }
}
