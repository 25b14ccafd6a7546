use crate::logic::commands::{person_at, Command, CommandOutput, CommandResult};
use crate::logic::index::Index;
use crate::model::model_manager::Model;
use crate::model::person::Remark;

/// Replaces the remark of the person at a displayed index.
///
/// An empty remark removes the existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemarkCommand {
    index: Index,
    remark: Remark,
}

impl RemarkCommand {
    pub const COMMAND_WORD: &'static str = "remark";
    pub const MESSAGE_USAGE: &'static str = "remark: Edits the remark of the person identified by \
the index number used in the displayed person list. Existing remark will be overwritten by the \
input.\n\
Parameters: INDEX (must be a positive integer) r/[REMARK]\n\
Example: remark 1 r/Likes to swim.";

    pub fn new(index: Index, remark: Remark) -> Self {
        Self { index, remark }
    }

    pub fn index(&self) -> Index {
        self.index
    }

    pub fn remark(&self) -> &Remark {
        &self.remark
    }
}

impl Command for RemarkCommand {
    fn command_word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn execute(&self, model: &mut dyn Model) -> CommandResult<CommandOutput> {
        let target = person_at(model, self.index)?;
        let edited = target.with_remark(self.remark.clone());
        model.set_person(&target, edited.clone())?;

        let feedback = if self.remark.is_empty() {
            format!("Removed remark from Person: {edited}")
        } else {
            format!("Added remark to Person: {edited}")
        };
        Ok(CommandOutput::new(feedback))
    }
}
