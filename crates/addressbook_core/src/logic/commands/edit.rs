use crate::logic::commands::{person_at, Command, CommandOutput, CommandResult};
use crate::logic::index::Index;
use crate::model::model_manager::Model;
use crate::model::person::{Address, Email, Name, Person, Phone, Tag};
use std::collections::BTreeSet;

/// Field replacements for an edit; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPersonDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    /// `Some(empty)` clears all tags.
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditPersonDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.tags.is_some()
    }

    /// Applies the replacements to `person`. The remark is never edited here.
    pub fn apply_to(&self, person: &Person) -> Person {
        Person {
            name: self.name.clone().unwrap_or_else(|| person.name.clone()),
            phone: self.phone.clone().unwrap_or_else(|| person.phone.clone()),
            email: self.email.clone().unwrap_or_else(|| person.email.clone()),
            address: self
                .address
                .clone()
                .unwrap_or_else(|| person.address.clone()),
            remark: person.remark.clone(),
            tags: self.tags.clone().unwrap_or_else(|| person.tags.clone()),
        }
    }
}

/// Edits the person at a displayed index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    index: Index,
    descriptor: EditPersonDescriptor,
}

impl EditCommand {
    pub const COMMAND_WORD: &'static str = "edit";
    pub const MESSAGE_USAGE: &'static str = "edit: Edits the details of the person identified by \
the index number used in the displayed person list. Existing values will be overwritten by the \
input values.\n\
Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [t/TAG]...\n\
Example: edit 1 p/91234567 e/johndoe@example.com";

    pub fn new(index: Index, descriptor: EditPersonDescriptor) -> Self {
        Self { index, descriptor }
    }
}

impl Command for EditCommand {
    fn command_word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn execute(&self, model: &mut dyn Model) -> CommandResult<CommandOutput> {
        let target = person_at(model, self.index)?;
        let edited = self.descriptor.apply_to(&target);
        model.set_person(&target, edited.clone())?;
        Ok(CommandOutput::new(format!("Edited Person: {edited}")))
    }
}
