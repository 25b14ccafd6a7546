//! User input parsing into executable commands.
//!
//! # Responsibility
//! - Map the leading command word onto a concrete `Command`.
//! - Validate every argument before a command is built.
//!
//! # Invariants
//! - Parsing never touches the model.
//! - Single-valued prefixes given twice are rejected, not silently merged.

use crate::logic::commands::{
    AddCommand, ClearCommand, Command, DeleteCommand, EditCommand, EditPersonDescriptor,
    ExitCommand, FindCommand, HelpCommand, ListCommand, PlaceholderCommand, RemarkCommand,
};
use crate::model::person::{Person, PersonValidationError, Tag};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod fields;
pub mod tokenizer;

use fields::{
    parse_address, parse_email, parse_index, parse_name, parse_phone, parse_remark, parse_tags,
};
use tokenizer::{
    tokenize, Prefix, PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_NAME, PREFIX_PHONE, PREFIX_REMARK,
    PREFIX_TAG,
};

pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";
pub const MESSAGE_NOT_EDITED: &str = "At least one field to edit must be provided.";

pub type ParseResult<T> = Result<T, ParseError>;

/// Input that cannot be turned into a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnknownCommand(String),
    /// Arguments do not fit the command's format; carries its usage text.
    InvalidFormat { usage: &'static str },
    InvalidIndex(String),
    InvalidField(PersonValidationError),
    /// Single-valued prefixes that were given more than once.
    DuplicatePrefixes(Vec<Prefix>),
    /// `edit` without any field to change.
    NoFieldEdited,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCommand(_) => write!(f, "{MESSAGE_UNKNOWN_COMMAND}"),
            Self::InvalidFormat { usage } => write!(f, "Invalid command format! \n{usage}"),
            Self::InvalidIndex(_) => write!(f, "{}", fields::MESSAGE_INVALID_INDEX),
            Self::InvalidField(err) => write!(f, "{err}"),
            Self::DuplicatePrefixes(prefixes) => {
                write!(
                    f,
                    "Multiple values specified for the following single-valued field(s):"
                )?;
                for prefix in prefixes {
                    write!(f, " {prefix}")?;
                }
                Ok(())
            }
            Self::NoFieldEdited => write!(f, "{MESSAGE_NOT_EDITED}"),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidField(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PersonValidationError> for ParseError {
    fn from(value: PersonValidationError) -> Self {
        Self::InvalidField(value)
    }
}

/// Top-level parser for one line of user input.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressBookParser;

impl AddressBookParser {
    pub fn new() -> Self {
        Self
    }

    /// Parses `input` into a command ready for execution.
    pub fn parse_command(&self, input: &str) -> ParseResult<Box<dyn Command>> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ParseError::InvalidFormat {
                usage: HelpCommand::MESSAGE_USAGE,
            });
        }

        let (command_word, arguments) = match trimmed.find(char::is_whitespace) {
            Some(split) => trimmed.split_at(split),
            None => (trimmed, ""),
        };

        let command: Box<dyn Command> = match command_word {
            AddCommand::COMMAND_WORD => Box::new(parse_add(arguments)?),
            EditCommand::COMMAND_WORD => Box::new(parse_edit(arguments)?),
            DeleteCommand::COMMAND_WORD => Box::new(parse_delete(arguments)?),
            RemarkCommand::COMMAND_WORD => Box::new(parse_remark_command(arguments)?),
            FindCommand::COMMAND_WORD => Box::new(parse_find(arguments)?),
            ClearCommand::COMMAND_WORD => Box::new(ClearCommand),
            ListCommand::COMMAND_WORD => Box::new(ListCommand),
            HelpCommand::COMMAND_WORD => Box::new(HelpCommand),
            ExitCommand::COMMAND_WORD => Box::new(ExitCommand),
            other => match PlaceholderCommand::RESERVED_WORDS
                .iter()
                .copied()
                .find(|word| *word == other)
            {
                Some(word) => Box::new(PlaceholderCommand::new(word)),
                None => return Err(ParseError::UnknownCommand(other.to_string())),
            },
        };
        Ok(command)
    }
}

fn ensure_single_valued(
    args: &tokenizer::ArgumentMultimap,
    prefixes: &[Prefix],
) -> ParseResult<()> {
    let repeated = args.repeated(prefixes);
    if repeated.is_empty() {
        Ok(())
    } else {
        Err(ParseError::DuplicatePrefixes(repeated))
    }
}

fn parse_add(arguments: &str) -> ParseResult<AddCommand> {
    let invalid = ParseError::InvalidFormat {
        usage: AddCommand::MESSAGE_USAGE,
    };
    let args = tokenize(
        arguments,
        &[
            PREFIX_NAME,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_ADDRESS,
            PREFIX_TAG,
        ],
    );

    let required = [PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS];
    if !args.preamble().is_empty() || !required.iter().all(|prefix| args.contains(*prefix)) {
        return Err(invalid);
    }
    ensure_single_valued(&args, &required)?;

    let value = |prefix| args.value(prefix).unwrap_or_default();
    let person = Person::new(
        parse_name(value(PREFIX_NAME))?,
        parse_phone(value(PREFIX_PHONE))?,
        parse_email(value(PREFIX_EMAIL))?,
        parse_address(value(PREFIX_ADDRESS))?,
        parse_tags(args.all_values(PREFIX_TAG))?,
    );
    Ok(AddCommand::new(person))
}

fn parse_edit(arguments: &str) -> ParseResult<EditCommand> {
    let args = tokenize(
        arguments,
        &[
            PREFIX_NAME,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_ADDRESS,
            PREFIX_TAG,
        ],
    );
    let index = parse_index(args.preamble()).map_err(|_| ParseError::InvalidFormat {
        usage: EditCommand::MESSAGE_USAGE,
    })?;
    ensure_single_valued(
        &args,
        &[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS],
    )?;

    let descriptor = EditPersonDescriptor {
        name: args.value(PREFIX_NAME).map(parse_name).transpose()?,
        phone: args.value(PREFIX_PHONE).map(parse_phone).transpose()?,
        email: args.value(PREFIX_EMAIL).map(parse_email).transpose()?,
        address: args.value(PREFIX_ADDRESS).map(parse_address).transpose()?,
        tags: parse_tags_for_edit(args.all_values(PREFIX_TAG))?,
    };
    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NoFieldEdited);
    }
    Ok(EditCommand::new(index, descriptor))
}

/// A lone empty `t/` clears tags; no `t/` leaves them untouched.
fn parse_tags_for_edit(values: &[String]) -> ParseResult<Option<BTreeSet<Tag>>> {
    match values {
        [] => Ok(None),
        [only] if only.trim().is_empty() => Ok(Some(BTreeSet::new())),
        _ => parse_tags(values).map(Some),
    }
}

fn parse_delete(arguments: &str) -> ParseResult<DeleteCommand> {
    parse_index(arguments)
        .map(DeleteCommand::new)
        .map_err(|_| ParseError::InvalidFormat {
            usage: DeleteCommand::MESSAGE_USAGE,
        })
}

fn parse_remark_command(arguments: &str) -> ParseResult<RemarkCommand> {
    let args = tokenize(arguments, &[PREFIX_REMARK]);
    let index = parse_index(args.preamble()).map_err(|_| ParseError::InvalidFormat {
        usage: RemarkCommand::MESSAGE_USAGE,
    })?;
    ensure_single_valued(&args, &[PREFIX_REMARK])?;

    let remark = parse_remark(args.value(PREFIX_REMARK).unwrap_or_default());
    Ok(RemarkCommand::new(index, remark))
}

fn parse_find(arguments: &str) -> ParseResult<FindCommand> {
    let keywords = arguments
        .split_whitespace()
        .map(str::to_string)
        .collect::<Vec<_>>();
    if keywords.is_empty() {
        return Err(ParseError::InvalidFormat {
            usage: FindCommand::MESSAGE_USAGE,
        });
    }
    Ok(FindCommand::new(keywords))
}
