//! Parsing of user input into commands.
//!
//! Input has the shape `<entity> <verb> <arguments>` (or a single word for
//! `clear`, `help` and `exit`). [`AddressBookParser`] picks the command
//! parser; command parsers tokenize the arguments and hand each field to
//! [`parser_util`].

pub mod cca;
pub mod parser_util;
pub mod person;
pub mod reminder;
pub mod tokenizer;

use crate::commands::Command;
use crate::error::{ParseError, ParseResult};
use tokenizer::{ArgumentMultimap, Prefix};
use tracing::debug;

pub use cca::{CcaAddCommandParser, CcaDeleteCommandParser, CcaEnrolCommandParser};
pub use person::{
    PersonAddCommandParser, PersonDeleteCommandParser, PersonEditCommandParser,
    PersonFindCommandParser,
};
pub use reminder::{ReminderAddCommandParser, ReminderDeleteCommandParser};

/// Parses the arguments of one command.
pub trait CommandParser {
    type Command;

    /// Parse `args` (everything after the command words).
    fn parse(&self, args: &str) -> ParseResult<Self::Command>;
}

/// Fetch the values of mandatory prefixes.
///
/// Fails with the command's usage if any prefix is absent or if text
/// appears before the first prefix.
pub(crate) fn require_prefixes<'a, const N: usize>(
    map: &'a ArgumentMultimap,
    prefixes: [Prefix; N],
    usage: &'static str,
) -> ParseResult<[&'a str; N]> {
    if !map.preamble().is_empty() {
        return Err(ParseError::InvalidCommandFormat { usage });
    }
    let mut values = [""; N];
    for (slot, prefix) in values.iter_mut().zip(prefixes) {
        *slot = map
            .value(prefix)
            .ok_or(ParseError::InvalidCommandFormat { usage })?;
    }
    Ok(values)
}

/// Usage shown when a command word is missing or incomplete.
pub const MESSAGE_USAGE: &str = "Type `help` to see all commands";

/// Top-level parser that dispatches on the command words.
#[derive(Debug, Default)]
pub struct AddressBookParser;

impl AddressBookParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse_command(&self, input: &str) -> ParseResult<Command> {
        let input = input.trim();
        let (word, rest) = split_word(input);
        if word.is_empty() {
            return Err(ParseError::InvalidCommandFormat {
                usage: MESSAGE_USAGE,
            });
        }
        debug!(command = word, "Parsing command");

        let command = match word {
            "clear" => Command::Clear,
            "help" => Command::Help,
            "exit" => Command::Exit,
            "person" | "cca" | "reminder" => self.parse_entity_command(word, rest)?,
            _ => return Err(ParseError::UnknownCommand),
        };
        Ok(command)
    }

    fn parse_entity_command(&self, entity: &str, input: &str) -> ParseResult<Command> {
        let (verb, args) = split_word(input);
        let command = match (entity, verb) {
            ("person", "add") => Command::PersonAdd(PersonAddCommandParser.parse(args)?),
            ("person", "edit") => Command::PersonEdit(PersonEditCommandParser.parse(args)?),
            ("person", "delete") => Command::PersonDelete(PersonDeleteCommandParser.parse(args)?),
            ("person", "find") => Command::PersonFind(PersonFindCommandParser.parse(args)?),
            ("person", "list") => Command::PersonList,
            ("cca", "add") => Command::CcaAdd(CcaAddCommandParser.parse(args)?),
            ("cca", "delete") => Command::CcaDelete(CcaDeleteCommandParser.parse(args)?),
            ("cca", "enrol") => Command::CcaEnrol(CcaEnrolCommandParser.parse(args)?),
            ("cca", "list") => Command::CcaList,
            ("reminder", "add") => Command::ReminderAdd(ReminderAddCommandParser.parse(args)?),
            ("reminder", "delete") => {
                Command::ReminderDelete(ReminderDeleteCommandParser.parse(args)?)
            }
            ("reminder", "list") => Command::ReminderList,
            (_, "") => {
                return Err(ParseError::InvalidCommandFormat {
                    usage: MESSAGE_USAGE,
                })
            }
            _ => return Err(ParseError::UnknownCommand),
        };
        Ok(command)
    }
}

/// Split off the first whitespace-delimited word. The remainder keeps its
/// leading whitespace so prefixes right after the word still tokenize.
fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(end) => (&input[..end], &input[end..]),
        None => (input, ""),
    }
}
