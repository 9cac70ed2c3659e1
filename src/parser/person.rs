//! Parsers for `person` commands.

use super::parser_util::{
    parse_address, parse_email, parse_index, parse_name, parse_phone, parse_tags,
};
use super::tokenizer::{
    tokenize, Prefix, PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_NAME, PREFIX_PHONE, PREFIX_TAG,
};
use super::{require_prefixes, CommandParser};
use crate::commands::person::{
    MESSAGE_NOT_EDITED, PERSON_ADD_USAGE, PERSON_DELETE_USAGE, PERSON_EDIT_USAGE,
    PERSON_FIND_USAGE,
};
use crate::commands::{
    EditPersonDescriptor, PersonAddCommand, PersonDeleteCommand, PersonEditCommand,
    PersonFindCommand,
};
use crate::error::{ParseError, ParseResult};
use crate::models::{NameContainsKeywordsPredicate, Person};

const PERSON_PREFIXES: [Prefix; 5] = [
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_TAG,
];

#[derive(Debug, Default)]
pub struct PersonAddCommandParser;

impl CommandParser for PersonAddCommandParser {
    type Command = PersonAddCommand;

    fn parse(&self, args: &str) -> ParseResult<PersonAddCommand> {
        let map = tokenize(args, &PERSON_PREFIXES);
        let [name, phone, email, address] = require_prefixes(
            &map,
            [PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS],
            PERSON_ADD_USAGE,
        )?;

        let person = Person::new(
            parse_name(name)?,
            parse_phone(phone)?,
            parse_email(email)?,
            parse_address(address)?,
            parse_tags(map.all_values(PREFIX_TAG))?,
        );
        Ok(PersonAddCommand { person })
    }
}

/// Parses `INDEX [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [t/TAG]...`.
///
/// A single empty `t/` clears every tag.
#[derive(Debug, Default)]
pub struct PersonEditCommandParser;

impl CommandParser for PersonEditCommandParser {
    type Command = PersonEditCommand;

    fn parse(&self, args: &str) -> ParseResult<PersonEditCommand> {
        let map = tokenize(args, &PERSON_PREFIXES);
        let index = parse_index(map.preamble()).map_err(|_| ParseError::InvalidCommandFormat {
            usage: PERSON_EDIT_USAGE,
        })?;

        let descriptor = EditPersonDescriptor {
            name: map.value(PREFIX_NAME).map(parse_name).transpose()?,
            phone: map.value(PREFIX_PHONE).map(parse_phone).transpose()?,
            email: map.value(PREFIX_EMAIL).map(parse_email).transpose()?,
            address: map.value(PREFIX_ADDRESS).map(parse_address).transpose()?,
            tags: match map.all_values(PREFIX_TAG) {
                [] => None,
                [only] if only.is_empty() => Some(Default::default()),
                tags => Some(parse_tags(tags)?),
            },
        };

        if !descriptor.is_any_field_edited() {
            return Err(ParseError::InvalidFormat(MESSAGE_NOT_EDITED));
        }
        Ok(PersonEditCommand { index, descriptor })
    }
}

#[derive(Debug, Default)]
pub struct PersonDeleteCommandParser;

impl CommandParser for PersonDeleteCommandParser {
    type Command = PersonDeleteCommand;

    fn parse(&self, args: &str) -> ParseResult<PersonDeleteCommand> {
        let index = parse_index(args).map_err(|_| ParseError::InvalidCommandFormat {
            usage: PERSON_DELETE_USAGE,
        })?;
        Ok(PersonDeleteCommand { index })
    }
}

/// Parses whitespace-separated name keywords.
#[derive(Debug, Default)]
pub struct PersonFindCommandParser;

impl CommandParser for PersonFindCommandParser {
    type Command = PersonFindCommand;

    fn parse(&self, args: &str) -> ParseResult<PersonFindCommand> {
        let keywords: Vec<&str> = args.split_whitespace().collect();
        if keywords.is_empty() {
            return Err(ParseError::InvalidCommandFormat {
                usage: PERSON_FIND_USAGE,
            });
        }
        Ok(PersonFindCommand::new(NameContainsKeywordsPredicate::new(
            keywords,
        )))
    }
}
