//! Parsers for `reminder` commands.

use super::parser_util::{parse_index, parse_reminder_name, parse_reminder_start_date};
use super::tokenizer::{tokenize, PREFIX_DATE, PREFIX_NAME};
use super::{require_prefixes, CommandParser};
use crate::commands::reminder::{REMINDER_ADD_USAGE, REMINDER_DELETE_USAGE};
use crate::commands::{ReminderAddCommand, ReminderDeleteCommand};
use crate::error::{ParseError, ParseResult};
use crate::models::Reminder;

#[derive(Debug, Default)]
pub struct ReminderAddCommandParser;

impl CommandParser for ReminderAddCommandParser {
    type Command = ReminderAddCommand;

    fn parse(&self, args: &str) -> ParseResult<ReminderAddCommand> {
        let map = tokenize(args, &[PREFIX_NAME, PREFIX_DATE]);
        let [name, date] =
            require_prefixes(&map, [PREFIX_NAME, PREFIX_DATE], REMINDER_ADD_USAGE)?;
        Ok(ReminderAddCommand {
            reminder: Reminder::new(parse_reminder_name(name)?, parse_reminder_start_date(date)?),
        })
    }
}

#[derive(Debug, Default)]
pub struct ReminderDeleteCommandParser;

impl CommandParser for ReminderDeleteCommandParser {
    type Command = ReminderDeleteCommand;

    fn parse(&self, args: &str) -> ParseResult<ReminderDeleteCommand> {
        let index = parse_index(args).map_err(|_| ParseError::InvalidCommandFormat {
            usage: REMINDER_DELETE_USAGE,
        })?;
        Ok(ReminderDeleteCommand { index })
    }
}
