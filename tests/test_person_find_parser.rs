//! Tests for parsing `person find` arguments.

use cca_manager::commands::person::PERSON_FIND_USAGE;
use cca_manager::commands::PersonFindCommand;
use cca_manager::error::ParseError;
use cca_manager::models::NameContainsKeywordsPredicate;
use cca_manager::parser::{CommandParser, PersonFindCommandParser};

fn assert_parse_success(parser: &PersonFindCommandParser, input: &str, expected: &PersonFindCommand) {
    assert_eq!(&parser.parse(input).unwrap(), expected);
}

fn assert_parse_failure(parser: &PersonFindCommandParser, input: &str, expected_message: &str) {
    assert_eq!(parser.parse(input).unwrap_err().to_string(), expected_message);
}

#[test]
fn test_parse_empty_arg_fails() {
    let parser = PersonFindCommandParser;
    assert_parse_failure(
        &parser,
        "     ",
        &format!("Invalid command format! \n{}", PERSON_FIND_USAGE),
    );
    assert_eq!(
        parser.parse("").unwrap_err(),
        ParseError::InvalidCommandFormat {
            usage: PERSON_FIND_USAGE
        }
    );
}

#[test]
fn test_parse_valid_args_returns_find_command() {
    let parser = PersonFindCommandParser;
    let expected = PersonFindCommand::new(NameContainsKeywordsPredicate::new(["Alice", "Bob"]));

    // no leading and trailing whitespaces
    assert_parse_success(&parser, "Alice Bob", &expected);

    // multiple whitespaces between keywords
    assert_parse_success(&parser, " \n Alice \n \t Bob  \t", &expected);
}
