//! Parsers for `cca` commands.

use super::parser_util::{parse_cca_name, parse_cid, parse_index, parse_pid};
use super::tokenizer::{tokenize, PREFIX_CID, PREFIX_NAME, PREFIX_PID};
use super::{require_prefixes, CommandParser};
use crate::commands::cca::{CCA_ADD_USAGE, CCA_DELETE_USAGE, CCA_ENROL_USAGE};
use crate::commands::{CcaAddCommand, CcaDeleteCommand, CcaEnrolCommand};
use crate::error::{ParseError, ParseResult};
use crate::models::Cca;

#[derive(Debug, Default)]
pub struct CcaAddCommandParser;

impl CommandParser for CcaAddCommandParser {
    type Command = CcaAddCommand;

    fn parse(&self, args: &str) -> ParseResult<CcaAddCommand> {
        let map = tokenize(args, &[PREFIX_NAME]);
        let [name] = require_prefixes(&map, [PREFIX_NAME], CCA_ADD_USAGE)?;
        Ok(CcaAddCommand {
            cca: Cca::new(parse_cca_name(name)?),
        })
    }
}

#[derive(Debug, Default)]
pub struct CcaDeleteCommandParser;

impl CommandParser for CcaDeleteCommandParser {
    type Command = CcaDeleteCommand;

    fn parse(&self, args: &str) -> ParseResult<CcaDeleteCommand> {
        let index = parse_index(args).map_err(|_| ParseError::InvalidCommandFormat {
            usage: CCA_DELETE_USAGE,
        })?;
        Ok(CcaDeleteCommand { index })
    }
}

#[derive(Debug, Default)]
pub struct CcaEnrolCommandParser;

impl CommandParser for CcaEnrolCommandParser {
    type Command = CcaEnrolCommand;

    fn parse(&self, args: &str) -> ParseResult<CcaEnrolCommand> {
        let map = tokenize(args, &[PREFIX_CID, PREFIX_PID]);
        let [cid, pid] = require_prefixes(&map, [PREFIX_CID, PREFIX_PID], CCA_ENROL_USAGE)?;
        Ok(CcaEnrolCommand {
            cid: parse_cid(cid)?,
            pid: parse_pid(pid)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        let cmd = CcaAddCommandParser.parse(" n/NUSSO ").unwrap();
        assert_eq!(cmd.cca.name().to_string(), "NUSSO");
    }

    #[test]
    fn test_add_invalid_name() {
        let err = CcaAddCommandParser.parse(" n/NUS*SO").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Names should only contain alphanumeric characters and spaces, and it should not be blank"
        );
    }

    #[test]
    fn test_enrol() {
        let cmd = CcaEnrolCommandParser.parse(" c/2 p/ 3 ").unwrap();
        assert_eq!(cmd.cid.value(), 2);
        assert_eq!(cmd.pid.value(), 3);
    }

    #[test]
    fn test_enrol_not_a_number() {
        assert_eq!(
            CcaEnrolCommandParser.parse(" c/x p/3").unwrap_err(),
            ParseError::NotANumber { field: "cid" }
        );
        assert_eq!(
            CcaEnrolCommandParser.parse(" c/1 p/three").unwrap_err(),
            ParseError::NotANumber { field: "pid" }
        );
    }

    #[test]
    fn test_enrol_missing_prefix() {
        assert_eq!(
            CcaEnrolCommandParser.parse(" c/1").unwrap_err(),
            ParseError::InvalidCommandFormat {
                usage: CCA_ENROL_USAGE
            }
        );
    }
}
