use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ParseError;
use crate::logic::commands::{exit, help, list, sort};
use crate::logic::commands::{Command, ExitCommand, HelpCommand, ListCommand};

mod sort_parser;

pub use sort_parser::SortCommandParser;

static BASIC_COMMAND_FORMAT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?P<word>\S+)(?P<arguments>.*)$").unwrap());

/// Splits a line of input into command word and arguments, then hands the
/// arguments to the parser for that command.
#[derive(Debug, Default)]
pub struct BookParser;

impl BookParser {
    pub fn parse_command(&self, input: &str) -> Result<Box<dyn Command>, ParseError> {
        let Some(captures) = BASIC_COMMAND_FORMAT.captures(input.trim()) else {
            return Err(ParseError::InvalidCommandFormat(help::MESSAGE_USAGE));
        };
        let word = &captures["word"];
        let arguments = &captures["arguments"];
        debug!("Parsing command {:?} with arguments {:?}", word, arguments);

        match word {
            sort::COMMAND_WORD => Ok(Box::new(SortCommandParser.parse(arguments)?)),
            list::COMMAND_WORD => Ok(Box::new(ListCommand)),
            help::COMMAND_WORD => Ok(Box::new(HelpCommand)),
            exit::COMMAND_WORD => Ok(Box::new(ExitCommand)),
            _ => Err(ParseError::UnknownCommand),
        }
    }
}
