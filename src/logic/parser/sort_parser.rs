use crate::error::ParseError;
use crate::logic::commands::sort::MESSAGE_USAGE;
use crate::logic::commands::SortCommand;
use crate::order::{Direction, Field};

/// Reads `ARGUMENT [ORDER]` into a [`SortCommand`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SortCommandParser;

impl SortCommandParser {
    pub fn parse(&self, args: &str) -> Result<SortCommand, ParseError> {
        let tokens: Vec<&str> = args.split_whitespace().collect();
        let (field, direction) = match tokens.as_slice() {
            [field] => (*field, None),
            [field, direction] => (*field, Some(*direction)),
            _ => return Err(ParseError::InvalidCommandFormat(MESSAGE_USAGE)),
        };

        let field: Field = field.parse().map_err(|_| ParseError::UnknownType)?;
        let direction: Direction = match direction {
            Some(direction) => direction.parse().map_err(|_| ParseError::UnknownOrder)?,
            None => Direction::default(),
        };

        Ok(SortCommand::new(field, direction))
    }
}
