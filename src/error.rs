use std::fmt::{self, Display, Formatter};

use crate::logic::commands::sort::{MESSAGE_UNKNOWN_ORDER_KEYWORD, MESSAGE_UNKNOWN_TYPE_KEYWORD};

/// Custom error type for early exit.
#[derive(Debug)]
pub struct SilentExit {
    pub code: u8,
}

impl Display for SilentExit {
    fn fmt(&self, _: &mut Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

impl std::error::Error for SilentExit {}

/// Errors raised while turning a line of user input into a command.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid command format! \n{0}")]
    InvalidCommandFormat(&'static str),

    #[error("Invalid command format! \n{}", MESSAGE_UNKNOWN_TYPE_KEYWORD)]
    UnknownType,

    #[error("Invalid command format! \n{}", MESSAGE_UNKNOWN_ORDER_KEYWORD)]
    UnknownOrder,

    #[error("Unknown command")]
    UnknownCommand,
}
