use anyhow::Result;

use crate::logic::commands::{Command, CommandResult};
use crate::model::Model;

pub const COMMAND_WORD: &str = "exit";
pub const MESSAGE_EXIT_ACKNOWLEDGEMENT: &str = "Exiting TutorBook as requested ...";
pub const MESSAGE_USAGE: &str = "exit: Exits the program.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCommand;

impl Command for ExitCommand {
    fn execute(&self, _model: &mut dyn Model) -> Result<CommandResult> {
        Ok(CommandResult {
            exit: true,
            ..CommandResult::new(MESSAGE_EXIT_ACKNOWLEDGEMENT)
        })
    }
}
