use anyhow::Result;

use crate::logic::commands::{Command, CommandResult};
use crate::model::Model;

pub const COMMAND_WORD: &str = "list";
pub const MESSAGE_SUCCESS: &str = "Listed all students";
pub const MESSAGE_USAGE: &str = "list: Lists all students in their current order.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCommand;

impl Command for ListCommand {
    fn execute(&self, _model: &mut dyn Model) -> Result<CommandResult> {
        Ok(CommandResult::new(MESSAGE_SUCCESS))
    }

    fn lists_students(&self) -> bool {
        true
    }
}
