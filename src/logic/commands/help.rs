use anyhow::Result;
use once_cell::sync::Lazy;

use crate::logic::commands::{exit, list, sort, Command, CommandResult};
use crate::model::Model;

pub const COMMAND_WORD: &str = "help";
pub const MESSAGE_USAGE: &str = "help: Shows program usage instructions.\nExample: help";

/// Usage of every command, one block per command.
pub static HELP_TEXT: Lazy<String> = Lazy::new(|| {
    [MESSAGE_USAGE, list::MESSAGE_USAGE, sort::MESSAGE_USAGE, exit::MESSAGE_USAGE].join("\n\n")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpCommand;

impl Command for HelpCommand {
    fn execute(&self, _model: &mut dyn Model) -> Result<CommandResult> {
        Ok(CommandResult::new(HELP_TEXT.as_str()))
    }
}
