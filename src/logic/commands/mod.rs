use std::fmt::Debug;

use anyhow::Result;

use crate::model::Model;

pub mod exit;
pub mod help;
pub mod list;
pub mod sort;

pub use exit::ExitCommand;
pub use help::HelpCommand;
pub use list::ListCommand;
pub use sort::SortCommand;

/// Something the user asked for, ready to run against the model.
pub trait Command: Debug {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult>;

    /// Whether the shell should print the student list afterwards.
    fn lists_students(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        CommandResult {
            feedback: feedback.into(),
            exit: false,
        }
    }
}
