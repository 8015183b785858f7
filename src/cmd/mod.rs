mod cmd;
mod shell;
mod sort;

use std::io::Write;

use anyhow::Result;
use log::info;

pub use crate::cmd::cmd::*;
use crate::model::{Model, ModelManager};
use crate::settings::Settings;

pub trait Run {
    fn run(&mut self) -> Result<()>;
}

impl Run for Cmd {
    fn run(&mut self) -> Result<()> {
        match self {
            Cmd::Shell(cmd) => cmd.run(),
            Cmd::Sort(cmd) => cmd.run(),
        }
    }
}

impl Session {
    /// Loads settings and the roster, then applies the configured default
    /// ordering. CLI flags win over the settings file.
    fn open(&self) -> Result<ModelManager> {
        let settings = Settings::load(self.settings.as_deref())?;
        crate::init_logging(self.verbose || settings.verbose);

        let mut model = match self.roster.as_ref().or(settings.roster.as_ref()) {
            Some(roster) => ModelManager::from_roster_file(roster)?,
            None => ModelManager::with_sample_data()?,
        };
        if let Some(rule) = settings.default_ordering() {
            info!("Applying default ordering {} {}", rule.field(), rule.direction());
            model.sort_persons(&rule);
        }
        Ok(model)
    }
}

fn print_persons<W: Write>(model: &dyn Model, out: &mut W) -> Result<()> {
    if model.persons().is_empty() {
        writeln!(out, "No students found!")?;
    }
    for (i, person) in model.persons().iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, person)?;
    }
    Ok(())
}
