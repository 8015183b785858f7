use std::io::{self, Write};

use anyhow::Result;
use log::info;

use crate::cmd::{print_persons, Run, Sort};
use crate::error::SilentExit;
use crate::logic::commands::Command;
use crate::logic::parser::SortCommandParser;

impl Run for Sort {
    fn run(&mut self) -> Result<()> {
        let command = match SortCommandParser.parse(&self.arguments.join(" ")) {
            Ok(command) => command,
            Err(e) => {
                _ = writeln!(io::stderr(), "{}", e);
                return Err(SilentExit { code: 2 }.into());
            }
        };

        let mut model = self.session.open()?;
        info!("Sorting by {} {}", command.rule().field(), command.rule().direction());
        let result = command.execute(&mut model)?;

        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", result.feedback)?;
        print_persons(&model, &mut stdout)?;
        Ok(())
    }
}
