use std::io::{self, BufRead, Write};

use anyhow::Result;
use log::{debug, warn};

use crate::cmd::{print_persons, Run, Shell};
use crate::logic::parser::BookParser;
use crate::model::Model;

const MESSAGE_WELCOME: &str = "Welcome to TutorBook! Type 'help' to see what you can do.";

impl Run for Shell {
    fn run(&mut self) -> Result<()> {
        let mut model = self.session.open()?;
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        run_loop(&mut model, stdin.lock(), &mut stdout)
    }
}

/// Executes one command per input line until `exit` or end of input.
/// Bad input is reported and the loop carries on.
pub fn run_loop<R: BufRead, W: Write>(model: &mut dyn Model, mut input: R, out: &mut W) -> Result<()> {
    let parser = BookParser;
    writeln!(out, "{}", MESSAGE_WELCOME)?;
    prompt(out)?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        // undecodable bytes become U+FFFD and fail as an unknown command
        let line = String::from_utf8_lossy(&buf);
        if line.trim().is_empty() {
            prompt(out)?;
            continue;
        }

        match parser.parse_command(&line) {
            Ok(command) => {
                debug!("Executing {:?}", command);
                match command.execute(model) {
                    Ok(result) => {
                        writeln!(out, "{}", result.feedback)?;
                        if command.lists_students() {
                            print_persons(model, out)?;
                        }
                        if result.exit {
                            return Ok(());
                        }
                    }
                    Err(e) => {
                        warn!("Command {:?} failed: {:?}", command, e);
                        writeln!(out, "{}", e)?;
                    }
                }
            }
            Err(e) => writeln!(out, "{}", e)?,
        }
        prompt(out)?;
    }

    Ok(())
}

fn prompt<W: Write>(out: &mut W) -> Result<()> {
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}
