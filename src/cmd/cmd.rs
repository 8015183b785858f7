use std::path::PathBuf;

use clap::{Args, Parser, ValueHint};

#[derive(Parser, Debug)]
#[clap(about, author, version)]
pub enum Cmd {
    Shell(Shell),
    Sort(Sort),
}

/// Where the students come from and how chatty the logs are.
#[derive(Args, Debug, Clone, Default)]
pub struct Session {
    /// Roster of students (JSON). Sample students are used when absent.
    #[clap(short, long, value_hint = ValueHint::FilePath)]
    pub roster: Option<PathBuf>,
    /// Settings file, instead of the one in the user config directory.
    #[clap(long, value_hint = ValueHint::FilePath)]
    pub settings: Option<PathBuf>,
    /// Log what is going on to stderr.
    #[clap(short, long)]
    pub verbose: bool,
}

/// Read commands from stdin until `exit`.
#[derive(Parser, Debug)]
#[clap(author)]
pub struct Shell {
    #[clap(flatten)]
    pub session: Session,
}

/// Sort the students once and print them.
#[derive(Parser, Debug)]
#[clap(author)]
pub struct Sort {
    #[clap(flatten)]
    pub session: Session,
    /// ARGUMENT [ORDER], e.g. `owed desc`.
    #[clap(required = true, num_args = 1..)]
    pub arguments: Vec<String>,
}
