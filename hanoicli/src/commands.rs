use super::*;

use colored::Colorize;
use hanoilib::io::*;
use hanoilib::SolveFailure;

use std::path::{Path, PathBuf};

mod run;
pub use run::*;

mod list;
pub use list::*;

/// All CLI commands available in this binary.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Solve a problem and print the moves.
    #[command(alias = "s")]
    Solve(Solve),

    /// Run an experiment: solve a batch of problems and save the results.
    #[command(alias = "r")]
    Run(Run),

    /// Print the start state of a problem and its legal first moves.
    #[command(alias = "a")]
    Actions(Actions),
}

#[derive(clap::Args, Debug)]
pub struct Solve {
    /// Path to the JSON file containing the problem.
    path: PathBuf,
    /// Memory limit of the search in bytes, overriding the problem file.
    #[arg(short, long)]
    memory_limit: Option<usize>,
    /// Print the solution as JSON (Hint: redirect stdout)
    #[arg(short, long, default_value_t = false)]
    json: bool,
}

#[derive(clap::Args, Debug)]
pub struct Run {
    /// Path to the experiment JSON file.
    path: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct Actions {
    /// Path to the JSON file containing the problem.
    path: PathBuf,
}

impl Command {
    pub fn run(self) {
        match self {
            Command::Solve(args) => args.run(),
            Command::Run(args) => args.run(),
            Command::Actions(args) => args.run(),
        }
    }
}
