use clap::Parser;

mod commands;

use commands::Command;

/// Directory in which the results of experiments are saved.
pub const RESULTS_DIR: &str = "results";

/// Print the given error message and exit with the given error code.
macro_rules! fatal_error {
    ($code:expr, $($arg:tt)*) => {{
        use colored::Colorize;
        eprintln!("{} {}", "FATAL ERROR:".red().bold(), format!($($arg)*));
        std::process::exit($code);
    }};
}
pub(crate) use fatal_error;

#[derive(Parser, Debug)]
#[command(version, about = "Tower of Hanoi shortest-path solver")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    Args::parse().command.run();
}
