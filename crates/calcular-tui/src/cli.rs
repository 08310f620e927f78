//! CLI command definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Calculador: terminal four-function calculator
#[derive(Parser, Debug)]
#[command(name = "calculador")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Append structured logs to this file (no file, no logging)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run; without one the interactive keypad starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a key script without a terminal and print the final display
    ///
    /// The script alphabet matches the keyboard map: digits, `.`, the four
    /// operators `+ - * /`, `=` for equals, `%` for percent, `s` for sign
    /// toggle, `c` for clear and `<` for backspace. Whitespace is ignored;
    /// any other byte is rejected.
    Replay(ReplayArgs),
}

/// Arguments for the replay command
#[derive(Parser, Debug)]
pub struct ReplayArgs {
    /// Script file, or "-" to read from standard input
    pub script: PathBuf,

    /// Print the final display as JSON instead of plain text
    #[arg(long)]
    pub json: bool,

    /// Print the display after every key before the final line
    #[arg(long)]
    pub trace: bool,
}
