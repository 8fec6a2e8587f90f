//! wordpack CLI: turn a plain-text word list into a loadable JavaScript data file.
//!
//! Run with no arguments to convert `IELTS 8000.txt` into `ielts-8000-data.js`
//! in the working directory. Settings come from built-in defaults, then
//! `wordpack.config.json` if present, then command-line flags.

mod commands;
mod output;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "wordpack",
    about = "Convert a plain-text word list into a JavaScript data file",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to wordpack.config.json (optional unless given explicitly)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert the word list (the default when no command is given)
    Convert(ConvertArgs),

    /// Write a wordpack.config.json holding the default settings
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Default)]
pub struct ConvertArgs {
    /// Word list to read (default: "IELTS 8000.txt")
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// JavaScript file to write (default: ielts-8000-data.js)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Name of the declared constant (default: IELTS_8000_DATA)
    #[arg(long)]
    name: Option<String>,

    /// Attach the constant to this global object (default: window)
    #[arg(long, conflicts_with = "module")]
    global: Option<String>,

    /// Emit an ES module with exports instead of a global assignment
    #[arg(long)]
    module: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        None => commands::convert::run(cli.config.as_deref(), ConvertArgs::default())?,
        Some(Commands::Convert(args)) => commands::convert::run(cli.config.as_deref(), args)?,
        Some(Commands::Init { force }) => commands::init::run(cli.config.as_deref(), force)?,
    }

    Ok(())
}
