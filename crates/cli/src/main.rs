//! Adventure datafile compiler.
//!
//! Reads an adventure directory, validates it and writes the binary
//! datafiles for one target.
//!
//! ```bash
//! datafiles build demos/leafy_glade --target ql
//! datafiles check demos/leafy_glade
//! datafiles targets
//! ```

mod commands;
mod logging;
mod output;
mod prompt;

use std::process::ExitCode;

use clap::Parser;
use commands::{Build, Check, Targets};
use console::style;

/// Adventure datafile compiler
#[derive(Parser)]
#[command(name = "datafiles")]
#[command(about = "Compile adventure content into engine datafiles", long_about = None)]
#[command(version)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Validate and write datafiles for a target
    Build(Build),

    /// Validate only, writing nothing
    Check(Check),

    /// List the supported targets
    Targets(Targets),
}

fn main() -> ExitCode {
    // Load .env file if it exists (for DATAFILES_TARGET and DATAFILES_OUT_DIR)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::setup_logging(cli.verbose);

    let outcome = match cli.command {
        Command::Build(cmd) => cmd.execute(),
        Command::Check(cmd) => cmd.execute(),
        Command::Targets(cmd) => cmd.execute(),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", style("error:").red().bold());
            ExitCode::FAILURE
        }
    }
}
