//! Validate an adventure and write its datafiles.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use console::style;
use datafile_runtime::{Compiler, CompilerConfig, FileDatafileSink, RunError};

use super::{AdventureArgs, resolve_target};
use crate::output;

/// Validate and write datafiles for a target
#[derive(Parser, Debug)]
pub struct Build {
    #[command(flatten)]
    adventure: AdventureArgs,

    /// Output directory (defaults to `<DIR>/out/<suffix>`)
    #[arg(short, long, value_name = "DIR")]
    out: Option<PathBuf>,
}

impl Build {
    pub fn execute(self) -> Result<()> {
        let config = CompilerConfig::from_env().merge(CompilerConfig {
            target: self.adventure.target,
            out_dir: self.out.clone(),
        });
        let target = resolve_target(config.target)?;
        let (factory, adventure) = self.adventure.open()?;
        let oracle = factory.bitmap_oracle(target);

        let out_dir = config.out_dir_for(&factory, target);
        println!(
            "{} {} → {}",
            style("Target:").bold().cyan(),
            target.name(),
            style(out_dir.display()).dim()
        );

        let sink = FileDatafileSink::new(&out_dir)
            .with_context(|| format!("Failed to prepare output: {}", out_dir.display()))?;

        let mut compiler = Compiler::new(target);
        match compiler.run(&adventure, &oracle, &sink) {
            Ok(summary) => {
                output::print_summary(&summary);
                Ok(())
            }
            Err(RunError::Validation(failure)) => {
                output::print_failure(&failure);
                bail!("build aborted at {}, nothing written", failure.phase);
            }
            Err(err) => Err(err).context("build aborted"),
        }
    }
}
