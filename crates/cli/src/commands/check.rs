//! Validate an adventure without writing anything.

use anyhow::{Result, bail};
use clap::Parser;
use datafile_runtime::{Compiler, CompilerConfig, RunError};

use super::{AdventureArgs, resolve_target};
use crate::output;

/// Validate only, writing nothing
#[derive(Parser, Debug)]
pub struct Check {
    #[command(flatten)]
    adventure: AdventureArgs,
}

impl Check {
    pub fn execute(self) -> Result<()> {
        let configured = self.adventure.target.or(CompilerConfig::from_env().target);
        let target = resolve_target(configured)?;
        let (factory, adventure) = self.adventure.open()?;
        let oracle = factory.bitmap_oracle(target);

        match Compiler::new(target).check(&adventure, &oracle) {
            Ok(summary) => {
                output::print_check(&summary);
                Ok(())
            }
            Err(RunError::Validation(failure)) => {
                output::print_failure(&failure);
                bail!("{failure}");
            }
            Err(err) => Err(err.into()),
        }
    }
}
