//! Command implementations.
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod build;
mod check;
mod targets;

pub use build::Build;
pub use check::Check;
pub use targets::Targets;

use std::{io, path::PathBuf};

use adventure_content::ContentFactory;
use adventure_core::{Adventure, Target};
use anyhow::{Context, Result, bail};
use clap::Args;
use console::style;

use crate::prompt;

/// Arguments shared by the commands that read an adventure.
#[derive(Args, Debug)]
pub struct AdventureArgs {
    /// Adventure directory
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Target suffix or name, e.g. `ql`; prompts when omitted
    #[arg(short, long, value_name = "TARGET", value_parser = parse_target)]
    pub target: Option<Target>,
}

fn parse_target(raw: &str) -> Result<Target, String> {
    raw.parse()
        .map_err(|_| format!("unknown target `{raw}`, see `datafiles targets`"))
}

impl AdventureArgs {
    pub fn open(&self) -> Result<(ContentFactory, Adventure)> {
        let factory = ContentFactory::open(&self.dir)
            .with_context(|| format!("Failed to open adventure: {}", self.dir.display()))?;
        let adventure = factory
            .load_adventure()
            .with_context(|| format!("Failed to load adventure: {}", self.dir.display()))?;

        println!(
            "{} {}",
            style("Adventure:").bold().cyan(),
            factory.title()
        );
        Ok((factory, adventure))
    }
}

/// Uses `configured` when set, otherwise asks on an attended terminal.
pub fn resolve_target(configured: Option<Target>) -> Result<Target> {
    if let Some(target) = configured {
        return Ok(target);
    }
    if !console::user_attended() {
        bail!("no target given; pass --target or set DATAFILES_TARGET");
    }
    let stdin = io::stdin();
    prompt::choose_target(&mut stdin.lock(), &mut io::stdout())
}
