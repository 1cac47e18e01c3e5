use adventure_core::Target;
use anyhow::Result;
use clap::Parser;
use console::style;
use strum::IntoEnumIterator;

/// List the supported targets
#[derive(Parser, Debug)]
pub struct Targets {}

impl Targets {
    pub fn execute(self) -> Result<()> {
        println!("{}", style("Targets:").bold().cyan());
        for target in Target::iter() {
            println!(
                "  {} {:<12} {:<18} bmp/{}/",
                style(target.menu_key()).cyan(),
                target.name(),
                target.resolution(),
                target.suffix()
            );
        }
        Ok(())
    }
}
