//! Interactive target selection.

use std::io::{BufRead, Write};

use adventure_core::Target;
use anyhow::{Result, bail};
use console::style;
use strum::IntoEnumIterator;

/// Shows the target menu and reads choices until one is valid.
pub fn choose_target(input: &mut impl BufRead, output: &mut impl Write) -> Result<Target> {
    writeln!(output, "{}", style("Select a target:").bold())?;
    for target in Target::iter() {
        writeln!(
            output,
            "  {} {} ({}, {})",
            style(format!("[{}]", target.menu_key())).cyan(),
            target.name(),
            target.resolution(),
            style(target.suffix()).dim()
        )?;
    }

    loop {
        write!(output, "{} ", style(">").yellow().bold())?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("no target selected");
        }
        match Target::from_menu_key(&line) {
            Some(target) => return Ok(target),
            None => writeln!(output, "{} {}", style("unknown choice").red(), line.trim())?,
        }
    }
}
