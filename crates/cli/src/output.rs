//! Human-readable reports on stdout.

use adventure_core::{CompileError, ValidationFailure};
use console::style;
use datafile_runtime::{CheckSummary, RunSummary};

pub fn print_failure(failure: &ValidationFailure) {
    println!(
        "{} {}",
        style("✗").red().bold(),
        style(failure.to_string()).bold()
    );
    for err in &failure.errors {
        println!("  {} {err}", style(err.error_code()).dim());
    }
}

pub fn print_check(summary: &CheckSummary) {
    println!("{}", style("✓ All validation phases passed").green().bold());
    println!(
        "  {} locations, {} texts, {} characters, {} bitmaps",
        summary.locations, summary.texts, summary.characters, summary.bitmaps
    );
}

pub fn print_summary(summary: &RunSummary) {
    print_check(&summary.content);
    println!();
    println!(
        "{} {} ({})",
        style("Datafiles:").bold().cyan(),
        summary.destination,
        summary.target
    );
    for artifact in &summary.artifacts {
        println!(
            "  {:<14} {:>12} {:>5} records  {}",
            artifact.name,
            format_bytes(artifact.bytes),
            artifact.records,
            style(&artifact.sha256[..12]).dim()
        );
    }
    println!();
    println!(
        "{} {}",
        style("✓ Wrote").green().bold(),
        format_bytes(summary.total_bytes())
    );
}

fn format_bytes(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
