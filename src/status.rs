//! User-facing status lines.
//!
//! These go to stdout regardless of the log level; diagnostics go through `log`.

use console::style;

pub fn success(message: &str) {
    println!("{} {message}", style("✓").green());
}

pub fn info(message: &str) {
    println!("{} {message}", style("ℹ").cyan());
}

pub fn warn(message: &str) {
    println!("{} {message}", style("⚠").yellow());
}

/// A section title followed by a dim rule.
pub fn heading(title: &str) {
    println!();
    println!("{}", style(title).cyan());
    println!("{}", style("─".repeat(33)).dim());
    println!();
}

pub fn blank() {
    println!();
}

/// Closing banner with the commands to run next.
pub fn finished(next_steps: &[&str]) {
    println!();
    println!("{}", style("✨ Setup complete!").green());
    println!();
    println!("Next steps:");
    for (i, step) in next_steps.iter().enumerate() {
        println!("  {} {step}", style(format!("{}.", i + 1)).dim());
    }
    println!();
}
