//! Terminal output helpers shared by every command.
//!
//! # Conventions
//! - **Errors**: red `✕ Error:` prefix, framed by blank lines
//! - **Success**: green check mark
//! - **Lists**: 1-based indices in bright black, the same indices the commands accept

use colored::*;

/// Prints an error message
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Prints a success message
///
/// # Format
/// ```text
///
/// ✓ <message>
/// ```
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// Prints a section header followed by a blank line
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

/// Prints `lines` numbered from 1
pub fn print_numbered<I, S>(lines: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for (i, line) in lines.into_iter().enumerate() {
        println!(
            "  {} {}",
            format!("{:>2}", i + 1).bright_black(),
            line.as_ref().white()
        );
    }
    println!();
}
