//! Terminal output formatting for the wordpack CLI.
//!
//! Uses the [`console`] crate, which drops styling when stdout is not a terminal.

use console::style;

/// Print a success message prefixed with a checkmark.
pub fn print_success(text: &str) {
    println!("{} {}", style("✅").green(), text);
}

/// Print the size report line for a written file.
pub fn print_size(size: usize) {
    println!("{} File size: {} bytes", style("📊").dim(), size);
}
