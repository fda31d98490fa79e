use colored::Colorize;

use crate::cli::context;

/// Print a success message.
pub fn success(msg: &str) {
    if !context::quiet() {
        println!("  {} {}", "✓".green(), msg);
    }
}

/// Print a warning message.
pub fn warning(msg: &str) {
    if !context::quiet() {
        println!("  {} {}", "⚠".yellow(), msg);
    }
}

/// Print an error message. Always shown, even in quiet mode.
pub fn error(msg: &str) {
    eprintln!("  {} {}", "✗".red(), msg);
}

/// Print a header line.
pub fn header(msg: &str) {
    if !context::quiet() {
        println!("\n{}", msg.bold());
    }
}

/// Print a plain line, indented to match the other helpers.
pub fn line(msg: &str) {
    if !context::quiet() {
        println!("  {msg}");
    }
}
