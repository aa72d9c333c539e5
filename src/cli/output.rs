//! Shared CLI output helpers.
//!
//! Color scheme (respects NO_COLOR):
//! - Red: errors
//! - Cyan: hints
//! - Bold: headers, important values
//! - Dimmed: labels
//!
//! Machine-readable results (tokens, plaintext) go to stdout unstyled.
//! Errors and hints go to stderr.

use console::style;
use std::fmt::Display;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Print a result line to stdout, unstyled.
pub fn value(v: impl Display) {
    println!("{}", v);
}

/// Print an error message to stderr (red).
///
/// Example: `✗ tag mismatch`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ set NEXT_URL_TOKEN_SECRET`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a bold section header.
pub fn header(title: &str) {
    if colors_enabled() {
        println!("{}", style(title).bold());
    } else {
        println!("{}", title);
    }
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  nonce       12 bytes`
pub fn kv(label: &str, value: impl Display) {
    if colors_enabled() {
        println!(
            "  {}  {}",
            style(format!("{:<10}", label)).dim(),
            style(value).bold()
        );
    } else {
        println!("  {:<10}  {}", label, value);
    }
}
