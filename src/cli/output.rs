//! Shared CLI output helpers.
//!
//! Color scheme (respects NO_COLOR):
//! - Red: errors
//! - Green: generated files
//! - Cyan: paths, secret names
//! - Magenta: quotes
//! - Dimmed: secondary info

use console::style;
use std::fmt::Display;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print a fatal error to stderr.
///
/// Example: `ERROR: secret password has invalid type`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!(
            "{} {}",
            style("ERROR:").red().bold().for_stderr(),
            style(msg).red().for_stderr()
        );
    } else {
        eprintln!("ERROR: {}", msg);
    }
}

/// Print a plain progress line.
pub fn info(msg: impl Display) {
    println!("{}", msg);
}

/// Print a dimmed/secondary message.
pub fn dimmed(msg: &str) {
    if colors_enabled() {
        println!("{}", style(msg).dim());
    } else {
        println!("{}", msg);
    }
}

/// Format a generated file path in green.
pub fn generated(p: &str) -> String {
    if colors_enabled() {
        style(p).green().to_string()
    } else {
        p.to_string()
    }
}

/// Format a path or secret name in cyan.
pub fn path(p: &str) -> String {
    if colors_enabled() {
        style(p).cyan().to_string()
    } else {
        p.to_string()
    }
}

/// Format a value in bold.
pub fn bold(s: &str) -> String {
    if colors_enabled() {
        style(s).bold().to_string()
    } else {
        s.to_string()
    }
}

/// Format a quote in magenta.
pub fn quote(q: &str) -> String {
    if colors_enabled() {
        style(q).magenta().to_string()
    } else {
        q.to_string()
    }
}
