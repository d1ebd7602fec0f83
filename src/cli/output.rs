//! Output formatting utilities for CLI commands

use std::io;

use is_terminal::IsTerminal;

use crate::Error;

/// Colorize text with ANSI escape codes (only if stderr is a terminal)
pub fn color(code: &str, text: &str) -> String {
    paint(io::stderr().is_terminal(), code, text)
}

fn paint(enabled: bool, code: &str, text: &str) -> String {
    if enabled {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}

/// Print an error the way every dialeval binary does
pub fn report_error(err: &Error) {
    eprintln!("{} {}", color("31", "error:"), err);
}

/// Format metric value with color based on threshold
pub fn metric_colored(value: f64) -> String {
    let code = if value >= 0.9 {
        "1;32"
    } else if value >= 0.7 {
        "1;33"
    } else if value >= 0.5 {
        "33"
    } else {
        "1;31"
    };
    color(code, &format!("{:.4}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_wraps_only_when_enabled() {
        assert_eq!(paint(false, "31", "x"), "x");
        assert_eq!(paint(true, "31", "x"), "\x1b[31mx\x1b[0m");
    }

    #[test]
    fn metric_keeps_four_decimals() {
        assert!(metric_colored(0.5).contains("0.5000"));
    }
}
