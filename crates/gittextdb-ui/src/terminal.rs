//! Terminal detection utilities.

use std::env;

/// Returns `true` if stdout is connected to a terminal (TTY).
pub fn is_tty() -> bool {
    crossterm::tty::IsTty::is_tty(&std::io::stdout())
}

/// Determines if ANSI color codes should be used.
///
/// Respects standard conventions:
/// - `NO_COLOR` (any value): disables color (<https://no-color.org/>)
/// - `CLICOLOR=0`: disables color
/// - `TERM=dumb`: disables color
/// - `CLICOLOR_FORCE` (any value): forces color even in non-TTY
/// - Falls back to TTY detection
pub fn supports_color() -> bool {
    color_from_env(|key| env::var(key).ok(), is_tty)
}

/// Color decision over an arbitrary variable lookup; `tty` is only
/// consulted when no variable settles the question.
fn color_from_env(lookup: impl Fn(&str) -> Option<String>, tty: impl FnOnce() -> bool) -> bool {
    // NO_COLOR standard -- any value disables color.
    if lookup("NO_COLOR").is_some() {
        return false;
    }

    // CLICOLOR=0 disables color.
    if lookup("CLICOLOR").as_deref() == Some("0") {
        return false;
    }

    // TERM=dumb disables color.
    if lookup("TERM").as_deref() == Some("dumb") {
        return false;
    }

    // CLICOLOR_FORCE forces color even in non-TTY.
    if lookup("CLICOLOR_FORCE").is_some() {
        return true;
    }

    // Default: use color only if stdout is a TTY.
    tty()
}
