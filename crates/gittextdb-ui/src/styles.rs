//! Semantic color helpers for CLI output.
//!
//! Colors come from the Ayu Dark palette. Every helper degrades to plain
//! text when [`supports_color`] says no.

use owo_colors::OwoColorize;

use crate::terminal::supports_color;

const PASS: (u8, u8, u8) = (0xc2, 0xd9, 0x4c); // #c2d94c
const FAIL: (u8, u8, u8) = (0xf0, 0x71, 0x78); // #f07178
const MUTED: (u8, u8, u8) = (0x6c, 0x76, 0x80); // #6c7680

pub const ICON_PASS: &str = "\u{2713}";
pub const ICON_FAIL: &str = "\u{2716}";

fn color_str(s: &str, rgb: (u8, u8, u8)) -> String {
    if supports_color() {
        s.truecolor(rgb.0, rgb.1, rgb.2).to_string()
    } else {
        s.to_string()
    }
}

/// Renders text with pass (green) styling.
pub fn render_pass(s: &str) -> String {
    color_str(s, PASS)
}

/// Renders text with fail (red) styling.
pub fn render_fail(s: &str) -> String {
    color_str(s, FAIL)
}

/// Renders text with muted (gray) styling.
pub fn render_muted(s: &str) -> String {
    color_str(s, MUTED)
}

/// Renders text in bold.
pub fn render_bold(s: &str) -> String {
    if supports_color() {
        s.bold().to_string()
    } else {
        s.to_string()
    }
}

pub fn render_pass_icon() -> String {
    color_str(ICON_PASS, PASS)
}

pub fn render_fail_icon() -> String {
    color_str(ICON_FAIL, FAIL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderers_keep_text() {
        // Color may or may not be active; the text must survive either way.
        assert!(render_pass("present").contains("present"));
        assert!(render_fail("absent").contains("absent"));
        assert!(render_muted("config").contains("config"));
        assert!(render_bold("dir").contains("dir"));
    }

    #[test]
    fn icons_contain_glyphs() {
        assert!(render_pass_icon().contains(ICON_PASS));
        assert!(render_fail_icon().contains(ICON_FAIL));
    }
}
