// Shared ANSI/VT100 control sequences used across the UI.

pub const ESC: char = '\x1B';

#[macro_export]
macro_rules! csi {
    ($suffix:literal) => {
        concat!("\x1B[", $suffix)
    };
}

#[macro_export]
macro_rules! csi2 {
    ($first:literal, $second:literal) => {
        concat!("\x1B[", $first, "\x1B[", $second)
    };
}

/// Clear the entire screen.
pub const CLEAR_SCREEN: &str = crate::csi!("2J");
/// Move the cursor to the top-left corner.
pub const CURSOR_HOME: &str = crate::csi!("H");
/// Clear from cursor to end of line.
pub const CLEAR_LINE_REST: &str = crate::csi!("0K");
/// Move the cursor up one line.
pub const CURSOR_UP_ONE: &str = crate::csi!("1A");

pub const HIDE_CURSOR: &str = crate::csi!("?25l");
pub const SHOW_CURSOR: &str = crate::csi!("?25h");
/// Request a blinking block cursor (if the terminal supports it).
pub const CURSOR_BLINKING_BLOCK: &str = crate::csi!("1 q");

pub const STYLE_RESET: &str = crate::csi!("0m");
pub const STYLE_BOLD: &str = crate::csi!("1m");
pub const STYLE_ITALIC: &str = crate::csi!("3m");
pub const FG_LIGHT_GRAY: &str = crate::csi!("37m");
pub const FG_GREEN: &str = crate::csi!("32m");
pub const FG_YELLOW: &str = crate::csi!("33m");
pub const FG_RED: &str = crate::csi!("31m");
/// Dark gray background with white text for input prompts.
pub const PROMPT_STYLE: &str = crate::csi2!("38;5;15m", "48;5;236m");

/// Wraps `s` in a foreground color and a reset.
pub fn paint<S: AsRef<str>>(color: &str, s: S) -> String {
    format!("{color}{}{STYLE_RESET}", s.as_ref())
}
