//! Highlight class -> terminal style mapping.
//!
//! Colours are the eight base ANSI foregrounds; `Normal` uses the terminal
//! default. Control bytes are shown with reverse video instead of a colour.

use core_syntax::Highlight;
use crossterm::style::Color;

/// Foreground colour for a class; `None` means the terminal default.
pub fn color_for(class: Highlight) -> Option<Color> {
    match class {
        Highlight::Normal => None,
        Highlight::Comment | Highlight::BlockComment => Some(Color::DarkCyan),
        Highlight::Keyword1 => Some(Color::DarkYellow),
        Highlight::Keyword2 => Some(Color::DarkGreen),
        Highlight::String => Some(Color::DarkMagenta),
        Highlight::Number => Some(Color::DarkRed),
        Highlight::Match => Some(Color::DarkBlue),
    }
}

/// Printable stand-in for a control byte (`@`+byte below 27, else `?`).
/// `None` for bytes that print as themselves.
pub fn control_symbol(byte: u8) -> Option<u8> {
    if !byte.is_ascii_control() {
        return None;
    }
    Some(if byte <= 26 { b'@' + byte } else { b'?' })
}
