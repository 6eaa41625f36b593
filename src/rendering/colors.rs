//! ANSI color palette for text rendering
//!
//! Color is threaded as an explicit rendering option: callers pick
//! [`Colors::with_color`] or [`Colors::no_color`] and pass the palette down,
//! never ambient state.

use std::borrow::Cow;

/// The escape codes used by the text renderer. The no-color palette is all
/// empty strings, so rendering code writes fields unconditionally.
#[derive(Debug, Clone, Copy)]
pub struct Colors {
    pub red: &'static str,
    pub yellow: &'static str,
    pub cyan: &'static str,
    pub bold: &'static str,
    pub reset: &'static str,
}

impl Colors {
    pub fn with_color() -> Self {
        Self {
            red: "\u{1b}[31m",
            yellow: "\u{1b}[33m",
            cyan: "\u{1b}[36m",
            bold: "\u{1b}[1m",
            reset: "\u{1b}[0m",
        }
    }

    pub fn no_color() -> Self {
        Self {
            red: "",
            yellow: "",
            cyan: "",
            bold: "",
            reset: "",
        }
    }
}

/// Remove ANSI escape sequences from `text`.
///
/// Recorded message and description text is caller data and may itself
/// contain escape sequences; the text renderer neutralizes them so the only
/// color markers in its output are the ones the palette wrote. Borrows when
/// there is nothing to strip.
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    if !text.contains('\u{1b}') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '\u{1b}' {
            out.push(ch);
            continue;
        }
        // CSI sequence: ESC '[' parameters, terminated by a byte in @..~
        if chars.peek() == Some(&'[') {
            chars.next();
            for terminator in chars.by_ref() {
                if ('\u{40}'..='\u{7e}').contains(&terminator) {
                    break;
                }
            }
        }
        // A bare ESC (or one introducing a non-CSI sequence) is dropped.
    }
    Cow::Owned(out)
}
