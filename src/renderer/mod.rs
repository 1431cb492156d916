//! Transcript rendering.
//!
//! The decoder emits control characters for Backspace, Delete and Escape.
//! `ControlStyle::Names` swaps them for readable mnemonics so a transcript
//! printed to a terminal shows where they were pressed.

/// How control glyphs appear in the rendered transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlStyle {
    /// Decoded text as-is.
    #[default]
    Raw,
    /// `BKSP`, `DEL` and `ESC` in place of the control characters.
    Names,
}

/// Mnemonic for a control glyph, if it has one.
pub fn control_name(c: char) -> Option<&'static str> {
    match c {
        '\u{8}' => Some("BKSP"),
        '\u{7f}' => Some("DEL"),
        '\u{1b}' => Some("ESC"),
        _ => None,
    }
}

/// Render decoded text in the given style.
pub fn render(text: &str, style: ControlStyle) -> String {
    match style {
        ControlStyle::Raw => text.to_owned(),
        ControlStyle::Names => {
            let mut out = String::with_capacity(text.len());
            for c in text.chars() {
                match control_name(c) {
                    Some(name) => out.push_str(name),
                    None => out.push(c),
                }
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_is_identity() {
        let text = "ab\u{8}c\n";
        assert_eq!(render(text, ControlStyle::Raw), text);
    }

    #[test]
    fn test_names() {
        let text = "pw\u{8}d\u{7f}\u{1b} x\n";
        assert_eq!(render(text, ControlStyle::Names), "pwBKSPdDELESC x\n");
    }

    #[test]
    fn test_default_style() {
        assert_eq!(ControlStyle::default(), ControlStyle::Raw);
    }
}
