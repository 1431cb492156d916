//! Scan code table.
//!
//! A fixed, compiled-in mapping from scan code set 1 make codes to what the
//! key means on a US layout. Only the keys that show up in typed text are
//! present; everything else is reported as unknown by the decoder.

use crate::types::{KeyMeaning, ModifierKey, ScanCode};

use crate::types::KeyMeaning::{Glyph, Modifier};

const fn pair(unshifted: char, shifted: char) -> KeyMeaning {
    KeyMeaning::pair(unshifted, shifted)
}

const ENTRIES: &[(u8, KeyMeaning)] = &[
    // Letters
    (0x1E, pair('a', 'A')),
    (0x30, pair('b', 'B')),
    (0x2E, pair('c', 'C')),
    (0x20, pair('d', 'D')),
    (0x12, pair('e', 'E')),
    (0x21, pair('f', 'F')),
    (0x22, pair('g', 'G')),
    (0x23, pair('h', 'H')),
    (0x17, pair('i', 'I')),
    (0x24, pair('j', 'J')),
    (0x25, pair('k', 'K')),
    (0x26, pair('l', 'L')),
    (0x32, pair('m', 'M')),
    (0x31, pair('n', 'N')),
    (0x18, pair('o', 'O')),
    (0x19, pair('p', 'P')),
    (0x10, pair('q', 'Q')),
    (0x13, pair('r', 'R')),
    (0x1F, pair('s', 'S')),
    (0x14, pair('t', 'T')),
    (0x16, pair('u', 'U')),
    (0x2F, pair('v', 'V')),
    (0x11, pair('w', 'W')),
    (0x2D, pair('x', 'X')),
    (0x15, pair('y', 'Y')),
    (0x2C, pair('z', 'Z')),
    // Number row
    (0x0B, pair('0', ')')),
    (0x02, pair('1', '!')),
    (0x03, pair('2', '@')),
    (0x04, pair('3', '#')),
    (0x05, pair('4', '$')),
    (0x06, pair('5', '%')),
    (0x07, pair('6', '^')),
    (0x08, pair('7', '&')),
    (0x09, pair('8', '*')),
    (0x0A, pair('9', '(')),
    // Punctuation
    (0x29, pair('`', '~')),
    (0x0C, pair('-', '_')),
    (0x0D, pair('=', '+')),
    (0x2B, pair('\\', '|')),
    (0x1A, pair('[', '{')),
    (0x1B, pair(']', '}')),
    (0x27, pair(';', ':')),
    (0x28, pair('\'', '"')),
    (0x33, pair(',', '<')),
    (0x34, pair('.', '>')),
    (0x35, pair('/', '?')),
    // Single glyphs
    (0x39, Glyph(' ')),
    (0x1C, Glyph('\n')),
    (0x0E, Glyph('\u{8}')),
    (0x53, Glyph('\u{7f}')),
    (0x01, Glyph('\u{1b}')),
    // Modifiers
    (0x3A, Modifier(ModifierKey::CapsLock)),
    (0x2A, Modifier(ModifierKey::ShiftLeft)),
    (0x36, Modifier(ModifierKey::ShiftRight)),
    (0x1D, Modifier(ModifierKey::Ctrl)),
];

/// The built-in US table.
pub static US: ScanCodeTable = ScanCodeTable::build(ENTRIES);

/// Immutable scan code lookup, indexed directly by the code byte.
#[derive(Debug)]
pub struct ScanCodeTable {
    slots: [Option<KeyMeaning>; 256],
}

impl ScanCodeTable {
    const fn build(entries: &[(u8, KeyMeaning)]) -> Self {
        let mut slots = [None; 256];
        let mut i = 0;
        while i < entries.len() {
            let (code, meaning) = entries[i];
            slots[code as usize] = Some(meaning);
            i += 1;
        }
        Self { slots }
    }

    pub fn lookup(&self, code: ScanCode) -> Option<KeyMeaning> {
        self.slots[code.value() as usize]
    }
}
