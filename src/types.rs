//! Core types for rdp-scancodes.
//!
//! These types flow from the line filter into the decoder: a `KeyEvent`
//! carries a raw `ScanCode`, and the table resolves it to a `KeyMeaning`.

use std::fmt;
use std::str::FromStr;

// =============================================================================
// Scan code
// =============================================================================

/// A hardware scan code as captured in the RDP keyboard PDU.
///
/// Displayed as two uppercase hex digits, the way it appears in the table
/// and in diagnostics (`1E`, `0B`, `FF`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScanCode(pub u8);

impl ScanCode {
    /// Raw byte value.
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl From<u8> for ScanCode {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl FromStr for ScanCode {
    type Err = std::num::ParseIntError;

    /// Parse a two-digit hex token, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        u8::from_str_radix(s, 16).map(Self)
    }
}

impl fmt::Display for ScanCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}", self.0)
    }
}

// =============================================================================
// Key meaning
// =============================================================================

/// Modifier keys the decoder recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierKey {
    CapsLock,
    ShiftLeft,
    ShiftRight,
    /// Recognized so it is not reported as unknown, but has no effect.
    Ctrl,
}

impl ModifierKey {
    pub fn is_shift(self) -> bool {
        matches!(self, Self::ShiftLeft | Self::ShiftRight)
    }
}

/// What a scan code means to the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMeaning {
    /// A key with a single representation (space, newline, backspace, ...).
    Glyph(char),
    /// A key whose character depends on effective shift.
    GlyphPair { unshifted: char, shifted: char },
    /// A key that only changes decoder state.
    Modifier(ModifierKey),
}

impl KeyMeaning {
    pub const fn pair(unshifted: char, shifted: char) -> Self {
        Self::GlyphPair { unshifted, shifted }
    }

    /// The glyph emitted on key-down for the given effective shift.
    /// `None` for modifiers.
    pub fn glyph(self, shifted: bool) -> Option<char> {
        match self {
            Self::Glyph(c) => Some(c),
            Self::GlyphPair { unshifted, shifted: s } => Some(if shifted { s } else { unshifted }),
            Self::Modifier(_) => None,
        }
    }
}

// =============================================================================
// Key event
// =============================================================================

/// Press/release state of a key event record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Down,
    Up,
}

impl KeyState {
    /// Map the event-type byte of the marker (`00` down, `01` up).
    pub fn from_flag(flag: u8) -> Option<Self> {
        match flag {
            0x00 => Some(Self::Down),
            0x01 => Some(Self::Up),
            _ => None,
        }
    }
}

/// One keyboard event record extracted from a hexdump line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub state: KeyState,
    pub code: ScanCode,
}

impl KeyEvent {
    pub fn down(code: u8) -> Self {
        Self { state: KeyState::Down, code: ScanCode(code) }
    }

    pub fn up(code: u8) -> Self {
        Self { state: KeyState::Up, code: ScanCode(code) }
    }

    pub fn is_key_up(&self) -> bool {
        self.state == KeyState::Up
    }
}
