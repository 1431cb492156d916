//! Scan code decoder.
//!
//! Consumes keyboard events in order, tracks Shift and Caps Lock, and
//! appends the character for every key-down to the output.
//!
//! # Rules
//!
//! - Unknown code → reported, state and output untouched
//! - Caps Lock down → toggle caps; Caps Lock up → nothing
//! - Shift down → shift held; Shift up → shift released (either side)
//! - Ctrl → recognized, no effect
//! - Glyph down → emit it
//! - Glyph pair down → emit shifted form iff shift XOR caps
//! - Any other key-up → nothing
//!
//! # Example
//!
//! ```
//! use rdp_scancodes::{Decoder, KeyEvent};
//!
//! let mut decoder = Decoder::new();
//! decoder.feed(KeyEvent::down(0x2A)); // Shift
//! decoder.feed(KeyEvent::down(0x1E)); // a
//! decoder.feed(KeyEvent::up(0x2A));
//! assert_eq!(decoder.finish(), "A");
//! ```

use tracing::{debug, trace, warn};

use super::modifiers::DecoderState;
use crate::table::US;
use crate::types::{KeyEvent, KeyMeaning, KeyState, ModifierKey, ScanCode};

// =============================================================================
// TYPES
// =============================================================================

/// Called once for every occurrence of a code missing from the table.
pub type UnknownHandler = Box<dyn FnMut(ScanCode)>;

/// What a single event did to the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A character was appended to the output.
    Emitted(char),
    /// Shift or Caps Lock state changed.
    Modifier(ModifierKey),
    /// Recognized, but no state change and nothing emitted.
    Ignored,
    /// The code is not in the table.
    Unknown(ScanCode),
}

// =============================================================================
// DECODER
// =============================================================================

/// One decode run. Owns its modifier state and output; nothing is shared
/// between runs.
pub struct Decoder {
    state: DecoderState,
    output: String,
    unknown: usize,
    on_unknown: Option<UnknownHandler>,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    pub fn new() -> Self {
        Self {
            state: DecoderState::new(),
            output: String::new(),
            unknown: 0,
            on_unknown: None,
        }
    }

    /// Install a handler for unknown codes, in addition to the `warn!` log.
    pub fn on_unknown(mut self, handler: impl FnMut(ScanCode) + 'static) -> Self {
        self.on_unknown = Some(Box::new(handler));
        self
    }

    pub fn state(&self) -> DecoderState {
        self.state
    }

    /// Text decoded so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Number of unknown-code occurrences seen so far.
    pub fn unknown_count(&self) -> usize {
        self.unknown
    }

    /// Apply one event.
    pub fn feed(&mut self, event: KeyEvent) -> Step {
        let Some(meaning) = US.lookup(event.code) else {
            return self.report_unknown(event.code);
        };

        let step = match event.state {
            KeyState::Down => self.key_down(meaning),
            KeyState::Up => self.key_up(meaning),
        };
        trace!(code = %event.code, state = ?event.state, ?step, "event");
        step
    }

    /// Apply every event in order and return the finished text.
    pub fn decode<I>(mut self, events: I) -> String
    where
        I: IntoIterator<Item = KeyEvent>,
    {
        for event in events {
            self.feed(event);
        }
        self.finish()
    }

    /// End the run and take the output.
    pub fn finish(self) -> String {
        if self.unknown > 0 {
            debug!(unknown = self.unknown, "decode finished with unknown codes");
        }
        self.output
    }

    fn key_down(&mut self, meaning: KeyMeaning) -> Step {
        match meaning {
            KeyMeaning::Modifier(key @ ModifierKey::CapsLock) => {
                self.state.toggle_caps();
                debug!(caps = self.state.caps_active(), "caps lock");
                Step::Modifier(key)
            }
            KeyMeaning::Modifier(key) if key.is_shift() => {
                self.state.set_shift(true);
                Step::Modifier(key)
            }
            KeyMeaning::Modifier(_) => Step::Ignored,
            glyph => match glyph.glyph(self.state.effective_shift()) {
                Some(c) => {
                    self.output.push(c);
                    Step::Emitted(c)
                }
                None => Step::Ignored,
            },
        }
    }

    fn key_up(&mut self, meaning: KeyMeaning) -> Step {
        match meaning {
            KeyMeaning::Modifier(key) if key.is_shift() => {
                self.state.set_shift(false);
                Step::Modifier(key)
            }
            _ => Step::Ignored,
        }
    }

    fn report_unknown(&mut self, code: ScanCode) -> Step {
        self.unknown += 1;
        warn!(%code, "unknown character found");
        if let Some(handler) = self.on_unknown.as_mut() {
            handler(code);
        }
        Step::Unknown(code)
    }
}
