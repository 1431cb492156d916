//! State Module - Decoder state machine
//!
//! - **Modifiers** - Shift / Caps Lock flags for one run
//! - **Decoder** - Event dispatch, glyph selection, unknown-code reporting

mod decoder;
mod modifiers;

pub use decoder::*;
pub use modifiers::*;
