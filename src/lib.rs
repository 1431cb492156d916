//! # rdp-scancodes
//!
//! Recover typed text from keyboard scan codes in decrypted RDP hexdumps.
//!
//! Feed it the lines of a Wireshark TCP-stream hexdump of a decrypted RDP
//! session; it picks out the fast-path keyboard event records, replays them
//! through a small Shift / Caps Lock state machine, and returns what was
//! typed.
//!
//! ## Architecture
//!
//! ```text
//! hexdump lines → input::filter → KeyEvent → state::Decoder → String → renderer
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Scan codes, key meanings, key events
//! - [`table`] - The compiled-in scan code table
//! - [`input`] - Line filter and capture reader
//! - [`state`] - Modifier state and the decoder
//! - [`renderer`] - Control-glyph presentation
//! - [`error`] - Resource access errors
//!
//! ## Example
//!
//! ```
//! let dump = ["44 04 00 23", "44 04 01 23", "44 04 00 17", "44 04 01 17"];
//! assert_eq!(rdp_scancodes::translate(dump), "hi");
//! ```

pub mod error;
pub mod input;
pub mod renderer;
pub mod state;
pub mod table;
pub mod types;

use std::path::Path;

// Re-export commonly used items
pub use error::{Error, Result};
pub use renderer::{render, ControlStyle};
pub use state::{Decoder, DecoderState, Modifiers, Step, UnknownHandler};
pub use table::ScanCodeTable;
pub use types::{KeyEvent, KeyMeaning, KeyState, ModifierKey, ScanCode};

/// Decode every keyboard event found in `lines` with a fresh decoder.
///
/// Unknown codes only reach the log.
pub fn translate<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Decoder::new().decode(input::events(lines))
}

/// Decode a capture file with a fresh decoder.
pub fn translate_file(path: impl AsRef<Path>) -> Result<String> {
    let mut decoder = Decoder::new();
    input::decode_file(path, &mut decoder)?;
    Ok(decoder.finish())
}
