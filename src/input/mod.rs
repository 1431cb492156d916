//! Input side: hexdump lines → keyboard events.
//!
//! ```text
//! capture file → reader → lines → filter → KeyEvent → decoder
//! ```

pub mod filter;
pub mod reader;

pub use filter::{events, parse_line};
pub use reader::{decode_file, decode_reader};
