//! Capture reader.
//!
//! Opens the hexdump, streams its lines through the filter into a decoder,
//! and closes the file when the run ends, on success or error alike (the
//! handle is owned by this scope and dropped on return).

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use super::filter;
use crate::error::{Error, Result};
use crate::state::Decoder;

/// Feed every keyboard event found in `reader` to `decoder`.
///
/// Lines are split on `\n` and decoded lossily, so stray non-UTF-8 bytes in
/// the ASCII column of a dump do not abort the run.
pub fn decode_reader<R: BufRead>(mut reader: R, decoder: &mut Decoder) -> io::Result<usize> {
    let mut buf = Vec::with_capacity(128);
    let mut lines = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        lines += 1;

        let line = String::from_utf8_lossy(&buf);
        if let Some(event) = filter::parse_line(&line) {
            decoder.feed(event);
        }
    }

    Ok(lines)
}

/// Open `path` and feed its keyboard events to `decoder`.
pub fn decode_file(path: impl AsRef<Path>, decoder: &mut Decoder) -> Result<()> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "opened capture");

    let lines = decode_reader(BufReader::new(file), decoder).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), lines, "closed capture");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_decode_reader_counts_lines() {
        let dump = "noise\n44 04 00 23\n44 04 00 17\nnoise";
        let mut decoder = Decoder::new();
        let lines = decode_reader(Cursor::new(dump), &mut decoder).unwrap();
        assert_eq!(lines, 4);
        assert_eq!(decoder.finish(), "hi");
    }

    #[test]
    fn test_decode_reader_tolerates_invalid_utf8() {
        let mut dump = b"\xff\xfe 44 04 00 1E \x80\n".to_vec();
        dump.extend_from_slice(b"44 04 00 30\r\n");
        let mut decoder = Decoder::new();
        decode_reader(Cursor::new(dump), &mut decoder).unwrap();
        assert_eq!(decoder.finish(), "ab");
    }

    #[test]
    fn test_decode_file_missing() {
        let mut decoder = Decoder::new();
        let err = decode_file("/nonexistent/capture.txt", &mut decoder).unwrap_err();
        assert!(matches!(err, Error::Open { .. }));
        assert!(err.to_string().contains("/nonexistent/capture.txt"));
    }
}
