//! Line filter for Wireshark hexdump text.
//!
//! An RDP fast-path keyboard event serializes as `44 04 <flag> <code>` in
//! the decrypted stream, where `<flag>` is `00` for key-down and `01` for
//! key-up. The filter looks for the first such run of byte tokens in a
//! line and turns it into a [`KeyEvent`]. Every other line is noise.
//!
//! The filter is stateless: one line in, at most one event out.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{KeyEvent, KeyState, ScanCode};

/// `44 04 0[01] XX` as standalone byte tokens.
///
/// Tokens are separated by one space, or two at the 8-byte column gap. The
/// run must start and end on whitespace, so offsets ending in `44` and
/// ASCII columns that happen to start with hex digits never match.
static MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|\s)44 {1,2}04 {1,2}(0[01]) {1,2}([0-9A-Fa-f]{2})(?:\s|$)")
        .expect("marker pattern is valid")
});

/// Extract the keyboard event from a single line, if it carries one.
///
/// Only the first marker in the line is used.
pub fn parse_line(line: &str) -> Option<KeyEvent> {
    let caps = MARKER.captures(line)?;

    let state = KeyState::from_flag(u8::from_str_radix(&caps[1], 16).ok()?)?;
    let code: ScanCode = caps[2].parse().ok()?;

    Some(KeyEvent { state, code })
}

/// Lazily filter a sequence of lines into keyboard events, preserving order.
pub fn events<I, S>(lines: I) -> impl Iterator<Item = KeyEvent>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines.into_iter().filter_map(|line| parse_line(line.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_down() {
        assert_eq!(parse_line("44 04 00 1E"), Some(KeyEvent::down(0x1E)));
    }

    #[test]
    fn test_key_up() {
        assert_eq!(parse_line("44 04 01 2A"), Some(KeyEvent::up(0x2A)));
    }

    #[test]
    fn test_lowercase_code_is_normalized() {
        let ev = parse_line("44 04 00 1e").unwrap();
        assert_eq!(ev.code, ScanCode(0x1E));
        assert_eq!(ev.code.to_string(), "1E");
    }

    #[test]
    fn test_marker_inside_hexdump_line() {
        let line = "00000010  c4 00 44 04 00 23 00 00  00 00 00 00 00 00 00 00   ..D..#..........";
        assert_eq!(parse_line(line), Some(KeyEvent::down(0x23)));
    }

    #[test]
    fn test_wide_column_gap() {
        let line = "00000000  00 00 00 00 00 44 04 00  1F 00 00 00 00 00 00 00";
        assert_eq!(parse_line(line), Some(KeyEvent::down(0x1F)));
    }

    #[test]
    fn test_non_matching_lines() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("00000000  03 00 00 0b 06 e0 00 00"), None);
        // Event flag other than 00/01
        assert_eq!(parse_line("44 04 02 1E"), None);
        // Wrong second byte
        assert_eq!(parse_line("44 05 00 1E"), None);
        // Truncated record
        assert_eq!(parse_line("44 04 00"), None);
    }

    #[test]
    fn test_offset_is_not_a_byte_token() {
        // Follow-stream offsets are running byte counts and can end in 44
        assert_eq!(parse_line("00000044  04 00 1e 2e 2e"), None);
        assert_eq!(parse_line("00000144  04 01 2a 00 00"), None);
    }

    #[test]
    fn test_ascii_column_is_not_a_byte_token() {
        let line = "00000040  31 45 2e 2e 2e 2e 2e 2e  2e 2e 2e 2e 2e 44 04 00   1E...........D..";
        assert_eq!(parse_line(line), None);
    }

    #[test]
    fn test_partial_tokens_rejected() {
        assert_eq!(parse_line("144 04 00 1E"), None);
        assert_eq!(parse_line("44 04 00 1E5"), None);
        assert_eq!(parse_line("44 04 00   1E"), None);
    }

    #[test]
    fn test_trailing_newline() {
        assert_eq!(parse_line("44 04 00 1E\r\n"), Some(KeyEvent::down(0x1E)));
    }

    #[test]
    fn test_first_match_wins() {
        let line = "44 04 00 1E 44 04 01 30";
        assert_eq!(parse_line(line), Some(KeyEvent::down(0x1E)));
    }

    #[test]
    fn test_events_preserve_order() {
        let lines = [
            "noise",
            "44 04 00 2A",
            "more noise 01 02 03",
            "44 04 00 1E",
            "44 04 01 2A",
        ];
        let evs: Vec<_> = events(lines).collect();
        assert_eq!(evs, vec![KeyEvent::down(0x2A), KeyEvent::down(0x1E), KeyEvent::up(0x2A)]);
    }

    #[test]
    fn test_events_is_lazy() {
        let mut seen = 0;
        let mut iter = events(["44 04 00 1E", "44 04 00 30"].iter().inspect(|_| seen += 1));
        assert_eq!(iter.next(), Some(KeyEvent::down(0x1E)));
        drop(iter);
        assert_eq!(seen, 1);
    }
}
