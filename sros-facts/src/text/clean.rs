//! Transcript cleanup before parsing.
//!
//! Device shells decorate output with colour codes, cursor movement and
//! `\r\n` line endings. Offsets in fixed-width tables only line up once all
//! of that is gone, so every transcript goes through [`clean`] first.

use vte::{Parser, Perform};

/// Collects printable characters, keeping only the line structure.
struct Printable {
    out: String,
}

impl Perform for Printable {
    fn print(&mut self, c: char) {
        self.out.push(c);
    }

    fn execute(&mut self, byte: u8) {
        // C0 controls: only newline and tab carry layout.
        if matches!(byte, b'\n' | b'\t') {
            self.out.push(byte as char);
        }
    }
}

/// Strip ANSI escape sequences and carriage returns from a transcript.
pub fn clean(raw: &str) -> String {
    clean_bytes(raw.as_bytes())
}

/// Byte-oriented variant of [`clean`]; invalid UTF-8 is replaced.
pub fn clean_bytes(raw: &[u8]) -> String {
    let mut parser: Parser = Parser::new();
    let mut sink = Printable {
        out: String::with_capacity(raw.len()),
    };
    parser.advance(&mut sink, raw);
    sink.out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(clean("Peer AS : 200\n"), "Peer AS : 200\n");
    }

    #[test]
    fn test_ansi_stripping() {
        assert_eq!(clean("\x1b[32mGreen text\x1b[0m"), "Green text");
    }

    #[test]
    fn test_carriage_returns_dropped() {
        assert_eq!(clean("line one\r\nline two\r\n"), "line one\nline two\n");
    }

    #[test]
    fn test_tabs_and_unicode_kept() {
        assert_eq!(clean("a\tb —\n"), "a\tb —\n");
    }

    #[test]
    fn test_cursor_movement_removed() {
        assert_eq!(clean("\x1b[2K\x1b[1Gsystem"), "system");
    }
}
