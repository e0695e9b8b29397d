// SPDX-License-Identifier: Apache-2.0

//! Single-line input capture with a fixed capacity.

use crate::parser::Decoder;

use std::io::{ErrorKind, Read};

/// Maximum number of usable bytes kept from one input line.
pub const MAX_LINE: usize = 255;

/// One line of input captured from a reader.
///
/// The captured bytes never include the line terminator. Bytes past the
/// capacity are consumed up to the terminator but not kept; the loss is
/// reported through [is_truncated](Self::is_truncated) rather than dropped
/// silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLine {
    bytes: Vec<u8>,
    truncated: bool,
}

impl InputLine {
    /// The captured bytes, in input order, without the line terminator.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of captured bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether no bytes were captured.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether input past the capacity was consumed and dropped.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

impl Decoder<usize> for InputLine {
    fn decode(reader: &mut impl Read, capacity: usize) -> Result<Self, std::io::Error> {
        let mut bytes = Vec::new();
        let mut truncated = false;
        let mut buf = [0u8; 1];

        loop {
            match reader.read(&mut buf) {
                // End of input terminates the line like a line feed does.
                Ok(0) => break,
                Ok(_) if buf[0] == b'\n' => break,
                Ok(_) => {
                    if bytes.len() < capacity {
                        bytes.push(buf[0]);
                    } else {
                        // Drain the rest of the line so nothing leaks into
                        // a later read.
                        truncated = true;
                    }
                }
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }

        if truncated {
            tracing::debug!(capacity, kept = bytes.len(), "input line exceeded capacity");
        }

        Ok(Self { bytes, truncated })
    }
}

impl Decoder<()> for InputLine {
    fn decode(reader: &mut impl Read, _params: ()) -> Result<Self, std::io::Error> {
        Self::decode(reader, MAX_LINE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn strips_line_feed() {
        let mut reader = Cursor::new(b"hello\n".to_vec());
        let line = InputLine::decode(&mut reader, ()).unwrap();
        assert_eq!(line.bytes(), b"hello");
        assert!(!line.is_truncated());
    }

    #[test]
    fn end_of_input_without_line_feed() {
        let mut reader = Cursor::new(b"hello".to_vec());
        let line = InputLine::decode(&mut reader, ()).unwrap();
        assert_eq!(line.bytes(), b"hello");
        assert!(!line.is_truncated());
    }

    #[test]
    fn empty_input() {
        let mut reader = Cursor::new(Vec::new());
        let line = InputLine::decode(&mut reader, ()).unwrap();
        assert!(line.is_empty());
        assert_eq!(line.len(), 0);
        assert!(!line.is_truncated());
    }

    #[test]
    fn blank_line() {
        let mut reader = Cursor::new(b"\n".to_vec());
        let line = InputLine::decode(&mut reader, ()).unwrap();
        assert!(line.is_empty());
        assert!(!line.is_truncated());
    }

    #[test]
    fn carriage_return_is_kept() {
        let mut reader = Cursor::new(b"ab\r\n".to_vec());
        let line = InputLine::decode(&mut reader, ()).unwrap();
        assert_eq!(line.bytes(), b"ab\r");
    }

    #[test]
    fn exactly_at_capacity_is_not_truncated() {
        let mut data = vec![b'x'; MAX_LINE];
        data.push(b'\n');
        let mut reader = Cursor::new(data);
        let line = InputLine::decode(&mut reader, ()).unwrap();
        assert_eq!(line.len(), MAX_LINE);
        assert!(!line.is_truncated());
    }

    #[test]
    fn over_capacity_truncates_and_flags() {
        let mut data = vec![b'x'; MAX_LINE + 45];
        data.push(b'\n');
        let mut reader = Cursor::new(data);
        let line = InputLine::decode(&mut reader, ()).unwrap();
        assert_eq!(line.len(), MAX_LINE);
        assert!(line.is_truncated());
    }

    #[test]
    fn truncation_drains_to_terminator() {
        let mut data = vec![b'x'; 10];
        data.push(b'\n');
        data.extend_from_slice(b"tail");
        let mut reader = Cursor::new(data);

        let line = InputLine::decode(&mut reader, 4).unwrap();
        assert_eq!(line.bytes(), b"xxxx");
        assert!(line.is_truncated());

        // The next read starts on the following line.
        let next = InputLine::decode(&mut reader, 4).unwrap();
        assert_eq!(next.bytes(), b"tail");
        assert!(!next.is_truncated());
    }

    #[test]
    fn explicit_capacity_zero_keeps_nothing() {
        let mut reader = Cursor::new(b"abc\n".to_vec());
        let line = InputLine::decode(&mut reader, 0).unwrap();
        assert!(line.is_empty());
        assert!(line.is_truncated());
    }

    #[test]
    fn consecutive_lines_decode_in_order() {
        let mut reader = Cursor::new(b"first\nsecond\n".to_vec());
        let first = InputLine::decode(&mut reader, ()).unwrap();
        let second = InputLine::decode(&mut reader, ()).unwrap();
        assert_eq!(first.bytes(), b"first");
        assert_eq!(second.bytes(), b"second");
    }
}
