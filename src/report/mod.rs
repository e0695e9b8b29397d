// SPDX-License-Identifier: Apache-2.0

//! Construction and rendering of the conversion report.

use crate::classify::Category;
use crate::input::InputLine;
use crate::parser::Encoder;
use crate::util::hexline::HexLine;

use serde::{Deserialize, Serialize};

use std::fmt::{self, Display, Formatter};
use std::io::Write;

/// One report row: a single byte and its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterLine {
    /// The input byte.
    pub byte: u8,

    /// The category assigned to the byte.
    pub category: Category,
}

impl CharacterLine {
    /// Build the row for one byte.
    pub fn new(byte: u8) -> Self {
        Self {
            byte,
            category: Category::of(byte),
        }
    }

    /// Two-digit uppercase zero-padded hex value of the byte.
    pub fn hex(&self) -> String {
        format!("{:02X}", self.byte)
    }
}

impl Display for CharacterLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // Best-effort literal character; control and high bytes render
        // however the surrounding output layer shows them.
        write!(
            f,
            "'{}' -> 0x{:02X} ({})",
            self.byte as char, self.byte, self.category
        )
    }
}

impl From<u8> for CharacterLine {
    fn from(byte: u8) -> Self {
        Self::new(byte)
    }
}

/// The full conversion report for one input line.
///
/// Rendering produces the per-character section followed by the hex summary
/// of the whole input, both in input byte order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    lines: Vec<CharacterLine>,
}

impl Report {
    /// Build the report for a byte sequence, in input order.
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            lines: bytes.iter().copied().map(CharacterLine::new).collect(),
        }
    }

    /// The per-byte rows, in input order.
    pub fn lines(&self) -> &[CharacterLine] {
        &self.lines
    }

    fn raw_bytes(&self) -> Vec<u8> {
        self.lines.iter().map(|line| line.byte).collect()
    }
}

impl From<&InputLine> for Report {
    fn from(line: &InputLine) -> Self {
        Self::new(line.bytes())
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n=== CONVERSÃO PARA HEXADECIMAL ===\n")?;
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        writeln!(f, "\n=== TEXTO COMPLETO EM HEXADECIMAL ===")?;
        writeln!(f, "{}", HexLine(&self.raw_bytes()))
    }
}

impl Encoder<()> for Report {
    fn encode(&self, writer: &mut impl Write, _params: ()) -> Result<(), std::io::Error> {
        write!(writer, "{self}")
    }
}
