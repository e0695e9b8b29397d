// SPDX-License-Identifier: Apache-2.0

//! Coarse classification of single input bytes.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// The category assigned to a single input byte.
///
/// Every byte value maps to exactly one category. Only the ASCII-range
/// predicates are consulted, so byte values above 0x7F always land in
/// [Special](Self::Special) regardless of host locale settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// An uppercase ASCII letter (`A`..=`Z`).
    Uppercase,

    /// A lowercase ASCII letter (`a`..=`z`).
    Lowercase,

    /// An ASCII digit (`0`..=`9`).
    Digit,

    /// The space character (0x20).
    Space,

    /// Everything else: punctuation, control bytes, tab, and any byte
    /// value above 0x7F.
    Special,
}

impl Category {
    /// Classify one byte.
    ///
    /// Checks run in a fixed precedence order: alphabetic, then digit, then
    /// space, with everything else falling through to
    /// [Special](Self::Special).
    pub fn of(byte: u8) -> Self {
        if byte.is_ascii_alphabetic() {
            if byte.is_ascii_uppercase() {
                Self::Uppercase
            } else {
                Self::Lowercase
            }
        } else if byte.is_ascii_digit() {
            Self::Digit
        } else if byte == b' ' {
            Self::Space
        } else {
            Self::Special
        }
    }

    /// The human-readable label printed in the report.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Uppercase => "letra maiúscula",
            Self::Lowercase => "letra minúscula",
            Self::Digit => "número",
            Self::Space => "espaço",
            Self::Special => "caractere especial",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<u8> for Category {
    fn from(byte: u8) -> Self {
        Self::of(byte)
    }
}

impl TryFrom<String> for Category {
    type Error = ();

    fn try_from(val: String) -> Result<Self, Self::Error> {
        match &val.to_lowercase()[..] {
            "letra maiúscula" => Ok(Self::Uppercase),

            "letra minúscula" => Ok(Self::Lowercase),

            "número" => Ok(Self::Digit),

            "espaço" => Ok(Self::Space),

            "caractere especial" => Ok(Self::Special),

            _ => Err(()),
        }
    }
}
