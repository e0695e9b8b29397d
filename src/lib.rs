// SPDX-License-Identifier: Apache-2.0

//! The `texthex` crate converts a single line of text into a per-character
//! hexadecimal report.
//!
//! Every input byte is classified into one of five coarse categories
//! (uppercase letter, lowercase letter, digit, space, special) and rendered
//! alongside its two-digit uppercase hexadecimal value. A summary line with
//! the hex dump of the whole input closes the report.
//!
//! Classification is total over the full `0..=255` byte range and uses the
//! ASCII-range predicates only, so the result does not depend on host locale
//! settings.
//!
//! ## Example
//!
//! ```
//! use texthex::{Category, Report};
//!
//! let report = Report::new(b"Aa1 !");
//! let categories: Vec<Category> = report.lines().iter().map(|l| l.category).collect();
//! assert_eq!(
//!     categories,
//!     [
//!         Category::Uppercase,
//!         Category::Lowercase,
//!         Category::Digit,
//!         Category::Space,
//!         Category::Special,
//!     ]
//! );
//! ```
//!
//! Reading a line from a stream goes through the [Decoder](crate::parser::Decoder)
//! trait; the captured line is bounded at [MAX_LINE](crate::input::MAX_LINE)
//! bytes and carries an explicit truncation flag instead of losing data
//! silently:
//!
//! ```
//! use texthex::parser::Decoder;
//! use texthex::InputLine;
//!
//! let mut input: &[u8] = b"42\n";
//! let line = InputLine::decode(&mut input, ()).unwrap();
//! assert_eq!(line.bytes(), b"42");
//! assert!(!line.is_truncated());
//! ```

#![deny(clippy::all)]
#![deny(missing_docs)]

/// Byte categories and the classification routine.
pub mod classify;

/// Capped single-line input capture.
pub mod input;

/// Module for Encoding and Decoding types.
pub mod parser;

/// Report construction and rendering.
pub mod report;

mod util;

pub use classify::Category;
pub use input::{InputLine, MAX_LINE};
pub use report::{CharacterLine, Report};
