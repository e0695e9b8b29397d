// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Display, Formatter};

/// Space-separated uppercase hex rendering of a byte slice. Every value is
/// followed by one space, matching the summary line of the report.
pub(crate) struct HexLine<'a>(pub &'a [u8]);

impl Display for HexLine<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02X} ")?;
        }
        Ok(())
    }
}
