// SPDX-License-Identifier: Apache-2.0

use std::io::Write;

/// Trait used to express encoding relationships.
pub trait Encoder<T> {
    /// Encodes the object to the writer.
    fn encode(&self, writer: &mut impl Write, params: T) -> Result<(), std::io::Error>;
}
