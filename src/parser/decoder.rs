// SPDX-License-Identifier: Apache-2.0

use std::io::Read;

/// Trait used to express decoding relationships.
pub trait Decoder<T>: Sized {
    /// Decodes from the reader with the given parameters.
    fn decode(reader: &mut impl Read, params: T) -> Result<Self, std::io::Error>;
}
