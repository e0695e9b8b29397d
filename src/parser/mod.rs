// SPDX-License-Identifier: Apache-2.0

mod decoder;

mod encoder;

pub use decoder::Decoder;

pub use encoder::Encoder;
