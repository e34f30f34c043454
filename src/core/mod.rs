//! Decoding core: error type, flexible scalars, error normalizer and response decoder.

pub mod decode;
pub mod error;
pub mod flex;
pub mod normalize;
