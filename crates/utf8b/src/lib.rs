//! A lossless codec between raw bytes and Unicode scalar values using UTF-8b.
//!
//! Every byte sequence decodes to a sequence of `u32` values and re-encodes to
//! the exact original bytes. Bytes that are not part of well-formed UTF-8 are
//! mapped to *escape values* in `0xDC80..=0xDCFF`, a slice of the surrogate
//! range that real text can never contain.
//!
//! The core works on caller-owned buffers and never allocates:
//!
//! - [`encoded_length`] / [`encode_append`] convert scalars to bytes.
//! - [`decoded_length`] / [`decode_append`] convert bytes to scalars, with
//!   resumable, chunk-friendly semantics driven by [`DecodeRequest`].
//!
//! Owned conveniences ([`decode_to_vec`], [`encode_to_vec`]) and a push-style
//! [`Utf8bDecoder`] are layered on top.
//!
//! ```rust
//! let bytes = [0x41, 0xE2, 0x82, 0xAC, 0xFF];
//! let scalars = utf8b::decode_to_vec(&bytes);
//! assert_eq!(scalars, [0x41, 0x20AC, 0xDCFF]);
//! assert_eq!(utf8b::encode_to_vec(&scalars).unwrap(), bytes);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
mod convert;
mod decoder;
mod encoder;
mod error;
mod options;
pub mod scalar;
#[cfg(feature = "streaming")]
mod streaming;

#[cfg(test)]
mod tests;

pub use buffer::{ScalarSink, ScalarSource};
pub use convert::{decode_to_vec, encode_to_vec, encode_to_vec_with};
pub use decoder::{DecodeProgress, DecodeRequest, DecodeStop, decode_append, decoded_length};
pub use encoder::{encode_append, encoded_length};
pub use error::Utf8bError;
pub use options::EncodeOptions;
#[cfg(feature = "streaming")]
pub use streaming::Utf8bDecoder;
