//! Push-style decoding over arbitrarily split input.
//!
//! [`Utf8bDecoder`] owns the unconsumed suffix between calls so callers can
//! hand it chunks as they arrive without tracking partial sequences
//! themselves. The result equals [`decode_to_vec`](crate::decode_to_vec) of
//! the concatenated chunks, however the input was split.

use alloc::vec::Vec;
use core::fmt;

use bstr::BStr;

use crate::{
    convert::decode_extend,
    decoder::{Unit, decode_scalar},
    scalar::MAX_SEQUENCE_LEN,
};

/// Incremental UTF-8b decoder.
///
/// ```rust
/// use utf8b::Utf8bDecoder;
///
/// let mut decoder = Utf8bDecoder::new();
/// let mut scalars = Vec::new();
/// decoder.feed(b"price: \xE2\x82", &mut scalars);
/// assert_eq!(decoder.pending(), b"\xE2\x82");
/// decoder.feed(b"\xAC", &mut scalars);
/// decoder.finish(&mut scalars);
/// assert_eq!(scalars.last(), Some(&0x20AC));
/// ```
#[derive(Clone, Default)]
pub struct Utf8bDecoder {
    /// Unconsumed tail of the input so far; never longer than a sequence
    /// minus one byte.
    pending: Vec<u8>,
}

impl fmt::Debug for Utf8bDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Utf8bDecoder")
            .field("pending", &BStr::new(&self.pending))
            .finish()
    }
}

impl Utf8bDecoder {
    /// Creates a decoder with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: Vec::with_capacity(MAX_SEQUENCE_LEN),
        }
    }

    /// Bytes held back because they may be the start of a sequence that the
    /// next chunk completes.
    #[must_use]
    pub fn pending(&self) -> &[u8] {
        &self.pending
    }

    /// Decodes `chunk`, appending scalars to `out`, and returns how many were
    /// appended.
    pub fn feed(&mut self, chunk: &[u8], out: &mut Vec<u32>) -> usize {
        let before = out.len();
        let offset = self.resolve_pending(chunk, out);
        self.decode_direct(&chunk[offset..], out);
        tracing::trace!(
            chunk = chunk.len(),
            produced = out.len() - before,
            pending = self.pending.len(),
            "fed chunk"
        );
        out.len() - before
    }

    /// Signals end of input. Any pending bytes are resolved, escaping what
    /// cannot be decoded. Returns how many scalars were appended to `out`.
    pub fn finish(self, out: &mut Vec<u32>) -> usize {
        let before = out.len();
        decode_extend(&self.pending, true, out);
        out.len() - before
    }

    /// Decodes the units that start inside the pending bytes, borrowing just
    /// enough of `chunk` to complete them. Returns the offset in `chunk` where
    /// direct decoding resumes.
    fn resolve_pending(&mut self, chunk: &[u8], out: &mut Vec<u32>) -> usize {
        if self.pending.is_empty() {
            return 0;
        }
        let carried = self.pending.len();
        // A unit starting in the pending bytes ends at most this far into the
        // chunk.
        let borrowed = chunk.len().min(MAX_SEQUENCE_LEN - 1);
        self.pending.extend_from_slice(&chunk[..borrowed]);

        let mut pos = 0;
        while pos < carried {
            match decode_scalar(&self.pending[pos..], false) {
                Unit::Scalar { value, len } => {
                    out.push(value);
                    pos += len;
                }
                Unit::Incomplete { .. } => {
                    // Only when the whole chunk was too short to finish the
                    // sequence; everything now lives in `pending`.
                    self.pending.drain(..pos);
                    return chunk.len();
                }
            }
        }
        self.pending.clear();
        pos - carried
    }

    fn decode_direct(&mut self, bytes: &[u8], out: &mut Vec<u32>) {
        let consumed = decode_extend(bytes, false, out);
        self.pending.extend_from_slice(&bytes[consumed..]);
        debug_assert!(self.pending.len() < MAX_SEQUENCE_LEN);
    }
}
