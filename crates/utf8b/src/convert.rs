//! Owned conversions built on the buffer-oriented core.

use alloc::{vec, vec::Vec};
use core::ops::Range;

use crate::{
    EncodeOptions, ScalarSource, Utf8bError,
    decoder::{decode_units, decoded_length},
    encoder::{encode_append, encoded_length},
};

/// Decodes `bytes` into a new vector, treating them as the whole input.
///
/// Never fails: every byte that is not part of well-formed UTF-8 becomes an
/// escape value.
#[must_use]
pub fn decode_to_vec(bytes: &[u8]) -> Vec<u32> {
    let mut out = Vec::new();
    decode_extend(bytes, true, &mut out);
    out
}

/// Decodes `bytes` onto the end of `out` and returns the number of bytes
/// consumed. Only a trailing incomplete sequence is left unconsumed, and only
/// when `end_of_input` is `false`.
pub(crate) fn decode_extend(bytes: &[u8], end_of_input: bool, out: &mut Vec<u32>) -> usize {
    if bytes.is_empty() {
        return 0;
    }
    let start = out.len();
    // Sizing as if at end of input overestimates by at most the incomplete
    // tail, which is trimmed below.
    let needed = decoded_length(bytes, 0..bytes.len()).unwrap_or(bytes.len());
    out.resize(start + needed, 0);
    let progress = decode_units(bytes, end_of_input, out, start..start + needed);
    out.truncate(start + progress.produced);
    progress.consumed
}

/// Encodes every scalar in `scalars` into a new byte vector.
///
/// # Errors
///
/// [`Utf8bError::InvalidScalar`] for the first unencodable scalar.
pub fn encode_to_vec<S>(scalars: &S) -> Result<Vec<u8>, Utf8bError>
where
    S: ScalarSource + ?Sized,
{
    encode_to_vec_with(scalars, 0..scalars.scalar_count(), &EncodeOptions::default())
}

/// Encodes the scalars in `range` into a new byte vector, followed by
/// `options.zero_pad` zero bytes.
///
/// # Errors
///
/// - [`Utf8bError::InvalidScalar`] for the first unencodable scalar.
/// - [`Utf8bError::InvalidArguments`] if `range` does not fit `scalars`.
pub fn encode_to_vec_with<S>(
    scalars: &S,
    range: Range<usize>,
    options: &EncodeOptions,
) -> Result<Vec<u8>, Utf8bError>
where
    S: ScalarSource + ?Sized,
{
    let len = encoded_length(scalars, range.clone())?;
    let mut out = vec![0u8; len + options.zero_pad];
    let end = encode_append(scalars, range, &mut out[..len], 0)?;
    debug_assert_eq!(end, len, "sizing pass disagrees with encoder");
    Ok(out)
}
