//! Scalar → byte conversion.
//!
//! `encode_scalar` is the single-unit leaf; [`encode_append`] drives it over a
//! range of a [`ScalarSource`] into a caller-owned byte buffer.

use core::ops::Range;

use crate::{
    ScalarSource, Utf8bError,
    buffer::check_range,
    scalar::{is_encodable, is_escape},
};


/// Why a single scalar could not be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Fault {
    Invalid,
    NoRoom,
}

/// Number of bytes `scalar` encodes to.
///
/// Classification only: bare surrogates and values above `0x10FFFF` still
/// report 3 and 4 bytes even though [`encode_scalar`] rejects them.
#[inline]
pub(crate) const fn encoded_len(scalar: u32) -> usize {
    if scalar < 0x800 {
        if scalar < 0x80 { 1 } else { 2 }
    } else if is_escape(scalar) {
        1
    } else if scalar < 0x10000 {
        3
    } else {
        4
    }
}

/// Writes the encoding of `scalar` to the front of `out`.
///
/// Nothing is written on failure. An invalid scalar is reported as
/// [`Fault::Invalid`] even when `out` would also be too small.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn encode_scalar(scalar: u32, out: &mut [u8]) -> Result<usize, Fault> {
    if !is_encodable(scalar) {
        return Err(Fault::Invalid);
    }
    let len = encoded_len(scalar);
    let Some(dst) = out.get_mut(..len) else {
        return Err(Fault::NoRoom);
    };
    match dst {
        // ASCII, or an escape standing for the raw byte in its low 8 bits.
        [b0] => *b0 = (scalar & 0xFF) as u8,
        [b0, b1] => {
            *b0 = 0xC0 | ((scalar >> 6) & 0x1F) as u8;
            *b1 = 0x80 | (scalar & 0x3F) as u8;
        }
        [b0, b1, b2] => {
            *b0 = 0xE0 | ((scalar >> 12) & 0x0F) as u8;
            *b1 = 0x80 | ((scalar >> 6) & 0x3F) as u8;
            *b2 = 0x80 | (scalar & 0x3F) as u8;
        }
        [b0, b1, b2, b3] => {
            *b0 = 0xF0 | ((scalar >> 18) & 0x07) as u8;
            *b1 = 0x80 | ((scalar >> 12) & 0x3F) as u8;
            *b2 = 0x80 | ((scalar >> 6) & 0x3F) as u8;
            *b3 = 0x80 | (scalar & 0x3F) as u8;
        }
        _ => unreachable!("encoded_len is always 1..=4"),
    }
    Ok(len)
}

/// Returns the number of bytes the scalars in `range` encode to.
///
/// This is a sizing pass only. Scalars that [`encode_append`] would reject as
/// [`Utf8bError::InvalidScalar`] are still counted (bare surrogates as 3 bytes,
/// values above `0x10FFFF` as 4), so a length is not proof of encodability.
///
/// # Errors
///
/// [`Utf8bError::InvalidArguments`] if `range` does not fit `scalars`.
pub fn encoded_length<S>(scalars: &S, range: Range<usize>) -> Result<usize, Utf8bError>
where
    S: ScalarSource + ?Sized,
{
    check_range(&range, scalars.scalar_count())?;
    Ok(range.map(|i| encoded_len(scalars.scalar_at(i))).sum())
}

/// Encodes the scalars in `range` into `out`, starting at byte `out_start`.
///
/// On success returns the position just past the last byte written. On
/// failure every scalar before the reported index has been written, correctly
/// encoded, and nothing is rolled back.
///
/// # Errors
///
/// - [`Utf8bError::InvalidScalar`] when an unencodable scalar is reached.
/// - [`Utf8bError::InsufficientCapacity`] when the next unit does not fit in
///   the remainder of `out`.
/// - [`Utf8bError::InvalidArguments`] if `range` does not fit `scalars` or
///   `out_start` is past the end of `out`; nothing is written.
pub fn encode_append<S>(
    scalars: &S,
    range: Range<usize>,
    out: &mut [u8],
    out_start: usize,
) -> Result<usize, Utf8bError>
where
    S: ScalarSource + ?Sized,
{
    check_range(&range, scalars.scalar_count())?;
    check_range(&(out_start..out_start), out.len())?;

    let mut position = out_start;
    for index in range {
        let value = scalars.scalar_at(index);
        match encode_scalar(value, &mut out[position..]) {
            Ok(written) => position += written,
            Err(Fault::Invalid) => {
                tracing::debug!(value, index, position, "unencodable scalar");
                return Err(Utf8bError::InvalidScalar { value, index });
            }
            Err(Fault::NoRoom) => {
                tracing::debug!(value, index, position, "output buffer full");
                return Err(Utf8bError::InsufficientCapacity { position, index });
            }
        }
    }
    Ok(position)
}
