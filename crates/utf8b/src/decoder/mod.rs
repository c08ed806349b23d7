//! Byte → scalar conversion.
//!
//! `decode_scalar` classifies one unit starting at a lead byte. It never
//! rejects input: anything that is not a complete, shortest-form, non-surrogate
//! UTF-8 sequence escapes its lead byte alone, and the following bytes are
//! examined again as potential lead bytes. The one exception is a valid prefix
//! cut short by the end of the view while more input may still arrive, which
//! is reported as incomplete so the caller can retry once the rest
//! has been appended.
//!
//! [`decode_append`] drives the leaf over a byte range into a [`ScalarSink`].

use core::ops::Range;

use crate::{
    ScalarSink, Utf8bError,
    buffer::check_range,
    scalar::{escape_raw, is_surrogate},
};


/// Outcome of decoding a single unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Unit {
    /// `len` bytes decoded to `value`.
    Scalar { value: u32, len: usize },
    /// The `available` remaining bytes are a valid prefix of a longer
    /// sequence.
    Incomplete { available: usize },
}

impl Unit {
    #[inline]
    const fn scalar(value: u32, len: usize) -> Self {
        Unit::Scalar { value, len }
    }
}

#[inline]
const fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Decodes the unit at the front of `bytes`, which must not be empty.
///
/// With `end_of_input` set, a truncated sequence escapes its lead byte
/// instead of being reported incomplete.
pub(crate) fn decode_scalar(bytes: &[u8], end_of_input: bool) -> Unit {
    debug_assert!(!bytes.is_empty(), "decode_scalar needs a lead byte");
    let b0 = bytes[0];
    if b0 < 0x80 {
        return Unit::scalar(u32::from(b0), 1);
    }
    // Default outcome for anything malformed: the lead byte stands alone.
    let escaped = Unit::scalar(escape_raw(b0), 1);
    let truncated = if end_of_input {
        escaped
    } else {
        Unit::Incomplete {
            available: bytes.len(),
        }
    };

    // 0xC0 and 0xC1 only start overlong forms; 0xF5.. start values past
    // 0x10FFFF.
    if !(0xC2..=0xF4).contains(&b0) {
        return escaped;
    }

    let Some(&b1) = bytes.get(1) else {
        return truncated;
    };
    if !is_continuation(b1) {
        return escaped;
    }
    if b0 < 0xE0 {
        let value = (u32::from(b0 & 0x1F) << 6) | u32::from(b1 & 0x3F);
        return Unit::scalar(value, 2);
    }

    let Some(&b2) = bytes.get(2) else {
        return truncated;
    };
    if !is_continuation(b2) {
        return escaped;
    }
    if b0 < 0xF0 {
        let value =
            (u32::from(b0 & 0x0F) << 12) | (u32::from(b1 & 0x3F) << 6) | u32::from(b2 & 0x3F);
        return if value >= 0x800 && !is_surrogate(value) {
            Unit::scalar(value, 3)
        } else {
            escaped
        };
    }

    let Some(&b3) = bytes.get(3) else {
        return truncated;
    };
    if !is_continuation(b3) {
        return escaped;
    }
    let value = (u32::from(b0 & 0x07) << 18)
        | (u32::from(b1 & 0x3F) << 12)
        | (u32::from(b2 & 0x3F) << 6)
        | u32::from(b3 & 0x3F);
    if (0x10000..0x11_0000).contains(&value) {
        Unit::scalar(value, 4)
    } else {
        escaped
    }
}

/// Length of the unit at the front of `bytes`, decoded as if no more input
/// will follow. Never zero for non-empty `bytes`.
#[inline]
pub(crate) fn decoded_len(bytes: &[u8]) -> usize {
    match decode_scalar(bytes, true) {
        Unit::Scalar { len, .. } => len,
        Unit::Incomplete { available } => available,
    }
}

/// What the caller wants decoded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecodeRequest {
    /// Half-open byte range to decode.
    pub input: Range<usize>,

    /// Whether no more bytes will follow `input`.
    ///
    /// When `false`, a trailing sequence that is a valid prefix of a longer
    /// one is left unconsumed ([`DecodeStop::IncompleteInput`]). When `true`,
    /// every remaining byte is resolved, escaping what cannot be decoded.
    ///
    /// # Default
    ///
    /// `false`
    pub end_of_input: bool,
}

impl DecodeRequest {
    /// A request for `input` with the given end-of-input flag.
    #[must_use]
    pub fn new(input: Range<usize>, end_of_input: bool) -> Self {
        Self {
            input,
            end_of_input,
        }
    }
}

/// Why [`decode_append`] stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecodeStop {
    /// Every input byte was consumed.
    InputExhausted,
    /// The output range is full; input may remain.
    OutputFull,
    /// The remaining input is an incomplete sequence; append more bytes to it
    /// and decode again.
    IncompleteInput,
}

/// How far a [`decode_append`] call got.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecodeProgress {
    /// Bytes consumed from the front of the input range.
    pub consumed: usize,
    /// Scalars written from the start of the output range.
    pub produced: usize,
    /// Why decoding stopped.
    pub stop: DecodeStop,
}

/// Returns the number of scalars the bytes in `range` decode to when no more
/// input follows.
///
/// A truncated tail counts one escape per byte. Under streaming conditions
/// this is an upper bound on what [`decode_append`] produces for the same
/// range.
///
/// # Errors
///
/// [`Utf8bError::InvalidArguments`] if `range` does not fit `bytes`.
pub fn decoded_length(bytes: &[u8], range: Range<usize>) -> Result<usize, Utf8bError> {
    check_range(&range, bytes.len())?;
    let mut input = &bytes[range];
    let mut count = 0;
    while !input.is_empty() {
        input = &input[decoded_len(input)..];
        count += 1;
    }
    Ok(count)
}

/// Decodes the bytes of `request.input` into `out`, writing scalars from
/// `output.start` and never at or past `output.end`.
///
/// Decoding stops when the input is exhausted, when the output range is full,
/// or, unless `request.end_of_input` is set, at a trailing incomplete
/// sequence. The returned [`DecodeProgress`] tells which; none of these is an
/// error.
///
/// To stream, keep the `input.len() - consumed` unconsumed bytes, put the next
/// chunk after them and decode again. Only the last call should set
/// `end_of_input`.
///
/// # Errors
///
/// [`Utf8bError::InvalidArguments`] if `request.input` does not fit `bytes`
/// or `output` does not fit `out`. Nothing is written.
pub fn decode_append<T>(
    bytes: &[u8],
    request: &DecodeRequest,
    out: &mut T,
    output: Range<usize>,
) -> Result<DecodeProgress, Utf8bError>
where
    T: ScalarSink + ?Sized,
{
    check_range(&request.input, bytes.len())?;
    check_range(&output, out.scalar_count())?;
    Ok(decode_units(
        &bytes[request.input.clone()],
        request.end_of_input,
        out,
        output,
    ))
}

/// Infallible core of [`decode_append`]; `output` must fit `out`.
pub(crate) fn decode_units<T>(
    input: &[u8],
    end_of_input: bool,
    out: &mut T,
    output: Range<usize>,
) -> DecodeProgress
where
    T: ScalarSink + ?Sized,
{
    let mut consumed = 0;
    let mut slot = output.start;
    let stop = loop {
        if consumed == input.len() {
            break DecodeStop::InputExhausted;
        }
        if slot == output.end {
            break DecodeStop::OutputFull;
        }
        match decode_scalar(&input[consumed..], end_of_input) {
            Unit::Scalar { value, len } => {
                out.set_scalar(slot, value);
                slot += 1;
                consumed += len;
            }
            Unit::Incomplete { available } => {
                tracing::trace!(available, "incomplete trailing sequence");
                break DecodeStop::IncompleteInput;
            }
        }
    };
    let produced = slot - output.start;
    tracing::trace!(consumed, produced, ?stop, "decode stopped");
    DecodeProgress {
        consumed,
        produced,
        stop,
    }
}
