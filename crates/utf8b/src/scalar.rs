//! Scalar values and escape values.
//!
//! A *scalar* here is a `u32` that is either a Unicode scalar value (anything
//! in `0..=0x10FFFF` outside `0xD800..0xE000`) or an escape value in
//! `0xDC80..=0xDCFF` standing for one raw byte `0x80..=0xFF`.

/// Smallest escape value; stands for the raw byte `0x80`.
pub const ESCAPE_MIN: u32 = 0xDC80;

/// Largest escape value; stands for the raw byte `0xFF`.
pub const ESCAPE_MAX: u32 = 0xDCFF;

/// Largest Unicode scalar value.
pub const MAX_SCALAR: u32 = 0x10FFFF;

/// Longest encoded form of a single scalar, in bytes.
pub const MAX_SEQUENCE_LEN: usize = 4;

pub(crate) const SURROGATE_MIN: u32 = 0xD800;
pub(crate) const SURROGATE_END: u32 = 0xE000;

/// Returns `true` if `scalar` is an escape value.
#[inline]
#[must_use]
pub const fn is_escape(scalar: u32) -> bool {
    scalar >= ESCAPE_MIN && scalar <= ESCAPE_MAX
}

/// Returns `true` if `scalar` lies in the surrogate range `0xD800..0xE000`.
#[inline]
#[must_use]
pub const fn is_surrogate(scalar: u32) -> bool {
    scalar >= SURROGATE_MIN && scalar < SURROGATE_END
}

/// Returns `true` if `scalar` can be encoded: a Unicode scalar value or an
/// escape value.
#[inline]
#[must_use]
pub const fn is_encodable(scalar: u32) -> bool {
    scalar <= MAX_SCALAR && (!is_surrogate(scalar) || is_escape(scalar))
}

/// Returns the escape value for a raw byte.
///
/// Bytes below `0x80` are always valid UTF-8 on their own and have no escape.
#[inline]
#[must_use]
pub const fn escape(byte: u8) -> Option<u32> {
    if byte < 0x80 {
        None
    } else {
        Some(escape_raw(byte))
    }
}

/// Returns the raw byte an escape value stands for.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn escaped_byte(scalar: u32) -> Option<u8> {
    if is_escape(scalar) {
        Some((scalar & 0xFF) as u8)
    } else {
        None
    }
}

/// Converts a scalar to a `char`. Escape values are surrogates and yield
/// `None`.
#[inline]
#[must_use]
pub const fn to_char(scalar: u32) -> Option<char> {
    char::from_u32(scalar)
}

/// `0xDC00 | byte`; only an escape value when `byte >= 0x80`.
#[inline]
pub(crate) const fn escape_raw(byte: u8) -> u32 {
    0xDC00 | byte as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_covers_exactly_the_high_bytes() {
        assert_eq!(escape(0x7F), None);
        assert_eq!(escape(0x80), Some(ESCAPE_MIN));
        assert_eq!(escape(0xFF), Some(ESCAPE_MAX));
        for byte in 0x80..=0xFFu8 {
            let value = escape(byte).unwrap();
            assert!(is_escape(value));
            assert_eq!(escaped_byte(value), Some(byte));
        }
    }

    #[test]
    fn escaped_byte_rejects_neighbours_of_the_escape_range() {
        assert_eq!(escaped_byte(0xDC7F), None);
        assert_eq!(escaped_byte(0xDD00), None);
        assert_eq!(escaped_byte(0x80), None);
    }

    #[test]
    fn encodable_set() {
        assert!(is_encodable(0));
        assert!(is_encodable(0xD7FF));
        assert!(!is_encodable(0xD800));
        assert!(!is_encodable(0xDC7F));
        assert!(is_encodable(0xDC80));
        assert!(is_encodable(0xDCFF));
        assert!(!is_encodable(0xDD00));
        assert!(!is_encodable(0xDFFF));
        assert!(is_encodable(0xE000));
        assert!(is_encodable(MAX_SCALAR));
        assert!(!is_encodable(MAX_SCALAR + 1));
        assert!(!is_encodable(u32::MAX));
    }

    #[test]
    fn escapes_are_not_chars() {
        assert_eq!(to_char(0x41), Some('A'));
        assert_eq!(to_char(ESCAPE_MIN), None);
    }
}
