/// Configuration for the owned encoding helpers
/// ([`encode_to_vec_with`](crate::encode_to_vec_with)).
///
/// # Default
///
/// No padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncodeOptions {
    /// Number of zero bytes appended after the encoded scalars.
    ///
    /// Useful when the bytes are handed to an API that expects a
    /// NUL-terminated buffer. The padding is not part of the encoding and is
    /// not checked against embedded NULs.
    ///
    /// # Default
    ///
    /// `0`
    pub zero_pad: usize,
}
