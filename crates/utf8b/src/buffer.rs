//! Abstraction over scalar buffers owned by the caller.

use alloc::{collections::VecDeque, vec::Vec};
use core::ops::Range;

use crate::Utf8bError;

/// Read access to an indexable sequence of scalars.
pub trait ScalarSource {
    /// Number of scalars in the buffer.
    fn scalar_count(&self) -> usize;

    /// Scalar at `index`. Callers only pass indices below
    /// [`scalar_count`](Self::scalar_count).
    fn scalar_at(&self, index: usize) -> u32;
}

/// Write access to an indexable sequence of scalars.
pub trait ScalarSink: ScalarSource {
    /// Overwrites the scalar at `index`. Callers only pass indices below
    /// [`scalar_count`](ScalarSource::scalar_count).
    fn set_scalar(&mut self, index: usize, scalar: u32);
}

impl ScalarSource for [u32] {
    #[inline]
    fn scalar_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn scalar_at(&self, index: usize) -> u32 {
        self[index]
    }
}

impl ScalarSink for [u32] {
    #[inline]
    fn set_scalar(&mut self, index: usize, scalar: u32) {
        self[index] = scalar;
    }
}

impl<const N: usize> ScalarSource for [u32; N] {
    #[inline]
    fn scalar_count(&self) -> usize {
        N
    }

    #[inline]
    fn scalar_at(&self, index: usize) -> u32 {
        self[index]
    }
}

impl<const N: usize> ScalarSink for [u32; N] {
    #[inline]
    fn set_scalar(&mut self, index: usize, scalar: u32) {
        self[index] = scalar;
    }
}

impl ScalarSource for Vec<u32> {
    #[inline]
    fn scalar_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn scalar_at(&self, index: usize) -> u32 {
        self[index]
    }
}

impl ScalarSink for Vec<u32> {
    #[inline]
    fn set_scalar(&mut self, index: usize, scalar: u32) {
        self[index] = scalar;
    }
}

impl ScalarSource for VecDeque<u32> {
    #[inline]
    fn scalar_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn scalar_at(&self, index: usize) -> u32 {
        self[index]
    }
}

impl ScalarSink for VecDeque<u32> {
    #[inline]
    fn set_scalar(&mut self, index: usize, scalar: u32) {
        self[index] = scalar;
    }
}

// A `char` is always a Unicode scalar value, so this source never yields an
// escape or an unencodable value.
impl ScalarSource for [char] {
    #[inline]
    fn scalar_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn scalar_at(&self, index: usize) -> u32 {
        u32::from(self[index])
    }
}

/// Rejects `range` unless `range.start <= range.end <= len`.
pub(crate) fn check_range(range: &Range<usize>, len: usize) -> Result<(), Utf8bError> {
    if range.start <= range.end && range.end <= len {
        Ok(())
    } else {
        Err(Utf8bError::InvalidArguments {
            start: range.start,
            end: range.end,
            len,
        })
    }
}
