//! Strided slot buffers backing the DIA and ELL formats

use std::fmt;
use std::ops::{Index, IndexMut};

use aligned_vec::AVec;

use crate::constants::BUFFER_ALIGN_BYTES;

/// A dense `slots × stride` buffer stored slot-major
///
/// Element `(k, i)` lives at linear position `k * stride + i`. For DIA the
/// slot is a diagonal and `i` the row; for ELL the slot is the k-th entry
/// of every row. `stride` is at least the row count and is padded up to the
/// caller's alignment, so positions `n_rows..stride` of each slot are padding.
///
/// The backing storage is cache-line aligned (AVec provides alignment) so
/// each slot starts on an aligned boundary whenever the stride is a multiple
/// of the vector width.
pub struct StridedBuffer<T> {
    slots: usize,
    stride: usize,
    data: AVec<T>,
}

impl<T> StridedBuffer<T> {
    /// Number of slots (diagonals for DIA, entries per row for ELL)
    #[inline]
    pub fn slots(&self) -> usize {
        self.slots
    }

    /// Padded length of each slot
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Total number of stored positions, padding included
    #[inline]
    pub fn len(&self) -> usize {
        self.slots * self.stride
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The full strip of slot `k`, padding included
    pub fn slot(&self, k: usize) -> &[T] {
        let start = k * self.stride;
        &self.data[start..start + self.stride]
    }

    /// The whole buffer in slot-major order
    pub fn as_slice(&self) -> &[T] {
        &self.data[..]
    }
}

impl<T: Copy> StridedBuffer<T> {
    /// Allocates a buffer with every position set to `fill`
    pub fn filled(slots: usize, stride: usize, fill: T) -> Self {
        Self {
            slots,
            stride,
            data: AVec::from_iter(BUFFER_ALIGN_BYTES, (0..slots * stride).map(|_| fill)),
        }
    }

    /// Builds a buffer from slot-major data
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != slots * stride`
    pub fn from_slice(slots: usize, stride: usize, data: &[T]) -> Self {
        assert_eq!(
            data.len(),
            slots * stride,
            "data.len() must equal slots * stride"
        );

        Self {
            slots,
            stride,
            data: AVec::from_iter(BUFFER_ALIGN_BYTES, data.iter().copied()),
        }
    }

    #[inline]
    pub fn get(&self, slot: usize, i: usize) -> T {
        self.data[slot * self.stride + i]
    }

    #[inline]
    pub fn set(&mut self, slot: usize, i: usize, value: T) {
        self.data[slot * self.stride + i] = value;
    }
}

impl<T> Index<(usize, usize)> for StridedBuffer<T> {
    type Output = T;

    fn index(&self, (slot, i): (usize, usize)) -> &T {
        &self.data[slot * self.stride + i]
    }
}

impl<T> IndexMut<(usize, usize)> for StridedBuffer<T> {
    fn index_mut(&mut self, (slot, i): (usize, usize)) -> &mut T {
        &mut self.data[slot * self.stride + i]
    }
}

impl<T: Clone> Clone for StridedBuffer<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots,
            stride: self.stride,
            data: AVec::from_iter(BUFFER_ALIGN_BYTES, self.as_slice().iter().cloned()),
        }
    }
}

impl<T: PartialEq> PartialEq for StridedBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.slots == other.slots
            && self.stride == other.stride
            && self.as_slice() == other.as_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for StridedBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StridedBuffer")
            .field("slots", &self.slots)
            .field("stride", &self.stride)
            .field("data", &self.as_slice())
            .finish()
    }
}
