//! Utility functions and helpers

pub mod formats;

pub use formats::{
    from_ndarray, from_sprs_csr, from_sprs_triplets, to_ndarray, to_sprs_csr, to_sprs_triplets,
};

/// Computes an exclusive prefix sum (scan) for a vector
///
/// Turns per-row entry counts into CSR row pointers.
pub fn exclusive_scan(input: &[usize]) -> Vec<usize> {
    let mut result = Vec::with_capacity(input.len() + 1);
    let mut sum = 0;

    result.push(0); // First element is always 0

    for &val in input {
        sum += val;
        result.push(sum);
    }

    result
}

/// Rounds `n_rows` up to the next multiple of `alignment`
///
/// This is the per-slot length of DIA and ELL buffers. `alignment` must be
/// non-zero; callers check it before getting here.
#[inline]
pub fn aligned_stride(n_rows: usize, alignment: usize) -> usize {
    alignment * ((n_rows + alignment - 1) / alignment)
}
