//! Conversions out of DIA

use log::debug;
use num_traits::Num;

use crate::matrix::{SparseMatrixCSR, SparseMatrixDIA};
use crate::utils::exclusive_scan;

impl<T: Copy + Num> SparseMatrixDIA<T> {
    /// Converts this DIA matrix to CSR format
    ///
    /// Cells outside the matrix and cells holding exactly zero are skipped.
    /// Within each row, entries follow the order of `diag_offsets`, which is
    /// ascending column order only if the offsets are sorted.
    pub fn to_csr(&self) -> SparseMatrixCSR<T> {
        // Count stored non-zeros per row
        let mut row_counts = vec![0; self.n_rows];

        for (i, count) in row_counts.iter_mut().enumerate() {
            for d in 0..self.num_diagonals() {
                if self.column_of(d, i).is_some() && !self.values.get(d, i).is_zero() {
                    *count += 1;
                }
            }
        }

        let row_ptr = exclusive_scan(&row_counts);
        let nnz = row_ptr[self.n_rows];

        debug!(
            "dia_to_csr: {} x {}, {} diagonals, {} entries",
            self.n_rows, self.n_cols, self.num_diagonals(), nnz
        );

        let mut col_idx = vec![0; nnz];
        let mut values = vec![T::zero(); nnz];
        let mut pos = 0;

        for i in 0..self.n_rows {
            for d in 0..self.num_diagonals() {
                if let Some(j) = self.column_of(d, i) {
                    let value = self.values.get(d, i);
                    if !value.is_zero() {
                        col_idx[pos] = j;
                        values[pos] = value;
                        pos += 1;
                    }
                }
            }
        }

        SparseMatrixCSR {
            n_rows: self.n_rows,
            n_cols: self.n_cols,
            row_ptr,
            col_idx,
            values,
        }
    }
}
