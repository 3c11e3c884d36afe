//! Conversions out of ELL

use log::debug;
use num_traits::Num;

use crate::matrix::{SparseMatrixCSR, SparseMatrixELL};
use crate::utils::exclusive_scan;

impl<T: Copy + Num> SparseMatrixELL<T> {
    /// Converts this ELL matrix to CSR format
    ///
    /// Each row's occupied slots are emitted in slot order. Sizing is driven by
    /// the sentinel, not by `num_entries`.
    pub fn to_csr(&self) -> SparseMatrixCSR<T> {
        let entries_per_row = self.entries_per_row();

        let row_counts: Vec<usize> = (0..self.n_rows)
            .map(|i| (0..entries_per_row).filter(|&k| self.is_occupied(k, i)).count())
            .collect();

        let row_ptr = exclusive_scan(&row_counts);
        let nnz = row_ptr[self.n_rows];

        debug!(
            "ell_to_csr: {} x {}, {} entries per row, {} entries",
            self.n_rows, self.n_cols, entries_per_row, nnz
        );

        let mut col_idx = vec![0; nnz];
        let mut values = vec![T::zero(); nnz];
        let mut pos = 0;

        for i in 0..self.n_rows {
            for k in 0..entries_per_row {
                if self.is_occupied(k, i) {
                    col_idx[pos] = self.col_idx.get(k, i);
                    values[pos] = self.values.get(k, i);
                    pos += 1;
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
