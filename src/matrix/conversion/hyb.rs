//! Conversions out of HYB

use log::debug;
use num_traits::Num;

use crate::matrix::{SparseMatrixCSR, SparseMatrixHYB};

impl<T: Copy + Num> SparseMatrixHYB<T> {
    /// Converts this HYB matrix to CSR format
    ///
    /// Each output row is the row's ELL entries followed by its COO entries.
    /// The COO portion goes through a counting sort first, so its rows may be
    /// in any order; overflow entries of one row keep their COO storage order.
    pub fn to_csr(&self) -> SparseMatrixCSR<T> {
        let ell_part = self.ell.to_csr();
        let coo_part = self.coo.to_csr();

        let nnz = ell_part.nnz() + coo_part.nnz();

        debug!(
            "hyb_to_csr: {} x {}, {} ELL + {} COO entries",
            self.n_rows, self.n_cols, ell_part.nnz(), coo_part.nnz()
        );

        let mut row_ptr = Vec::with_capacity(self.n_rows + 1);
        let mut col_idx = Vec::with_capacity(nnz);
        let mut values = Vec::with_capacity(nnz);

        row_ptr.push(0);

        // Merge the two CSR parts
        for i in 0..self.n_rows {
            for part in [&ell_part, &coo_part] {
                let start = part.row_ptr[i];
                let end = part.row_ptr[i + 1];

                col_idx.extend_from_slice(&part.col_idx[start..end]);
                values.extend_from_slice(&part.values[start..end]);
            }

            row_ptr.push(col_idx.len());
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
