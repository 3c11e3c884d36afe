//! Conversions out of dense matrices

use log::debug;
use num_traits::Num;

use crate::matrix::{DenseMatrix, SparseMatrixCOO, SparseMatrixCSR};

impl<T: Copy + Num> DenseMatrix<T> {
    /// Converts this dense matrix to COO format
    ///
    /// A cell is an entry iff it is not exactly zero. Entries come out in
    /// row-major order whatever the orientation of the source.
    pub fn to_coo(&self) -> SparseMatrixCOO<T> {
        let nnz = self.nnz();

        debug!("dense_to_coo: {} x {}, {} entries", self.n_rows, self.n_cols, nnz);

        let mut row_idx = vec![0; nnz];
        let mut col_idx = vec![0; nnz];
        let mut values = vec![T::zero(); nnz];
        let mut pos = 0;

        for i in 0..self.n_rows {
            for j in 0..self.n_cols {
                let value = self.get(i, j);
                if !value.is_zero() {
                    row_idx[pos] = i;
                    col_idx[pos] = j;
                    values[pos] = value;
                    pos += 1;
                }
            }
        }

        SparseMatrixCOO {
            n_rows: self.n_rows,
            n_cols: self.n_cols,
            row_idx,
            col_idx,
            values,
        }
    }

    /// Converts this dense matrix to CSR format
    ///
    /// Columns within each row come out in ascending order.
    pub fn to_csr(&self) -> SparseMatrixCSR<T> {
        let nnz = self.nnz();

        debug!("dense_to_csr: {} x {}, {} entries", self.n_rows, self.n_cols, nnz);

        let mut row_ptr = vec![0; self.n_rows + 1];
        let mut col_idx = vec![0; nnz];
        let mut values = vec![T::zero(); nnz];
        let mut pos = 0;

        for i in 0..self.n_rows {
            row_ptr[i] = pos;

            for j in 0..self.n_cols {
                let value = self.get(i, j);
                if !value.is_zero() {
                    col_idx[pos] = j;
                    values[pos] = value;
                    pos += 1;
                }
            }
        }
        row_ptr[self.n_rows] = pos;

        SparseMatrixCSR {
            n_rows: self.n_rows,
            n_cols: self.n_cols,
            row_ptr,
            col_idx,
            values,
        }
    }
}
