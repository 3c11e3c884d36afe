//! Conversions out of COO

use log::debug;
use num_traits::Num;

use crate::matrix::{DenseMatrix, Orientation, SparseMatrixCOO, SparseMatrixCSR};

impl<T: Copy + Num> SparseMatrixCOO<T> {
    /// Converts this COO matrix to CSR format
    ///
    /// A counting sort by row: entries keep their relative COO order within
    /// each row. Duplicate coordinates are copied over as separate entries,
    /// not merged.
    pub fn to_csr(&self) -> SparseMatrixCSR<T> {
        let nnz = self.nnz();

        // Count non-zeros per row
        let mut row_ptr = vec![0; self.n_rows + 1];

        for &row in &self.row_idx {
            row_ptr[row] += 1;
        }

        // Turn counts into row starts in place
        let mut cumsum = 0;

        for ptr in row_ptr.iter_mut().take(self.n_rows) {
            let count = *ptr;
            *ptr = cumsum;
            cumsum += count;
        }
        row_ptr[self.n_rows] = nnz;

        debug!("coo_to_csr: {} x {}, {} entries", self.n_rows, self.n_cols, nnz);

        // Allocate arrays for CSR matrix
        let mut col_idx = vec![0; nnz];
        let mut values = vec![T::zero(); nnz];

        // Scatter entries, advancing each row's write cursor
        for n in 0..nnz {
            let row = self.row_idx[n];
            let dest = row_ptr[row];

            col_idx[dest] = self.col_idx[n];
            values[dest] = self.values[n];

            row_ptr[row] += 1;
        }

        // Every cursor now sits on the start of the next row; shift back by one
        let mut last = 0;

        for ptr in row_ptr.iter_mut() {
            let next = *ptr;
            *ptr = last;
            last = next;
        }

        SparseMatrixCSR {
            n_rows: self.n_rows,
            n_cols: self.n_cols,
            row_ptr,
            col_idx,
            values,
        }
    }

    /// Converts this COO matrix to a dense matrix
    ///
    /// Duplicate coordinates are summed.
    pub fn to_dense(&self, orientation: Orientation) -> DenseMatrix<T> {
        let mut dense = DenseMatrix::zeros(self.n_rows, self.n_cols, orientation);

        for (row, col, &val) in self.iter() {
            let cell = &mut dense[(row, col)];
            *cell = *cell + val;
        }

        dense
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coo_to_csr_diagonal() {
        let coo = SparseMatrixCOO::new(3, 3, vec![0, 1, 2], vec![0, 1, 2], vec![1, 2, 3]);
        let csr = coo.to_csr();

        assert_eq!(csr.row_ptr, vec![0, 1, 2, 3]);
        assert_eq!(csr.col_idx, vec![0, 1, 2]);
        assert_eq!(csr.values, vec![1, 2, 3]);
    }

    #[test]
    fn test_coo_to_csr_unsorted_with_empty_rows() {
        // Entries arrive out of row order; row 1 and row 3 are empty
        let coo = SparseMatrixCOO::new(
            4, 3,
            vec![2, 0, 2, 0],
            vec![1, 2, 0, 0],
            vec![10.0, 20.0, 30.0, 40.0],
        );
        let csr = coo.to_csr();

        assert_eq!(csr.row_ptr, vec![0, 2, 2, 4, 4]);
        // Insertion order is kept within a row
        assert_eq!(csr.col_idx, vec![2, 0, 1, 0]);
        assert_eq!(csr.values, vec![20.0, 40.0, 10.0, 30.0]);
    }

    #[test]
    fn test_coo_to_csr_keeps_duplicates() {
        let coo = SparseMatrixCOO::new(2, 2, vec![1, 1], vec![0, 0], vec![1, 2]);
        let csr = coo.to_csr();

        assert_eq!(csr.nnz(), 2);
        assert_eq!(csr.row_ptr, vec![0, 0, 2]);
        assert_eq!(csr.col_idx, vec![0, 0]);
    }

    #[test]
    fn test_coo_to_dense_sums_duplicates() {
        let coo = SparseMatrixCOO::new(2, 2, vec![0, 1, 0], vec![1, 0, 1], vec![1.5, 2.0, 2.5]);

        for orientation in [Orientation::RowMajor, Orientation::ColumnMajor] {
            let dense = coo.to_dense(orientation);
            assert_eq!(dense.orientation, orientation);
            assert_eq!(dense[(0, 0)], 0.0);
            assert_eq!(dense[(0, 1)], 4.0);
            assert_eq!(dense[(1, 0)], 2.0);
            assert_eq!(dense[(1, 1)], 0.0);
        }
    }

    #[test]
    fn test_empty() {
        let coo = SparseMatrixCOO::<f64>::zeros(3, 2);
        let csr = coo.to_csr();

        assert_eq!(csr.row_ptr, vec![0, 0, 0, 0]);
        assert_eq!(csr.nnz(), 0);
    }
}
