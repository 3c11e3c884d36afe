//! Coordinate (COO) matrix format implementation

use std::fmt;
use num_traits::Num;

use crate::error::{FormatError, Result};
use crate::matrix::format::{MatrixShape, SparseFormat};

/// A sparse matrix in Coordinate (COO) format
///
/// Each entry is stored as an explicit (row, column, value) triple in three
/// parallel arrays. Entries are in no particular order and the same
/// coordinate may appear more than once; duplicates are summed by the
/// conversions that materialize values (see [`SparseMatrixCOO::to_dense`]).
#[derive(Clone, PartialEq)]
pub struct SparseMatrixCOO<T> {
    /// Number of rows in the matrix
    pub n_rows: usize,

    /// Number of columns in the matrix
    pub n_cols: usize,

    /// Row index of each entry (size: nnz)
    pub row_idx: Vec<usize>,

    /// Column index of each entry (size: nnz)
    pub col_idx: Vec<usize>,

    /// Value of each entry (size: nnz)
    pub values: Vec<T>,
}

impl<T> SparseMatrixCOO<T>
where
    T: Copy + Num,
{
    /// Creates a new COO matrix with the given dimensions and entries
    ///
    /// # Panics
    ///
    /// Panics if the arrays have different lengths or an index is out of bounds.
    /// Use [`SparseMatrixCOO::try_new`] to get an error instead.
    pub fn new(
        n_rows: usize,
        n_cols: usize,
        row_idx: Vec<usize>,
        col_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Self {
        match Self::try_new(n_rows, n_cols, row_idx, col_idx, values) {
            Ok(matrix) => matrix,
            Err(err) => panic!("{}", err),
        }
    }

    /// Creates a new COO matrix, checking that the entries are consistent
    pub fn try_new(
        n_rows: usize,
        n_cols: usize,
        row_idx: Vec<usize>,
        col_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self> {
        if row_idx.len() != values.len() {
            return Err(FormatError::LengthMismatch {
                what: "row_idx/values",
                left: row_idx.len(),
                right: values.len(),
            });
        }
        if col_idx.len() != values.len() {
            return Err(FormatError::LengthMismatch {
                what: "col_idx/values",
                left: col_idx.len(),
                right: values.len(),
            });
        }
        if let Some(&row) = row_idx.iter().find(|&&row| row >= n_rows) {
            return Err(FormatError::RowOutOfBounds { row, n_rows });
        }
        if let Some(&col) = col_idx.iter().find(|&&col| col >= n_cols) {
            return Err(FormatError::ColumnOutOfBounds { col, n_cols });
        }

        Ok(Self {
            n_rows,
            n_cols,
            row_idx,
            col_idx,
            values,
        })
    }

    /// Builds a COO matrix from (row, col, value) triplets
    pub fn from_triplets(n_rows: usize, n_cols: usize, triplets: &[(usize, usize, T)]) -> Self {
        let row_idx = triplets.iter().map(|&(r, _, _)| r).collect();
        let col_idx = triplets.iter().map(|&(_, c, _)| c).collect();
        let values = triplets.iter().map(|&(_, _, v)| v).collect();

        Self::new(n_rows, n_cols, row_idx, col_idx, values)
    }

    /// Creates an empty matrix with the given dimensions
    pub fn zeros(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            row_idx: Vec::new(),
            col_idx: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Returns the number of stored entries, duplicates included
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Returns an iterator over the stored entries as (row, col, value)
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        self.row_idx
            .iter()
            .zip(&self.col_idx)
            .zip(&self.values)
            .map(|((&row, &col), val)| (row, col, val))
    }
}

impl<T> MatrixShape for SparseMatrixCOO<T> {
    fn format(&self) -> SparseFormat {
        SparseFormat::Coo
    }

    fn n_rows(&self) -> usize {
        self.n_rows
    }

    fn n_cols(&self) -> usize {
        self.n_cols
    }

    fn nnz(&self) -> usize {
        self.values.len()
    }
}

impl<T: fmt::Debug + Copy + Num> fmt::Debug for SparseMatrixCOO<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrixCOO {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        writeln!(f, "  nnz: {}", self.nnz())?;

        let max_entries = 10.min(self.nnz());
        if max_entries > 0 {
            writeln!(f, "  content sample:")?;
            for (row, col, val) in self.iter().take(max_entries) {
                writeln!(f, "    ({}, {}) = {:?}", row, col, val)?;
            }
            if self.nnz() > max_entries {
                writeln!(f, "    ... ({} more)", self.nnz() - max_entries)?;
            }
        }

        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_matrix() {
        let matrix = SparseMatrixCOO::new(3, 3, vec![2, 0, 2], vec![2, 0, 2], vec![1, 2, 3]);

        assert_eq!(matrix.n_rows, 3);
        assert_eq!(matrix.n_cols, 3);
        assert_eq!(matrix.nnz(), 3);

        let entries: Vec<_> = matrix.iter().collect();
        assert_eq!(entries, vec![(2, 2, &1), (0, 0, &2), (2, 2, &3)]);
    }

    #[test]
    fn test_from_triplets() {
        let matrix = SparseMatrixCOO::from_triplets(2, 4, &[(1, 3, 5.0), (0, 1, 6.0)]);
        assert_eq!(matrix.row_idx, vec![1, 0]);
        assert_eq!(matrix.col_idx, vec![3, 1]);
        assert_eq!(matrix.values, vec![5.0, 6.0]);
    }

    #[test]
    fn test_try_new_rejects_bad_input() {
        let err = SparseMatrixCOO::try_new(2, 2, vec![0, 2], vec![0, 1], vec![1, 2]).unwrap_err();
        assert!(matches!(err, FormatError::RowOutOfBounds { row: 2, n_rows: 2 }));

        let err = SparseMatrixCOO::try_new(2, 2, vec![0], vec![0, 1], vec![1]).unwrap_err();
        assert!(matches!(err, FormatError::LengthMismatch { .. }));
    }

    #[test]
    #[should_panic(expected = "Column index 5 out of bounds")]
    fn test_column_out_of_bounds() {
        SparseMatrixCOO::new(2, 2, vec![0], vec![5], vec![1]);
    }
}
