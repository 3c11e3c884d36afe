//! Diagonal (DIA) matrix format implementation

use std::collections::HashSet;
use std::fmt;
use num_traits::Num;

use crate::error::{FormatError, Result};
use crate::matrix::format::{MatrixShape, SparseFormat};
use crate::matrix::strided::StridedBuffer;

/// A sparse matrix in Diagonal (DIA) format
///
/// Each occupied diagonal is identified by its offset `col - row` and stored
/// as one slot of a strided buffer: `values[(d, i)]` is the entry at row `i`
/// on diagonal `d`, column `i + diag_offsets[d]`. Cells whose column falls
/// outside the matrix, and rows `n_rows..stride`, are padding.
///
/// An in-range cell holding exactly zero means "no entry".
#[derive(Clone, PartialEq)]
pub struct SparseMatrixDIA<T> {
    /// Number of rows in the matrix
    pub n_rows: usize,

    /// Number of columns in the matrix
    pub n_cols: usize,

    /// Number of entries the matrix was built from
    pub num_entries: usize,

    /// Offset (col - row) of each stored diagonal, no duplicates
    pub diag_offsets: Vec<isize>,

    /// Diagonal strips (size: num_diagonals × stride)
    pub values: StridedBuffer<T>,
}

impl<T> SparseMatrixDIA<T>
where
    T: Copy + Num,
{
    /// Creates a new DIA matrix
    ///
    /// # Panics
    ///
    /// Panics if the buffer does not have one slot per diagonal, its stride is
    /// shorter than `n_rows`, or an offset is repeated.
    pub fn new(
        n_rows: usize,
        n_cols: usize,
        num_entries: usize,
        diag_offsets: Vec<isize>,
        values: StridedBuffer<T>,
    ) -> Self {
        match Self::try_new(n_rows, n_cols, num_entries, diag_offsets, values) {
            Ok(matrix) => matrix,
            Err(err) => panic!("{}", err),
        }
    }

    /// Creates a new DIA matrix, returning an error if the layout is inconsistent
    pub fn try_new(
        n_rows: usize,
        n_cols: usize,
        num_entries: usize,
        diag_offsets: Vec<isize>,
        values: StridedBuffer<T>,
    ) -> Result<Self> {
        if values.slots() != diag_offsets.len() || values.stride() < n_rows {
            return Err(FormatError::BufferExtent {
                what: "DIA values",
                expected_slots: diag_offsets.len(),
                min_stride: n_rows,
                slots: values.slots(),
                stride: values.stride(),
            });
        }

        let mut seen = HashSet::with_capacity(diag_offsets.len());
        if let Some(&offset) = diag_offsets.iter().find(|&&offset| !seen.insert(offset)) {
            return Err(FormatError::DuplicateDiagonal { offset });
        }

        Ok(Self {
            n_rows,
            n_cols,
            num_entries,
            diag_offsets,
            values,
        })
    }

    /// Returns the number of entries the matrix was built from
    pub fn nnz(&self) -> usize {
        self.num_entries
    }

    /// Returns the number of stored diagonals
    pub fn num_diagonals(&self) -> usize {
        self.diag_offsets.len()
    }

    /// Returns the padded length of each diagonal
    pub fn stride(&self) -> usize {
        self.values.stride()
    }

    /// Returns the column of row `i` on diagonal `d`, if it lies inside the matrix
    #[inline]
    pub fn column_of(&self, d: usize, i: usize) -> Option<usize> {
        let j = i as isize + self.diag_offsets[d];
        if j >= 0 && (j as usize) < self.n_cols {
            Some(j as usize)
        } else {
            None
        }
    }
}

impl<T> MatrixShape for SparseMatrixDIA<T> {
    fn format(&self) -> SparseFormat {
        SparseFormat::Dia
    }

    fn n_rows(&self) -> usize {
        self.n_rows
    }

    fn n_cols(&self) -> usize {
        self.n_cols
    }

    fn nnz(&self) -> usize {
        self.num_entries
    }
}

impl<T: fmt::Debug + Copy + Num> fmt::Debug for SparseMatrixDIA<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrixDIA {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        writeln!(f, "  nnz: {}", self.num_entries)?;
        writeln!(f, "  stride: {}", self.stride())?;
        writeln!(f, "  diagonals: {:?}", self.diag_offsets)?;
        write!(f, "}}")
    }
}
