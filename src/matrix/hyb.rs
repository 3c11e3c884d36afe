//! Hybrid ELL + COO (HYB) matrix format implementation

use std::fmt;
use num_traits::Num;

use crate::error::{FormatError, Result};
use crate::matrix::coo::SparseMatrixCOO;
use crate::matrix::ell::SparseMatrixELL;
use crate::matrix::format::{MatrixShape, SparseFormat};

/// A sparse matrix split between an ELL portion and a COO overflow portion
///
/// The ELL portion holds up to `entries_per_row` entries of each row; any
/// further entries of that row live in the COO portion. The two portions
/// together cover every entry exactly once.
///
/// Within a row, ELL entries come before COO entries. The COO portion is
/// expected to be grouped by row in ascending row order, which
/// [`SparseMatrixCSR::to_hyb`](crate::SparseMatrixCSR::to_hyb) guarantees. A
/// COO portion in any other order still converts back correctly, but the
/// overflow entries of a row then follow the COO storage order.
#[derive(Clone, PartialEq)]
pub struct SparseMatrixHYB<T> {
    /// Number of rows in the matrix
    pub n_rows: usize,

    /// Number of columns in the matrix
    pub n_cols: usize,

    /// Fixed-capacity portion
    pub ell: SparseMatrixELL<T>,

    /// Overflow portion
    pub coo: SparseMatrixCOO<T>,
}

impl<T> SparseMatrixHYB<T>
where
    T: Copy + Num,
{
    /// Creates a HYB matrix from its two portions
    ///
    /// # Panics
    ///
    /// Panics if the portions do not share the given dimensions.
    pub fn new(n_rows: usize, n_cols: usize, ell: SparseMatrixELL<T>, coo: SparseMatrixCOO<T>) -> Self {
        match Self::try_new(n_rows, n_cols, ell, coo) {
            Ok(matrix) => matrix,
            Err(err) => panic!("{}", err),
        }
    }

    /// Creates a HYB matrix, returning an error if the portions disagree in shape
    pub fn try_new(
        n_rows: usize,
        n_cols: usize,
        ell: SparseMatrixELL<T>,
        coo: SparseMatrixCOO<T>,
    ) -> Result<Self> {
        for (what, rows, cols) in [("ELL portion", ell.n_rows, ell.n_cols), ("COO portion", coo.n_rows, coo.n_cols)] {
            if rows != n_rows {
                return Err(FormatError::LengthMismatch { what, left: rows, right: n_rows });
            }
            if cols != n_cols {
                return Err(FormatError::LengthMismatch { what, left: cols, right: n_cols });
            }
        }

        Ok(Self { n_rows, n_cols, ell, coo })
    }

    /// Returns the total number of entries in both portions
    pub fn nnz(&self) -> usize {
        self.ell.num_entries + self.coo.nnz()
    }

    /// Returns the per-row capacity of the ELL portion
    pub fn entries_per_row(&self) -> usize {
        self.ell.entries_per_row()
    }

    /// Returns true if the COO portion is grouped by row in ascending order
    pub fn coo_is_row_ordered(&self) -> bool {
        self.coo.row_idx.windows(2).all(|w| w[0] <= w[1])
    }
}

impl<T> MatrixShape for SparseMatrixHYB<T> {
    fn format(&self) -> SparseFormat {
        SparseFormat::Hyb
    }

    fn n_rows(&self) -> usize {
        self.n_rows
    }

    fn n_cols(&self) -> usize {
        self.n_cols
    }

    fn nnz(&self) -> usize {
        self.ell.num_entries + self.coo.values.len()
    }
}

impl<T: fmt::Debug + Copy + Num> fmt::Debug for SparseMatrixHYB<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrixHYB {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        writeln!(f, "  nnz: {} (ELL {}, COO {})", self.nnz(), self.ell.num_entries, self.coo.nnz())?;
        writeln!(f, "  entries per row: {}", self.entries_per_row())?;
        write!(f, "}}")
    }
}
