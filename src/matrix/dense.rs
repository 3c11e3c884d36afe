//! Dense matrix storage with row- or column-major orientation

use std::fmt;
use std::ops::{Index, IndexMut};
use num_traits::Num;

use crate::error::{FormatError, Result};
use crate::matrix::format::{MatrixShape, SparseFormat};

/// Memory order of a dense matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Cell (i, j) at `i * n_cols + j`
    #[default]
    RowMajor,
    /// Cell (i, j) at `j * n_rows + i`
    ColumnMajor,
}

/// A fully materialized matrix, explicit zeros included
#[derive(Clone, PartialEq)]
pub struct DenseMatrix<T> {
    /// Number of rows in the matrix
    pub n_rows: usize,

    /// Number of columns in the matrix
    pub n_cols: usize,

    /// Memory order of `values`
    pub orientation: Orientation,

    /// All cells (size: n_rows * n_cols)
    pub values: Vec<T>,
}

impl<T> DenseMatrix<T>
where
    T: Copy + Num,
{
    /// Creates a dense matrix from cell data laid out in the given orientation
    ///
    /// # Panics
    ///
    /// Panics if `values.len() != n_rows * n_cols`
    pub fn new(n_rows: usize, n_cols: usize, orientation: Orientation, values: Vec<T>) -> Self {
        match Self::try_new(n_rows, n_cols, orientation, values) {
            Ok(matrix) => matrix,
            Err(err) => panic!("{}", err),
        }
    }

    /// Creates a dense matrix, returning an error if the data has the wrong length
    pub fn try_new(
        n_rows: usize,
        n_cols: usize,
        orientation: Orientation,
        values: Vec<T>,
    ) -> Result<Self> {
        if values.len() != n_rows * n_cols {
            return Err(FormatError::LengthMismatch {
                what: "dense values/n_rows * n_cols",
                left: values.len(),
                right: n_rows * n_cols,
            });
        }

        Ok(Self {
            n_rows,
            n_cols,
            orientation,
            values,
        })
    }

    /// Creates a row-major matrix from a slice of equal-length rows
    ///
    /// # Panics
    ///
    /// Panics if the rows have different lengths
    pub fn from_rows(rows: &[Vec<T>]) -> Self {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |row| row.len());
        assert!(
            rows.iter().all(|row| row.len() == n_cols),
            "All rows must have the same length"
        );

        Self {
            n_rows,
            n_cols,
            orientation: Orientation::RowMajor,
            values: rows.iter().flatten().copied().collect(),
        }
    }

    /// Creates a zero-filled matrix
    pub fn zeros(n_rows: usize, n_cols: usize, orientation: Orientation) -> Self {
        Self {
            n_rows,
            n_cols,
            orientation,
            values: vec![T::zero(); n_rows * n_cols],
        }
    }

    /// Returns the value at (i, j)
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        self.values[self.offset(i, j)]
    }

    /// Returns the number of cells that are not exactly zero
    pub fn nnz(&self) -> usize {
        self.values.iter().filter(|v| !v.is_zero()).count()
    }

    /// Returns the same matrix laid out in `orientation`
    pub fn to_orientation(&self, orientation: Orientation) -> Self {
        if orientation == self.orientation {
            return self.clone();
        }

        let mut result = Self::zeros(self.n_rows, self.n_cols, orientation);
        for i in 0..self.n_rows {
            for j in 0..self.n_cols {
                result[(i, j)] = self.get(i, j);
            }
        }
        result
    }
}

impl<T> DenseMatrix<T> {
    /// Linear position of cell (i, j) in `values`
    #[inline]
    pub fn offset(&self, i: usize, j: usize) -> usize {
        match self.orientation {
            Orientation::RowMajor => i * self.n_cols + j,
            Orientation::ColumnMajor => j * self.n_rows + i,
        }
    }
}

impl<T> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.values[self.offset(i, j)]
    }
}

impl<T> IndexMut<(usize, usize)> for DenseMatrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        let offset = self.offset(i, j);
        &mut self.values[offset]
    }
}

impl<T: Num> MatrixShape for DenseMatrix<T> {
    fn format(&self) -> SparseFormat {
        SparseFormat::Dense
    }

    fn n_rows(&self) -> usize {
        self.n_rows
    }

    fn n_cols(&self) -> usize {
        self.n_cols
    }

    fn nnz(&self) -> usize {
        self.values.iter().filter(|v| !v.is_zero()).count()
    }
}

impl<T: fmt::Debug + Copy + Num> fmt::Debug for DenseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DenseMatrix {{")?;
        writeln!(f, "  dimensions: {} × {} ({:?})", self.n_rows, self.n_cols, self.orientation)?;

        let max_rows_to_print = 5.min(self.n_rows);
        let max_cols_to_print = 8.min(self.n_cols);
        for i in 0..max_rows_to_print {
            let row: Vec<T> = (0..max_cols_to_print).map(|j| self.get(i, j)).collect();
            write!(f, "    {:?}", row)?;
            if self.n_cols > max_cols_to_print {
                write!(f, " ...")?;
            }
            writeln!(f)?;
        }
        if self.n_rows > max_rows_to_print {
            writeln!(f, "    ... ({} more rows)", self.n_rows - max_rows_to_print)?;
        }

        write!(f, "}}")
    }
}
