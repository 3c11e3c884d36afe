//! ELLPACK (ELL) matrix format implementation

use std::fmt;
use num_traits::Num;

use crate::constants::INVALID_INDEX;
use crate::error::{FormatError, Result};
use crate::matrix::format::{MatrixShape, SparseFormat};
use crate::matrix::strided::StridedBuffer;

/// A sparse matrix in ELLPACK (ELL) format
///
/// Every row has the same number of slots, `entries_per_row`. Slot `k` of
/// row `i` lives at `(k, i)` in both strided buffers. A slot whose column is
/// [`SparseMatrixELL::INVALID_INDEX`] is unused, and its value is zero.
/// Used slots always come first in a row.
#[derive(Clone, PartialEq)]
pub struct SparseMatrixELL<T> {
    /// Number of rows in the matrix
    pub n_rows: usize,

    /// Number of columns in the matrix
    pub n_cols: usize,

    /// Number of occupied slots
    pub num_entries: usize,

    /// Column index of each slot, or `INVALID_INDEX` (size: entries_per_row × stride)
    pub col_idx: StridedBuffer<usize>,

    /// Value of each slot (size: entries_per_row × stride)
    pub values: StridedBuffer<T>,
}

impl<T> SparseMatrixELL<T> {
    /// Sentinel column index marking an unused slot.
    ///
    /// Shared by every ELL matrix so buffers can be exchanged between them.
    pub const INVALID_INDEX: usize = INVALID_INDEX;
}

impl<T> SparseMatrixELL<T>
where
    T: Copy + Num,
{
    /// Creates a new ELL matrix from strided column and value buffers
    ///
    /// # Panics
    ///
    /// Panics if the buffers disagree in shape, the stride is shorter than
    /// `n_rows`, a column is out of range, or `num_entries` does not match
    /// the number of occupied slots.
    pub fn new(
        n_rows: usize,
        n_cols: usize,
        num_entries: usize,
        col_idx: StridedBuffer<usize>,
        values: StridedBuffer<T>,
    ) -> Self {
        match Self::try_new(n_rows, n_cols, num_entries, col_idx, values) {
            Ok(matrix) => matrix,
            Err(err) => panic!("{}", err),
        }
    }

    /// Creates a new ELL matrix, returning an error if the layout is inconsistent
    pub fn try_new(
        n_rows: usize,
        n_cols: usize,
        num_entries: usize,
        col_idx: StridedBuffer<usize>,
        values: StridedBuffer<T>,
    ) -> Result<Self> {
        if col_idx.stride() < n_rows {
            return Err(FormatError::BufferExtent {
                what: "ELL col_idx",
                expected_slots: col_idx.slots(),
                min_stride: n_rows,
                slots: col_idx.slots(),
                stride: col_idx.stride(),
            });
        }
        if values.slots() != col_idx.slots() || values.stride() != col_idx.stride() {
            return Err(FormatError::BufferExtent {
                what: "ELL values",
                expected_slots: col_idx.slots(),
                min_stride: col_idx.stride(),
                slots: values.slots(),
                stride: values.stride(),
            });
        }

        let mut occupied = 0;
        for k in 0..col_idx.slots() {
            for i in 0..n_rows {
                let col = col_idx.get(k, i);
                if col == INVALID_INDEX {
                    continue;
                }
                if col >= n_cols {
                    return Err(FormatError::ColumnOutOfBounds { col, n_cols });
                }
                occupied += 1;
            }
        }
        if occupied != num_entries {
            return Err(FormatError::EntryCount {
                declared: num_entries,
                actual: occupied,
            });
        }

        Ok(Self {
            n_rows,
            n_cols,
            num_entries,
            col_idx,
            values,
        })
    }

    /// Returns the number of occupied slots
    pub fn nnz(&self) -> usize {
        self.num_entries
    }

    /// Returns the per-row slot capacity
    pub fn entries_per_row(&self) -> usize {
        self.col_idx.slots()
    }

    /// Returns the padded length of each slot column
    pub fn stride(&self) -> usize {
        self.col_idx.stride()
    }

    /// Returns true if slot `k` of row `i` backs a real entry
    #[inline]
    pub fn is_occupied(&self, k: usize, i: usize) -> bool {
        self.col_idx.get(k, i) != INVALID_INDEX
    }

    /// Returns an iterator over the occupied slots of row i as (col_idx, value)
    pub fn row_iter(&self, i: usize) -> impl Iterator<Item = (usize, T)> + '_ {
        assert!(i < self.n_rows, "Row index out of bounds");

        (0..self.entries_per_row())
            .filter(move |&k| self.is_occupied(k, i))
            .map(move |k| (self.col_idx.get(k, i), self.values.get(k, i)))
    }
}

impl<T> MatrixShape for SparseMatrixELL<T> {
    fn format(&self) -> SparseFormat {
        SparseFormat::Ell
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

impl<T: fmt::Debug + Copy + Num> fmt::Debug for SparseMatrixELL<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrixELL {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        writeln!(f, "  nnz: {}", self.num_entries)?;
        writeln!(f, "  entries per row: {}", self.entries_per_row())?;
        writeln!(f, "  stride: {}", self.stride())?;

        let max_rows_to_print = 5.min(self.n_rows);
        for i in 0..max_rows_to_print {
            let row: Vec<_> = self.row_iter(i).collect();
            writeln!(f, "    row {}: {:?}", i, row)?;
        }
        if self.n_rows > max_rows_to_print {
            writeln!(f, "    ... ({} more rows)", self.n_rows - max_rows_to_print)?;
        }

        write!(f, "}}")
    }
}
