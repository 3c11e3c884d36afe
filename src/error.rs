//! Error types for sparsefmt

use thiserror::Error;

/// Result type alias using sparsefmt's error
pub type Result<T> = std::result::Result<T, FormatError>;

/// Errors raised by matrix constructors, conversion parameters and bridges.
///
/// Conversions never validate index ranges of their input; out-of-range
/// indices in a matrix built without `try_new` are the caller's problem.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Row pointer array has the wrong length
    #[error("row_ptr.len() must be n_rows + 1 (got {len}, n_rows = {n_rows})")]
    RowPtrLength {
        /// Actual length
        len: usize,
        /// Number of rows
        n_rows: usize,
    },

    /// Parallel arrays disagree in length
    #[error("{what}: lengths must match (got {left} and {right})")]
    LengthMismatch {
        /// Which arrays disagree
        what: &'static str,
        /// Length of the first array
        left: usize,
        /// Length of the second array
        right: usize,
    },

    /// Row pointers do not start at zero or end at nnz
    #[error("row_ptr must run from 0 to nnz (got {first}..{last}, nnz = {nnz})")]
    RowPtrBoundary {
        /// First row pointer
        first: usize,
        /// Last row pointer
        last: usize,
        /// Number of stored entries
        nnz: usize,
    },

    /// Row pointers decrease somewhere
    #[error("row_ptr must be nondecreasing (row {row} spans {start}..{end})")]
    RowPtrNotMonotonic {
        /// Row whose extent is negative
        row: usize,
        /// Start pointer of that row
        start: usize,
        /// End pointer of that row
        end: usize,
    },

    /// A column index is outside the matrix
    #[error("Column index {col} out of bounds (n_cols = {n_cols})")]
    ColumnOutOfBounds {
        /// Offending column
        col: usize,
        /// Number of columns
        n_cols: usize,
    },

    /// A row index is outside the matrix
    #[error("Row index {row} out of bounds (n_rows = {n_rows})")]
    RowOutOfBounds {
        /// Offending row
        row: usize,
        /// Number of rows
        n_rows: usize,
    },

    /// A strided buffer does not match the extents it must cover
    #[error("{what}: expected {expected_slots} slots of stride >= {min_stride}, got {slots} slots of stride {stride}")]
    BufferExtent {
        /// Which buffer is wrong
        what: &'static str,
        /// Required slot count
        expected_slots: usize,
        /// Minimum stride (the row count)
        min_stride: usize,
        /// Actual slot count
        slots: usize,
        /// Actual stride
        stride: usize,
    },

    /// A DIA diagonal offset appears twice
    #[error("Diagonal offset {offset} appears more than once")]
    DuplicateDiagonal {
        /// Repeated offset
        offset: isize,
    },

    /// Stored entry count disagrees with the structure
    #[error("num_entries is {declared} but the structure holds {actual} entries")]
    EntryCount {
        /// Count passed by the caller
        declared: usize,
        /// Count found in the structure
        actual: usize,
    },

    /// Alignment of zero would make the stride undefined
    #[error("Alignment must be at least 1")]
    InvalidAlignment,

    /// ELL or HYB target requested without a per-row capacity
    #[error("Converting to {target} requires ell_entries_per_row to be set")]
    MissingEntriesPerRow {
        /// Target format name
        target: &'static str,
    },

    /// Shape error from the ndarray bridge
    #[error("ndarray shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}
