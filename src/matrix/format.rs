//! Storage format identifiers and the shape trait every layout implements

use std::fmt;

/// Matrix storage format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SparseFormat {
    /// Coordinate format: explicit (row, col, value) triplets.
    /// May hold duplicate coordinates, which are summed by consumers.
    Coo,

    /// Compressed Sparse Row: row pointers + column indices + values.
    /// The hub every other format converts through.
    Csr,

    /// Diagonal: dense strips along occupied diagonals
    Dia,

    /// ELLPACK: fixed number of slots per row, sentinel-padded
    Ell,

    /// Hybrid: ELL portion plus a COO overflow portion
    Hyb,

    /// Fully materialized grid
    Dense,
}

impl SparseFormat {
    /// Returns the format name as a string
    pub fn name(&self) -> &'static str {
        match self {
            SparseFormat::Coo => "COO",
            SparseFormat::Csr => "CSR",
            SparseFormat::Dia => "DIA",
            SparseFormat::Ell => "ELL",
            SparseFormat::Hyb => "HYB",
            SparseFormat::Dense => "Dense",
        }
    }

    /// Returns true if the format is backed by sentinel- or zero-padded strided buffers
    #[inline]
    pub fn is_padded(&self) -> bool {
        matches!(self, SparseFormat::Dia | SparseFormat::Ell | SparseFormat::Hyb)
    }
}

impl fmt::Display for SparseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Common shape queries over all layouts
pub trait MatrixShape {
    /// The storage format of this matrix
    fn format(&self) -> SparseFormat;

    /// Number of rows
    fn n_rows(&self) -> usize;

    /// Number of columns
    fn n_cols(&self) -> usize;

    /// Number of logically present entries
    ///
    /// For COO and CSR this counts stored entries, duplicates included.
    /// For dense matrices it counts cells that are not exactly zero.
    fn nnz(&self) -> usize;

    /// Returns the shape as (n_rows, n_cols)
    #[inline]
    fn shape(&self) -> (usize, usize) {
        (self.n_rows(), self.n_cols())
    }
}
