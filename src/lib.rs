//! # sparsefmt: sparse matrix format conversion
//!
//! Re-expresses the same matrix, the same set of (row, column, value)
//! entries, in different storage layouts without losing numeric content.
//!
//! ## Formats
//!
//! - **COO**: explicit triplets, any order, duplicates allowed
//! - **CSR**: row pointers into column/value arrays; the hub format
//! - **DIA**: one padded strip per occupied diagonal
//! - **ELL**: fixed slots per row, padded with a sentinel column
//! - **HYB**: ELL for the first K entries of each row, COO for the rest
//! - **Dense**: every cell, row- or column-major
//!
//! ## Conversions
//!
//! Direct routines exist for COO → CSR/Dense, CSR → everything,
//! DIA/ELL/HYB → CSR and Dense → COO/CSR. Every routine runs a sizing pass
//! and then fills buffers allocated once at their final size.
//!
//! ```
//! use sparsefmt::{SparseMatrixCOO, Orientation};
//!
//! let coo = SparseMatrixCOO::new(3, 3, vec![0, 1, 2], vec![0, 1, 2], vec![1.0, 2.0, 3.0]);
//! let csr = coo.to_csr();
//! assert_eq!(csr.row_ptr, vec![0, 1, 2, 3]);
//!
//! let dia = csr.to_dia(16).unwrap();
//! assert_eq!(dia.diag_offsets, vec![0]);
//!
//! let dense = dia.to_csr().to_dense(Orientation::RowMajor);
//! assert_eq!(dense[(2, 2)], 3.0);
//! ```
//!
//! Any pair of formats can be bridged through [`AnyMatrix::convert`]:
//!
//! ```
//! use sparsefmt::{AnyMatrix, ConversionConfig, SparseFormat, SparseMatrixCSR, MatrixShape};
//!
//! let csr = SparseMatrixCSR::<f64>::identity(4);
//! let config = ConversionConfig::for_entries_per_row(1);
//!
//! let hyb = AnyMatrix::from(csr).convert(SparseFormat::Hyb, &config).unwrap();
//! let dia = hyb.convert(SparseFormat::Dia, &config).unwrap();
//! assert_eq!(dia.nnz(), 4);
//! ```
//!
//! Conversions do not check index ranges. Matrices built with `new` or
//! `try_new` are validated up front; matrices assembled by hand from public
//! fields are trusted.

pub mod constants;
pub mod error;
pub mod matrix;
pub mod utils;

// Re-export primary components
pub use error::{FormatError, Result};
pub use matrix::{
    AnyMatrix, ConversionConfig, DenseMatrix, MatrixShape, Orientation, SparseFormat,
    SparseMatrixCOO, SparseMatrixCSR, SparseMatrixDIA, SparseMatrixELL, SparseMatrixHYB,
    StridedBuffer,
};
pub use utils::{
    from_ndarray, from_sprs_csr, from_sprs_triplets, to_ndarray, to_sprs_csr, to_sprs_triplets,
};

/// Version information for the sparsefmt library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
