// Matrix data structures and format conversions

pub mod any;
pub mod config;
pub mod conversion;
pub mod coo;
pub mod csr;
pub mod dense;
pub mod dia;
pub mod ell;
pub mod format;
pub mod hyb;
pub mod strided;

pub use any::AnyMatrix;
pub use config::ConversionConfig;
pub use coo::SparseMatrixCOO;
pub use csr::SparseMatrixCSR;
pub use dense::{DenseMatrix, Orientation};
pub use dia::SparseMatrixDIA;
pub use ell::SparseMatrixELL;
pub use format::{MatrixShape, SparseFormat};
pub use hyb::SparseMatrixHYB;
pub use strided::StridedBuffer;
