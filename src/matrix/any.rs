//! Format-erased matrices and conversion dispatch

use std::borrow::Cow;

use log::trace;
use num_traits::Num;

use crate::error::Result;
use crate::matrix::config::ConversionConfig;
use crate::matrix::format::{MatrixShape, SparseFormat};
use crate::matrix::{
    DenseMatrix, SparseMatrixCOO, SparseMatrixCSR, SparseMatrixDIA, SparseMatrixELL,
    SparseMatrixHYB,
};

/// A matrix in any of the supported formats
#[derive(Debug, Clone, PartialEq)]
pub enum AnyMatrix<T: Copy + Num> {
    Coo(SparseMatrixCOO<T>),
    Csr(SparseMatrixCSR<T>),
    Dia(SparseMatrixDIA<T>),
    Ell(SparseMatrixELL<T>),
    Hyb(SparseMatrixHYB<T>),
    Dense(DenseMatrix<T>),
}

impl<T: Copy + Num> AnyMatrix<T> {
    fn shape_ref(&self) -> &dyn MatrixShape {
        match self {
            AnyMatrix::Coo(m) => m,
            AnyMatrix::Csr(m) => m,
            AnyMatrix::Dia(m) => m,
            AnyMatrix::Ell(m) => m,
            AnyMatrix::Hyb(m) => m,
            AnyMatrix::Dense(m) => m,
        }
    }

    /// Converts to CSR, the hub every other conversion goes through
    pub fn to_csr(&self) -> SparseMatrixCSR<T> {
        match self {
            AnyMatrix::Coo(m) => m.to_csr(),
            AnyMatrix::Csr(m) => m.clone(),
            AnyMatrix::Dia(m) => m.to_csr(),
            AnyMatrix::Ell(m) => m.to_csr(),
            AnyMatrix::Hyb(m) => m.to_csr(),
            AnyMatrix::Dense(m) => m.to_csr(),
        }
    }

    /// Converts this matrix to `target`
    ///
    /// Uses a direct routine when one exists (COO → Dense, Dense → COO, and
    /// everything out of CSR); otherwise converts to CSR first. Converting
    /// to the source format returns a copy, except that a dense matrix is
    /// re-laid out if the configured orientation differs.
    ///
    /// # Errors
    ///
    /// Fails if the target is ELL or HYB and `config.ell_entries_per_row` is
    /// unset, or if `config.alignment` is zero for a DIA, ELL or HYB target.
    pub fn convert(&self, target: SparseFormat, config: &ConversionConfig) -> Result<AnyMatrix<T>> {
        trace!("convert: {} -> {}", self.format(), target);

        match (self, target) {
            (AnyMatrix::Dense(m), SparseFormat::Dense) => {
                return Ok(AnyMatrix::Dense(m.to_orientation(config.dense_orientation)));
            }
            (AnyMatrix::Coo(m), SparseFormat::Dense) => {
                return Ok(AnyMatrix::Dense(m.to_dense(config.dense_orientation)));
            }
            (AnyMatrix::Dense(m), SparseFormat::Coo) => {
                return Ok(AnyMatrix::Coo(m.to_coo()));
            }
            (source, target) if source.format() == target => {
                return Ok(source.clone());
            }
            _ => {}
        }

        let csr = match self {
            AnyMatrix::Csr(m) => Cow::Borrowed(m),
            other => {
                trace!("convert: routing {} through CSR", other.format());
                Cow::Owned(other.to_csr())
            }
        };

        let result = match target {
            SparseFormat::Coo => AnyMatrix::Coo(csr.to_coo()),
            SparseFormat::Csr => AnyMatrix::Csr(csr.into_owned()),
            SparseFormat::Dia => AnyMatrix::Dia(csr.to_dia(config.alignment)?),
            SparseFormat::Ell => {
                let entries_per_row = config.entries_per_row(target)?;
                AnyMatrix::Ell(csr.to_ell(entries_per_row, config.alignment)?)
            }
            SparseFormat::Hyb => {
                let entries_per_row = config.entries_per_row(target)?;
                AnyMatrix::Hyb(csr.to_hyb(entries_per_row, config.alignment)?)
            }
            SparseFormat::Dense => AnyMatrix::Dense(csr.to_dense(config.dense_orientation)),
        };

        Ok(result)
    }
}

impl<T: Copy + Num> MatrixShape for AnyMatrix<T> {
    fn format(&self) -> SparseFormat {
        self.shape_ref().format()
    }

    fn n_rows(&self) -> usize {
        self.shape_ref().n_rows()
    }

    fn n_cols(&self) -> usize {
        self.shape_ref().n_cols()
    }

    fn nnz(&self) -> usize {
        self.shape_ref().nnz()
    }
}

macro_rules! impl_from_format {
    ($($variant:ident => $ty:ident),* $(,)?) => {
        $(
            impl<T: Copy + Num> From<$ty<T>> for AnyMatrix<T> {
                fn from(matrix: $ty<T>) -> Self {
                    AnyMatrix::$variant(matrix)
                }
            }
        )*
    };
}

impl_from_format! {
    Coo => SparseMatrixCOO,
    Csr => SparseMatrixCSR,
    Dia => SparseMatrixDIA,
    Ell => SparseMatrixELL,
    Hyb => SparseMatrixHYB,
    Dense => DenseMatrix,
}
