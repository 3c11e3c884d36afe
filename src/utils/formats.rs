//! Utilities for converting between our matrix formats and external libraries

use crate::error::Result;
use crate::matrix::{DenseMatrix, Orientation, SparseMatrixCOO, SparseMatrixCSR};
use ndarray::{Array2, ShapeBuilder};
use num_traits::Num;
use sprs::{CsMat, TriMat};

/// Converts our CSR matrix format to sprs CsMat format
///
/// sprs requires sorted, duplicate-free rows, so the matrix goes through
/// triplet form: columns are sorted and repeated columns summed.
pub fn to_sprs_csr<T>(matrix: &SparseMatrixCSR<T>) -> CsMat<T>
where
    T: Copy + Num + Default,
{
    to_sprs_triplets(&matrix.to_coo()).to_csr()
}

/// Converts sprs CsMat in CSR format to our SparseMatrixCSR format
pub fn from_sprs_csr<T>(matrix: CsMat<T>) -> SparseMatrixCSR<T>
where
    T: Copy + Num + Default,
{
    // Ensure matrix is in CSR format
    let matrix = if matrix.is_csr() {
        matrix
    } else {
        matrix.to_csr()
    };

    let shape = matrix.shape();
    let (indptr, indices, data) = matrix.into_raw_storage();

    SparseMatrixCSR::new(
        shape.0,
        shape.1,
        indptr,
        indices,
        data,
    )
}

/// Converts our COO matrix format to a sprs triplet matrix
///
/// Entry order and duplicates are preserved.
pub fn to_sprs_triplets<T>(matrix: &SparseMatrixCOO<T>) -> TriMat<T>
where
    T: Copy + Num,
{
    TriMat::from_triplets(
        (matrix.n_rows, matrix.n_cols),
        matrix.row_idx.clone(),
        matrix.col_idx.clone(),
        matrix.values.clone(),
    )
}

/// Converts a sprs triplet matrix to our COO matrix format
pub fn from_sprs_triplets<T>(matrix: &TriMat<T>) -> SparseMatrixCOO<T>
where
    T: Copy + Num,
{
    SparseMatrixCOO::new(
        matrix.rows(),
        matrix.cols(),
        matrix.row_inds().to_vec(),
        matrix.col_inds().to_vec(),
        matrix.data().to_vec(),
    )
}

/// Converts our dense matrix to an ndarray Array2
///
/// The array's memory order follows the matrix orientation.
pub fn to_ndarray<T>(matrix: &DenseMatrix<T>) -> Result<Array2<T>>
where
    T: Copy + Num,
{
    let shape = (matrix.n_rows, matrix.n_cols);

    let array = match matrix.orientation {
        Orientation::RowMajor => Array2::from_shape_vec(shape, matrix.values.clone())?,
        Orientation::ColumnMajor => Array2::from_shape_vec(shape.f(), matrix.values.clone())?,
    };

    Ok(array)
}

/// Converts an ndarray Array2 to our dense matrix
///
/// Fortran-ordered arrays become column-major matrices; anything else is
/// copied out in row-major order.
pub fn from_ndarray<T>(array: &Array2<T>) -> DenseMatrix<T>
where
    T: Copy + Num,
{
    let (n_rows, n_cols) = array.dim();

    let (orientation, values) = if !array.is_standard_layout() && array.t().is_standard_layout() {
        (Orientation::ColumnMajor, array.t().iter().copied().collect())
    } else {
        (Orientation::RowMajor, array.iter().copied().collect())
    };

    DenseMatrix::new(n_rows, n_cols, orientation, values)
}
