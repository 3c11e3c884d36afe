//! Integration tests for format conversions with external libraries

use ndarray::{array, Array2, ShapeBuilder};
use sparsefmt::utils::{from_ndarray, from_sprs_csr, from_sprs_triplets, to_ndarray, to_sprs_csr, to_sprs_triplets};
use sparsefmt::{Orientation, SparseMatrixCSR};

/// Creates a test matrix with a specific pattern
fn create_test_matrix_csr() -> SparseMatrixCSR<f64> {
    // Create a 5x5 matrix with a specific pattern:
    // [ 1.0  0.0  2.0  0.0  0.0 ]
    // [ 0.0  3.0  0.0  0.0  4.0 ]
    // [ 0.0  0.0  5.0  0.0  0.0 ]
    // [ 6.0  0.0  0.0  7.0  0.0 ]
    // [ 0.0  0.0  8.0  0.0  9.0 ]

    SparseMatrixCSR::new(
        5, 5,
        vec![0, 2, 4, 5, 7, 9],
        vec![0, 2, 1, 4, 2, 0, 3, 2, 4],
        vec![1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0],
    )
}

/// Creates a tridiagonal matrix in CSR format
fn create_tridiagonal_csr(n: usize) -> SparseMatrixCSR<f64> {
    let mut row_ptr = Vec::with_capacity(n + 1);
    let mut col_idx = Vec::new();
    let mut values = Vec::new();

    row_ptr.push(0);

    for i in 0..n {
        // Lower diagonal
        if i > 0 {
            col_idx.push(i - 1);
            values.push(1.0f64);
        }

        // Diagonal
        col_idx.push(i);
        values.push(2.0f64);

        // Upper diagonal
        if i < n - 1 {
            col_idx.push(i + 1);
            values.push(1.0f64);
        }

        row_ptr.push(col_idx.len());
    }

    SparseMatrixCSR::new(n, n, row_ptr, col_idx, values)
}

#[test]
fn test_csr_to_sprs_conversion() {
    let csr = create_test_matrix_csr();

    // Convert to sprs format
    let sprs_mat = to_sprs_csr(&csr);

    // Verify dimensions and nnz
    assert_eq!(sprs_mat.rows(), csr.n_rows);
    assert_eq!(sprs_mat.cols(), csr.n_cols);
    assert_eq!(sprs_mat.nnz(), csr.nnz());

    // Verify it's in CSR format
    assert!(sprs_mat.is_csr());

    // Verify values by checking a few specific elements
    assert_eq!(sprs_mat.get(0, 0), Some(&1.0));
    assert_eq!(sprs_mat.get(0, 2), Some(&2.0));
    assert_eq!(sprs_mat.get(1, 1), Some(&3.0));
    assert_eq!(sprs_mat.get(2, 2), Some(&5.0));
    assert_eq!(sprs_mat.get(3, 3), Some(&7.0));
    assert_eq!(sprs_mat.get(4, 4), Some(&9.0));

    // Check that zeros are really zeros
    assert_eq!(sprs_mat.get(0, 1), None);
    assert_eq!(sprs_mat.get(1, 0), None);
    assert_eq!(sprs_mat.get(2, 3), None);
}

#[test]
fn test_sprs_to_csr_conversion() {
    // Create a sprs matrix directly
    let mut trip = sprs::TriMat::new((4, 4));
    trip.add_triplet(0, 0, 1.0);
    trip.add_triplet(0, 2, 2.0);
    trip.add_triplet(1, 1, 3.0);
    trip.add_triplet(2, 0, 4.0);
    trip.add_triplet(3, 3, 5.0);

    // Triplets map straight onto COO
    let coo = from_sprs_triplets(&trip);
    assert_eq!(coo.nnz(), 5);
    assert_eq!(coo.row_idx, vec![0, 0, 1, 2, 3]);

    let csr = from_sprs_csr(trip.to_csr());

    // Verify dimensions and nnz
    assert_eq!(csr.n_rows, 4);
    assert_eq!(csr.n_cols, 4);
    assert_eq!(csr, coo.to_csr());

    // Verify values through a dense representation
    let dense = csr.to_dense(Orientation::RowMajor);
    assert_eq!(dense[(0, 0)], 1.0);
    assert_eq!(dense[(0, 2)], 2.0);
    assert_eq!(dense[(1, 1)], 3.0);
    assert_eq!(dense[(2, 0)], 4.0);
    assert_eq!(dense[(3, 3)], 5.0);
}

#[test]
fn test_duplicate_triplets_summed_by_sprs_and_dense() {
    let coo = sparsefmt::SparseMatrixCOO::new(2, 2, vec![0, 0, 1], vec![1, 1, 0], vec![1.0, 2.0, 5.0]);

    let sprs_mat: sprs::CsMat<f64> = to_sprs_triplets(&coo).to_csr();
    let dense = coo.to_dense(Orientation::RowMajor);

    assert_eq!(sprs_mat.get(0, 1), Some(&3.0));
    assert_eq!(dense[(0, 1)], 3.0);
}

#[test]
fn test_banded_matrix_through_dia() {
    // Create a large banded matrix (tridiagonal)
    let size = 1000;
    let a = create_tridiagonal_csr(size);

    assert_eq!(a.nnz(), 3 * size - 2);

    let dia = a.to_dia(16).unwrap();
    assert_eq!(dia.diag_offsets, vec![-1, 0, 1]);
    assert_eq!(dia.stride(), 1008);

    // Round trip through DIA and then sprs
    let sprs_a = to_sprs_csr(&dia.to_csr());

    assert_eq!(sprs_a.rows(), size);
    assert_eq!(sprs_a.cols(), size);
    assert_eq!(sprs_a.nnz(), 3 * size - 2);

    // Check specific values
    assert_eq!(sprs_a.get(0, 0), Some(&2.0));
    assert_eq!(sprs_a.get(0, 1), Some(&1.0));
    assert_eq!(sprs_a.get(size / 2, size / 2 - 1), Some(&1.0));
    assert_eq!(sprs_a.get(size / 2, size / 2), Some(&2.0));
    assert_eq!(sprs_a.get(size / 2, size / 2 + 1), Some(&1.0));
    assert_eq!(sprs_a.get(size - 1, size - 2), Some(&1.0));
    assert_eq!(sprs_a.get(size - 1, size - 1), Some(&2.0));

    // Convert back
    let roundtrip = from_sprs_csr(sprs_a);
    assert_eq!(roundtrip, a);
}

#[test]
fn test_ndarray_bridge() {
    let csr = create_test_matrix_csr();

    let array = to_ndarray(&csr.to_dense(Orientation::ColumnMajor)).unwrap();
    assert_eq!(array[[3, 0]], 6.0);
    assert_eq!(array[[4, 2]], 8.0);
    assert_eq!(array[[0, 1]], 0.0);

    let dense = from_ndarray(&array);
    assert_eq!(dense.orientation, Orientation::ColumnMajor);
    assert_eq!(dense.to_csr(), csr);
}

#[test]
fn test_from_ndarray_layouts() {
    let c_order = array![[0, 4], [0, 0]];
    let dense = from_ndarray(&c_order);
    assert_eq!(dense.orientation, Orientation::RowMajor);

    let csr = dense.to_csr();
    assert_eq!(csr.row_ptr, vec![0, 1, 1]);
    assert_eq!(csr.col_idx, vec![1]);
    assert_eq!(csr.values, vec![4]);

    let f_order = Array2::from_shape_vec((2, 3).f(), vec![1, 0, 0, 3, 2, 0]).unwrap();
    let dense = from_ndarray(&f_order);
    assert_eq!(dense.orientation, Orientation::ColumnMajor);
    assert_eq!(dense.values, vec![1, 0, 0, 3, 2, 0]);
    assert_eq!(dense.get(0, 2), 2);
}
