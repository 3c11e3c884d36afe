//! End-to-end conversion scenarios and structural invariants

use std::collections::HashSet;

use sparsefmt::{
    AnyMatrix, ConversionConfig, DenseMatrix, MatrixShape, Orientation, SparseFormat,
    SparseMatrixCOO, SparseMatrixCSR, SparseMatrixDIA, SparseMatrixELL, StridedBuffer,
};

/// Sorted (col, value) pairs of every row
fn rows_sorted(csr: &SparseMatrixCSR<f64>) -> Vec<Vec<(usize, f64)>> {
    (0..csr.n_rows)
        .map(|i| {
            let mut row: Vec<_> = csr.row_iter(i).map(|(c, &v)| (c, v)).collect();
            row.sort_by_key(|&(c, _)| c);
            row
        })
        .collect()
}

fn assert_csr_invariants<T>(csr: &SparseMatrixCSR<T>) {
    assert_eq!(csr.row_ptr.len(), csr.n_rows + 1);
    assert_eq!(csr.row_ptr[0], 0);
    assert_eq!(csr.row_ptr[csr.n_rows], csr.values.len());
    assert_eq!(csr.col_idx.len(), csr.values.len());
    assert!(csr.row_ptr.windows(2).all(|w| w[0] <= w[1]));
}

/// A 6 x 5 matrix with an empty row and ragged row lengths [3, 0, 1, 4, 2, 1]
fn ragged() -> SparseMatrixCSR<f64> {
    SparseMatrixCSR::new(
        6, 5,
        vec![0, 3, 3, 4, 8, 10, 11],
        vec![4, 0, 2, 1, 0, 1, 2, 3, 3, 0, 4],
        vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0],
    )
}

#[test]
fn scenario_coo_diagonal_to_csr() {
    let coo = SparseMatrixCOO::new(3, 3, vec![0, 1, 2], vec![0, 1, 2], vec![1, 2, 3]);
    let csr = coo.to_csr();

    assert_eq!(csr.row_ptr, vec![0, 1, 2, 3]);
    assert_eq!(csr.col_idx, vec![0, 1, 2]);
    assert_eq!(csr.values, vec![1, 2, 3]);
}

#[test]
fn scenario_csr_to_dia_offsets() {
    let csr = SparseMatrixCSR::new(3, 3, vec![0, 2, 2, 3], vec![0, 2, 1], vec![5, 6, 7]);
    let dia = csr.to_dia(1).unwrap();

    // Offsets from (0,0) -> 0, (0,2) -> 2, (2,1) -> -1, reported in ascending order
    let offsets: HashSet<_> = dia.diag_offsets.iter().copied().collect();
    assert_eq!(offsets, HashSet::from([0, 2, -1]));
    assert_eq!(dia.diag_offsets, vec![-1, 0, 2]);
    assert_eq!(dia.stride(), 3);

    assert_eq!(dia.values.get(0, 2), 7);
    assert_eq!(dia.values.get(1, 0), 5);
    assert_eq!(dia.values.get(2, 0), 6);
}

#[test]
fn scenario_dense_to_csr() {
    let dense = DenseMatrix::from_rows(&[vec![0, 4], vec![0, 0]]);
    let csr = dense.to_csr();

    assert_eq!(csr.row_ptr, vec![0, 1, 1]);
    assert_eq!(csr.col_idx, vec![1]);
    assert_eq!(csr.values, vec![4]);
}

#[test]
fn scenario_csr_to_hyb_split() {
    // Row lengths [1, 3, 0]
    let csr = SparseMatrixCSR::new(
        3, 3,
        vec![0, 1, 4, 4],
        vec![1, 0, 1, 2],
        vec![1.0, 2.0, 3.0, 4.0],
    );
    let hyb = csr.to_hyb(2, 16).unwrap();

    let ell_per_row: Vec<_> = (0..3).map(|i| hyb.ell.row_iter(i).count()).collect();
    assert_eq!(ell_per_row, vec![1, 2, 0]);

    assert_eq!(hyb.coo.nnz(), 1);
    assert_eq!(hyb.coo.row_idx, vec![1]);
    assert_eq!(hyb.coo.col_idx, vec![2]);
    assert_eq!(hyb.coo.values, vec![4.0]);
    assert_eq!(hyb.ell.nnz() + hyb.coo.nnz(), csr.nnz());
}

#[test]
fn round_trips_reproduce_entries() {
    let csr = ragged();
    let expected = rows_sorted(&csr);
    let max_len = csr.max_row_len();

    let via_coo = csr.to_coo().to_csr();
    let via_dia = csr.to_dia(8).unwrap().to_csr();
    let via_ell = csr.to_ell(max_len, 4).unwrap().to_csr();
    let via_hyb = csr.to_hyb(2, 4).unwrap().to_csr();
    let via_dense = csr.to_dense(Orientation::ColumnMajor).to_csr();

    for (name, result) in [
        ("coo", via_coo),
        ("dia", via_dia),
        ("ell", via_ell),
        ("hyb", via_hyb),
        ("dense", via_dense),
    ] {
        assert_csr_invariants(&result);
        assert_eq!(result.row_ptr, csr.row_ptr, "{}", name);
        assert_eq!(rows_sorted(&result), expected, "{}", name);
    }
}

#[test]
fn order_preserving_round_trips() {
    let csr = ragged();

    // COO, ELL and HYB keep the within-row order of the source exactly
    assert_eq!(csr.to_coo().to_csr(), csr);
    assert_eq!(csr.to_ell(csr.max_row_len(), 1).unwrap().to_csr(), csr);
    assert_eq!(csr.to_hyb(1, 1).unwrap().to_csr(), csr);
    assert_eq!(csr.to_hyb(0, 1).unwrap().to_csr(), csr);
}

#[test]
fn ell_truncation_drops_row_tails() {
    let csr = ragged();
    let k = 2;
    let ell = csr.to_ell(k, 4).unwrap();

    let expected_dropped: usize = (0..csr.n_rows).map(|i| csr.row_len(i).saturating_sub(k)).sum();
    assert_eq!(csr.nnz() - ell.nnz(), expected_dropped);

    let back = ell.to_csr();
    for i in 0..csr.n_rows {
        let kept: Vec<_> = back.row_iter(i).collect();
        let head: Vec<_> = csr.row_iter(i).take(k).collect();
        assert_eq!(kept, head);
    }
}

#[test]
fn ell_sentinel_marks_exactly_unused_slots() {
    let csr = ragged();
    let ell = csr.to_ell(3, 8).unwrap();
    let invalid = SparseMatrixELL::<f64>::INVALID_INDEX;

    for i in 0..csr.n_rows {
        for k in 0..ell.entries_per_row() {
            let used = k < csr.row_len(i);
            assert_eq!(ell.col_idx.get(k, i) != invalid, used, "row {} slot {}", i, k);
            if !used {
                assert_eq!(ell.values.get(k, i), 0.0);
            }
        }
        // Padding rows past n_rows are unused too
        for pad in csr.n_rows..ell.stride() {
            assert_eq!(ell.col_idx.get(0, pad), invalid);
        }
    }
}

#[test]
fn hyb_partition_is_disjoint_cover() {
    let csr = ragged();

    for k in 0..=csr.max_row_len() + 1 {
        let hyb = csr.to_hyb(k, 4).unwrap();

        assert_eq!(hyb.ell.nnz() + hyb.coo.nnz(), csr.nnz());
        assert!(hyb.coo_is_row_ordered());
        for i in 0..csr.n_rows {
            assert_eq!(hyb.ell.row_iter(i).count(), csr.row_len(i).min(k));
        }
    }
}

#[test]
fn dia_skips_explicit_zeros_and_out_of_range_cells() {
    let dia = SparseMatrixDIA::new(
        3,
        2,
        3,
        vec![1, -1],
        StridedBuffer::from_slice(2, 4, &[8.0, 0.0, 9.0, 9.0, 9.0, 3.0, 0.0, 9.0]),
    );
    let csr = dia.to_csr();

    assert_csr_invariants(&csr);
    // (0,1) = 8; (1,2) and (2,3) are out of range; (1,0) = 3; (2,1) explicit zero
    assert_eq!(csr.row_ptr, vec![0, 1, 2, 2]);
    assert_eq!(csr.col_idx, vec![1, 0]);
    assert_eq!(csr.values, vec![8.0, 3.0]);
}

#[test]
fn dia_duplicates_overwrite_while_dense_sums() {
    let coo = SparseMatrixCOO::new(2, 2, vec![1, 1], vec![1, 1], vec![2.0, 5.0]);
    let csr = coo.to_csr();

    assert_eq!(csr.to_dense(Orientation::RowMajor)[(1, 1)], 7.0);
    assert_eq!(coo.to_dense(Orientation::RowMajor)[(1, 1)], 7.0);
    assert_eq!(csr.to_dia(1).unwrap().values.get(0, 1), 5.0);
}

#[test]
fn dispatch_counts_are_conserved() {
    let config = ConversionConfig::for_entries_per_row(2).with_alignment(8);
    let source = AnyMatrix::from(ragged());

    for target in [
        SparseFormat::Coo,
        SparseFormat::Csr,
        SparseFormat::Dia,
        SparseFormat::Hyb,
        SparseFormat::Dense,
    ] {
        let converted = source.convert(target, &config).unwrap();
        assert_eq!(converted.nnz(), 11, "{}", target);
        assert_eq!(converted.shape(), (6, 5));
    }
}

#[test]
fn empty_matrices() {
    let csr = SparseMatrixCSR::<f64>::zeros(0, 0);

    assert_eq!(csr.to_coo().nnz(), 0);
    assert_eq!(csr.to_dia(16).unwrap().num_diagonals(), 0);
    assert_eq!(csr.to_hyb(4, 16).unwrap().nnz(), 0);
    assert_eq!(csr.to_dense(Orientation::RowMajor).values.len(), 0);

    let csr = SparseMatrixCSR::<f64>::zeros(4, 3);
    let dia = csr.to_dia(16).unwrap();
    assert_eq!(dia.stride(), 16);
    assert_eq!(dia.to_csr(), csr);
    assert_eq!(csr.to_ell(2, 16).unwrap().to_csr(), csr);
}
