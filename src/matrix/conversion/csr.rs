//! Conversions out of CSR, the hub format

use log::debug;
use num_traits::Num;

use crate::error::{FormatError, Result};
use crate::matrix::strided::StridedBuffer;
use crate::matrix::{
    DenseMatrix, Orientation, SparseMatrixCOO, SparseMatrixCSR, SparseMatrixDIA, SparseMatrixELL,
    SparseMatrixHYB,
};
use crate::utils::aligned_stride;

impl<T: Copy + Num> SparseMatrixCSR<T> {
    /// Converts this CSR matrix to COO format
    ///
    /// Entries come out in CSR order, so the result is grouped by row.
    pub fn to_coo(&self) -> SparseMatrixCOO<T> {
        let mut row_idx = vec![0; self.nnz()];

        for i in 0..self.n_rows {
            row_idx[self.row_ptr[i]..self.row_ptr[i + 1]].fill(i);
        }

        SparseMatrixCOO {
            n_rows: self.n_rows,
            n_cols: self.n_cols,
            row_idx,
            col_idx: self.col_idx.clone(),
            values: self.values.clone(),
        }
    }

    /// Converts this CSR matrix to a dense matrix
    ///
    /// Repeated columns within a row are summed.
    pub fn to_dense(&self, orientation: Orientation) -> DenseMatrix<T> {
        let mut dense = DenseMatrix::zeros(self.n_rows, self.n_cols, orientation);

        for i in 0..self.n_rows {
            for (j, &val) in self.row_iter(i) {
                let cell = &mut dense[(i, j)];
                *cell = *cell + val;
            }
        }

        dense
    }

    /// Converts this CSR matrix to DIA format
    ///
    /// One diagonal is stored for every offset `col - row` that holds at
    /// least one entry, in ascending offset order. Each diagonal occupies
    /// `stride` slots, where `stride` is `n_rows` rounded up to `alignment`.
    ///
    /// If a row repeats a column, the later value overwrites the earlier one
    /// instead of being summed.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidAlignment`] if `alignment` is zero.
    pub fn to_dia(&self, alignment: usize) -> Result<SparseMatrixDIA<T>> {
        if alignment == 0 {
            return Err(FormatError::InvalidAlignment);
        }

        // Offsets run from -(n_rows - 1) to n_cols - 1; shifting by n_rows
        // makes them valid indices into a flat map.
        let map_len = self.n_rows + self.n_cols;
        let mut diag_map: Vec<Option<usize>> = vec![None; map_len];
        let mut num_diagonals = 0;

        for i in 0..self.n_rows {
            for jj in self.row_ptr[i]..self.row_ptr[i + 1] {
                let map_index = (self.n_rows - i) + self.col_idx[jj];
                if diag_map[map_index].is_none() {
                    diag_map[map_index] = Some(0);
                    num_diagonals += 1;
                }
            }
        }

        let stride = aligned_stride(self.n_rows, alignment);

        debug!(
            "csr_to_dia: {} x {}, {} entries, {} diagonals, stride {}",
            self.n_rows, self.n_cols, self.nnz(), num_diagonals, stride
        );

        // Number the occupied diagonals in ascending offset order
        let mut diag_offsets = Vec::with_capacity(num_diagonals);

        for (n, slot) in diag_map.iter_mut().enumerate() {
            if let Some(diag) = slot.as_mut() {
                *diag = diag_offsets.len();
                diag_offsets.push(n as isize - self.n_rows as isize);
            }
        }

        let mut values = StridedBuffer::filled(num_diagonals, stride, T::zero());

        for i in 0..self.n_rows {
            for jj in self.row_ptr[i]..self.row_ptr[i + 1] {
                let map_index = (self.n_rows - i) + self.col_idx[jj];
                if let Some(diag) = diag_map[map_index] {
                    values.set(diag, i, self.values[jj]);
                }
            }
        }

        Ok(SparseMatrixDIA {
            n_rows: self.n_rows,
            n_cols: self.n_cols,
            num_entries: self.nnz(),
            diag_offsets,
            values,
        })
    }

    /// Converts this CSR matrix to HYB format
    ///
    /// The first `entries_per_row` entries of each row, in CSR order, go to
    /// the ELL portion. The rest of the row goes to the COO portion, which
    /// therefore stays grouped by row in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidAlignment`] if `alignment` is zero.
    pub fn to_hyb(&self, entries_per_row: usize, alignment: usize) -> Result<SparseMatrixHYB<T>> {
        if alignment == 0 {
            return Err(FormatError::InvalidAlignment);
        }

        let stride = aligned_stride(self.n_rows, alignment);

        // Compute number of nonzeros in the ELL and COO portions
        let num_ell_entries: usize = (0..self.n_rows)
            .map(|i| entries_per_row.min(self.row_len(i)))
            .sum();
        let num_coo_entries = self.nnz() - num_ell_entries;

        debug!(
            "csr_to_hyb: {} x {}, {} entries per row, stride {}, {} ELL + {} COO entries",
            self.n_rows, self.n_cols, entries_per_row, stride, num_ell_entries, num_coo_entries
        );

        // Pad the ELL portion with sentinels and zeros
        let mut ell_cols = StridedBuffer::filled(entries_per_row, stride, SparseMatrixELL::<T>::INVALID_INDEX);
        let mut ell_vals = StridedBuffer::filled(entries_per_row, stride, T::zero());

        let mut coo_rows = vec![0; num_coo_entries];
        let mut coo_cols = vec![0; num_coo_entries];
        let mut coo_vals = vec![T::zero(); num_coo_entries];
        let mut coo_nnz = 0;

        for i in 0..self.n_rows {
            let row_start = self.row_ptr[i];
            let row_end = self.row_ptr[i + 1];
            let split = row_start + entries_per_row.min(row_end - row_start);

            // Copy up to entries_per_row values of row i into the ELL
            for (n, jj) in (row_start..split).enumerate() {
                ell_cols.set(n, i, self.col_idx[jj]);
                ell_vals.set(n, i, self.values[jj]);
            }

            // Copy any remaining values of row i into the COO
            for jj in split..row_end {
                coo_rows[coo_nnz] = i;
                coo_cols[coo_nnz] = self.col_idx[jj];
                coo_vals[coo_nnz] = self.values[jj];
                coo_nnz += 1;
            }
        }

        Ok(SparseMatrixHYB {
            n_rows: self.n_rows,
            n_cols: self.n_cols,
            ell: SparseMatrixELL {
                n_rows: self.n_rows,
                n_cols: self.n_cols,
                num_entries: num_ell_entries,
                col_idx: ell_cols,
                values: ell_vals,
            },
            coo: SparseMatrixCOO {
                n_rows: self.n_rows,
                n_cols: self.n_cols,
                row_idx: coo_rows,
                col_idx: coo_cols,
                values: coo_vals,
            },
        })
    }

    /// Converts this CSR matrix to ELL format
    ///
    /// Keeps the first `entries_per_row` entries of each row. Entries past
    /// that are dropped, so the conversion is lossless only when
    /// `entries_per_row >= self.max_row_len()`.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidAlignment`] if `alignment` is zero.
    pub fn to_ell(&self, entries_per_row: usize, alignment: usize) -> Result<SparseMatrixELL<T>> {
        let hyb = self.to_hyb(entries_per_row, alignment)?;

        if hyb.coo.nnz() > 0 {
            debug!("csr_to_ell: dropping {} overflow entries", hyb.coo.nnz());
        }

        Ok(hyb.ell)
    }
}
