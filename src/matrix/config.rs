//! Configuration for format conversions

use crate::constants::DEFAULT_ALIGNMENT;
use crate::error::{FormatError, Result};
use crate::matrix::dense::Orientation;
use crate::matrix::format::SparseFormat;

/// Parameters for conversions that need more than the source matrix
///
/// Direct conversion methods take their parameters as arguments; this
/// struct carries them for [`AnyMatrix::convert`](crate::AnyMatrix::convert).
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionConfig {
    /// Row-padding boundary for DIA, ELL and HYB strides
    pub alignment: usize,

    /// Per-row slot capacity for ELL and HYB targets
    /// If None, converting to ELL or HYB fails; no capacity is guessed
    pub ell_entries_per_row: Option<usize>,

    /// Memory order for dense targets
    pub dense_orientation: Orientation,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            alignment: DEFAULT_ALIGNMENT,
            ell_entries_per_row: None,
            dense_orientation: Orientation::RowMajor,
        }
    }
}

impl ConversionConfig {
    /// Create a config with a fixed ELL/HYB row capacity
    pub fn for_entries_per_row(entries_per_row: usize) -> Self {
        Self {
            ell_entries_per_row: Some(entries_per_row),
            ..Self::default()
        }
    }

    pub fn with_alignment(mut self, alignment: usize) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_entries_per_row(mut self, entries_per_row: usize) -> Self {
        self.ell_entries_per_row = Some(entries_per_row);
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.dense_orientation = orientation;
        self
    }

    /// Returns the ELL row capacity, or an error naming the target that needed it
    pub fn entries_per_row(&self, target: SparseFormat) -> Result<usize> {
        self.ell_entries_per_row
            .ok_or(FormatError::MissingEntriesPerRow { target: target.name() })
    }
}
