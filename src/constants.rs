//! Centralized constants for the sparse format conversion engine
//!
//! All new constants should be added here rather than scattered throughout the code.

// ============================================================================
// LAYOUT CONSTANTS
// ============================================================================

/// Default row-padding boundary for DIA and ELL strides
pub const DEFAULT_ALIGNMENT: usize = 16;

/// Byte alignment of the backing storage of strided DIA/ELL buffers
pub const BUFFER_ALIGN_BYTES: usize = 64;

// ============================================================================
// SENTINELS
// ============================================================================

/// Column index marking an unused ELL slot.
///
/// Never a valid column index, since no matrix can have `usize::MAX + 1` columns.
pub const INVALID_INDEX: usize = usize::MAX;
