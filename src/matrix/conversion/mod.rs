//! Conversion routines between matrix formats
//!
//! Each submodule adds `to_*` methods to one source format. Every routine
//! sizes its output in a counting pass and then fills buffers allocated once
//! at their final extents. Sources are never modified.

mod coo;
mod csr;
mod dense;
mod dia;
mod ell;
mod hyb;
