//! Needleman–Wunsch global alignment with a linear gap penalty.
//!
//! This crate computes an optimal end-to-end alignment of two byte
//! sequences, returning both the optimal score and one reconstructed
//! alignment. It runs in two strictly sequential phases:
//!
//! 1. [`DpTables::build`] fills an (n+1)×(m+1) score grid plus a per-cell
//!    [`Decision`] grid recording which recurrence branch won.
//! 2. [`reconstruct`] walks the decisions backward from (n, m) and emits
//!    two equal-length gapped sequences.
//!
//! Ties between candidates always resolve diagonal first, then vertical,
//! then horizontal, so the output alignment is deterministic.
//!
//! ## Quick start
//! ```
//! use global_align::{align, Scoring};
//!
//! let result = align(b"GATTACA", b"GCATGCU", &Scoring::new(1, -1, -1));
//! assert_eq!(result.score, 0);
//! assert_eq!(result.aligned_a.len(), result.aligned_b.len());
//! ```
//!
//! ## Feature flags
//! - `parallel`: `DpTables::build_parallel`, an anti-diagonal wave fill
//!   on rayon producing tables identical to the sequential build.
//! - `tracing`: trace spans around the table build and the traceback.

pub mod display;
pub mod scoring;
pub mod table;
pub mod traceback;

pub use crate::scoring::Scoring;
pub use crate::table::{Decision, DpTables, Grid};
pub use crate::traceback::{reconstruct, Alignment, GAP};

/// Align `a` against `b` under `scoring`, returning one optimal alignment.
///
/// Convenience wrapper running both phases; use [`DpTables::build`] directly
/// when the score grid itself is of interest (e.g. for rendering).
pub fn align(a: &[u8], b: &[u8], scoring: &Scoring) -> Alignment {
    let tables = DpTables::build(a, b, scoring);
    reconstruct(a, b, &tables)
}
