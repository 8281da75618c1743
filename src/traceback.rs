//! Backward reconstruction of one optimal alignment.
//!
//! The walk starts at cell (n, m) and follows the recorded decision of each
//! cell until it reaches the origin. Aligned symbols come out end-to-start
//! and are reversed once at the end. Every step decreases i + j by 1 or 2,
//! so the walk terminates after n + m minus the number of diagonal steps.

use crate::table::{Decision, DpTables};

/// Gap marker used in aligned output.
pub const GAP: u8 = b'-';

/// One optimal global alignment plus its score.
///
/// `score` equals the score table's final cell by construction. Stripping
/// [`GAP`] bytes from `aligned_a` reproduces the input A exactly, and the
/// same holds for `aligned_b`; both vectors always have equal length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    pub score: i64,
    pub aligned_a: Vec<u8>,
    pub aligned_b: Vec<u8>,
}

impl Alignment {
    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.aligned_a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aligned_a.is_empty()
    }
}

/// Walk the decision table backward from (n, m) and materialize the alignment.
///
/// Decisions at the walk's coordinates are expected to be consistent with the
/// position (a diagonal step needs i > 0 and j > 0, and so on). If a cell is
/// ever inconsistent the walk falls back to a fixed priority, diagonal first,
/// then vertical, then horizontal, so it still reaches the origin; a well
/// formed table never takes that branch.
pub fn reconstruct(a: &[u8], b: &[u8], tables: &DpTables) -> Alignment {
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("reconstruct", n = a.len(), m = b.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut i = a.len();
    let mut j = b.len();
    let mut rev_a = Vec::with_capacity(i + j);
    let mut rev_b = Vec::with_capacity(i + j);

    while i > 0 || j > 0 {
        match tables.decisions[(i, j)] {
            Decision::Diagonal if i > 0 && j > 0 => {
                rev_a.push(a[i - 1]);
                rev_b.push(b[j - 1]);
                i -= 1;
                j -= 1;
            }
            Decision::Vertical if i > 0 => {
                rev_a.push(a[i - 1]);
                rev_b.push(GAP);
                i -= 1;
            }
            Decision::Horizontal if j > 0 => {
                rev_a.push(GAP);
                rev_b.push(b[j - 1]);
                j -= 1;
            }
            _ => {
                // Inconsistent cell; keep moving toward the origin.
                if i > 0 && j > 0 {
                    rev_a.push(a[i - 1]);
                    rev_b.push(b[j - 1]);
                    i -= 1;
                    j -= 1;
                } else if i > 0 {
                    rev_a.push(a[i - 1]);
                    rev_b.push(GAP);
                    i -= 1;
                } else {
                    rev_a.push(GAP);
                    rev_b.push(b[j - 1]);
                    j -= 1;
                }
            }
        }
    }

    rev_a.reverse();
    rev_b.reverse();

    Alignment {
        score: tables.final_score(),
        aligned_a: rev_a,
        aligned_b: rev_b,
    }
}

#[cfg(test)]
mod tests {
    use super::{reconstruct, GAP};
    use crate::scoring::Scoring;
    use crate::table::DpTables;

    #[test]
    fn identical_sequences_align_without_gaps() {
        let s = b"HELLO";
        let tables = DpTables::build(s, s, &Scoring::new(1, -1, -2));
        let result = reconstruct(s, s, &tables);
        assert_eq!(result.score, s.len() as i64);
        assert_eq!(result.aligned_a, s);
        assert_eq!(result.aligned_b, s);
    }

    #[test]
    fn empty_against_nonempty_is_all_gaps() {
        let t = b"ACGT";
        let tables = DpTables::build(b"", t, &Scoring::new(1, -1, -2));
        let result = reconstruct(b"", t, &tables);
        assert_eq!(result.score, -8);
        assert_eq!(result.aligned_a, vec![GAP; 4]);
        assert_eq!(result.aligned_b, t);
    }

    #[test]
    fn both_empty_is_empty_alignment() {
        let tables = DpTables::build(b"", b"", &Scoring::default());
        let result = reconstruct(b"", b"", &tables);
        assert_eq!(result.score, 0);
        assert!(result.is_empty());
        assert_eq!(result.len(), 0);
    }

    #[test]
    fn score_matches_final_cell() {
        let s = b"GATTACA";
        let t = b"GCATGCU";
        let tables = DpTables::build(s, t, &Scoring::new(1, -1, -1));
        let result = reconstruct(s, t, &tables);
        assert_eq!(result.score, tables.final_score());
        assert_eq!(result.score, 0);
    }
}
