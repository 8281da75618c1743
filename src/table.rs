//! Score and decision tables for the forward DP pass.
//!
//! `DpTables::build` fills an (n+1)×(m+1) score grid in row-major order
//! together with a parallel grid recording which recurrence branch won each
//! cell. Both grids are owned by a single alignment call; the traceback in
//! [`crate::traceback`] reads them and nothing mutates them afterwards.

use crate::scoring::Scoring;
use std::ops::{Index, IndexMut};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Which recurrence branch produced a cell's optimal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Sentinel for cell (0, 0); no predecessor.
    Origin,
    /// Consume one symbol of each sequence (match or mismatch).
    Diagonal,
    /// Consume a symbol of A against a gap in B.
    Vertical,
    /// Consume a symbol of B against a gap in A.
    Horizontal,
}

/// Dense 2-D grid stored as a flat row-major buffer.
#[derive(Debug, Clone)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Allocate a `rows` × `cols` grid with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![value; rows * cols],
        }
    }
}

impl<T> Grid<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Flat row-major view of the cells.
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    #[inline]
    fn offset(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.rows && j < self.cols);
        i * self.cols + j
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.cells[self.offset(i, j)]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        let idx = self.offset(i, j);
        &mut self.cells[idx]
    }
}

/// Fully populated score and decision tables for one alignment call.
///
/// Cell (i, j) of `scores` holds the optimal score of the length-i prefix of
/// A against the length-j prefix of B; `decisions` records the branch that
/// achieved it.
#[derive(Debug, Clone)]
pub struct DpTables {
    pub scores: Grid<i64>,
    pub decisions: Grid<Decision>,
}

impl DpTables {
    /// Build both tables for `a` against `b` under `scoring`.
    ///
    /// Row 0 and column 0 are gap-penalty prefix sums; every interior cell is
    /// the maximum of the diagonal, vertical, and horizontal candidates. Ties
    /// resolve toward the earlier branch in that order: the diagonal candidate
    /// is assumed best, then vertical replaces it only if strictly greater,
    /// then horizontal only if strictly greater still.
    ///
    /// Scores are `i64`; the fill cannot overflow as long as
    /// `(n + m) * max(|match|, |mismatch|, |gap|)` stays below `i64::MAX`,
    /// which holds for any sequence that fits in memory and sane parameters.
    pub fn build(a: &[u8], b: &[u8], scoring: &Scoring) -> Self {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("build_tables", n = a.len(), m = b.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let n = a.len();
        let m = b.len();
        let (mut scores, mut decisions) = Self::init_boundary(n, m, scoring);

        for i in 1..=n {
            for j in 1..=m {
                let (score, decision) = cell_optimum(&scores, a, b, scoring, i, j);
                scores[(i, j)] = score;
                decisions[(i, j)] = decision;
            }
        }

        Self { scores, decisions }
    }

    /// Build both tables filling anti-diagonal waves in parallel.
    ///
    /// Cells with equal i + j only depend on the two previous waves, so each
    /// wave's candidates can be evaluated concurrently. Produces tables
    /// identical to [`DpTables::build`].
    #[cfg(feature = "parallel")]
    pub fn build_parallel(a: &[u8], b: &[u8], scoring: &Scoring) -> Self {
        let n = a.len();
        let m = b.len();
        let (mut scores, mut decisions) = Self::init_boundary(n, m, scoring);

        for wave in 2..=n + m {
            let lo = wave.saturating_sub(m).max(1);
            let hi = n.min(wave - 1);
            if lo > hi {
                continue;
            }
            let filled: Vec<(usize, i64, Decision)> = (lo..=hi)
                .into_par_iter()
                .map(|i| {
                    let j = wave - i;
                    let (score, decision) = cell_optimum(&scores, a, b, scoring, i, j);
                    (i, score, decision)
                })
                .collect();
            for (i, score, decision) in filled {
                let j = wave - i;
                scores[(i, j)] = score;
                decisions[(i, j)] = decision;
            }
        }

        Self { scores, decisions }
    }

    fn init_boundary(n: usize, m: usize, scoring: &Scoring) -> (Grid<i64>, Grid<Decision>) {
        let mut scores = Grid::filled(n + 1, m + 1, 0i64);
        let mut decisions = Grid::filled(n + 1, m + 1, Decision::Origin);

        for i in 1..=n {
            scores[(i, 0)] = scores[(i - 1, 0)] + scoring.gap_penalty;
            decisions[(i, 0)] = Decision::Vertical;
        }
        for j in 1..=m {
            scores[(0, j)] = scores[(0, j - 1)] + scoring.gap_penalty;
            decisions[(0, j)] = Decision::Horizontal;
        }

        (scores, decisions)
    }

    /// The optimal global alignment score, i.e. cell (n, m).
    pub fn final_score(&self) -> i64 {
        self.scores[(self.scores.rows() - 1, self.scores.cols() - 1)]
    }
}

/// Evaluate the recurrence at interior cell (i, j).
#[inline]
fn cell_optimum(
    scores: &Grid<i64>,
    a: &[u8],
    b: &[u8],
    scoring: &Scoring,
    i: usize,
    j: usize,
) -> (i64, Decision) {
    let diagonal = scores[(i - 1, j - 1)] + scoring.substitution(a[i - 1], b[j - 1]);
    let vertical = scores[(i - 1, j)] + scoring.gap_penalty;
    let horizontal = scores[(i, j - 1)] + scoring.gap_penalty;

    let mut best = diagonal;
    let mut decision = Decision::Diagonal;
    if vertical > best {
        best = vertical;
        decision = Decision::Vertical;
    }
    if horizontal > best {
        best = horizontal;
        decision = Decision::Horizontal;
    }
    (best, decision)
}
