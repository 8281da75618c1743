//! Scoring parameters for the linear-gap model.

/// Match, mismatch, and gap scores.
///
/// All three values are added into DP cells exactly as given; nothing is
/// negated internally, so a penalty is expressed as a negative number.
/// No constraints are enforced: a gap score above the match score is
/// accepted and simply makes gap-heavy alignments optimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoring {
    /// Added when the two symbols are equal.
    pub match_score: i64,
    /// Added when the two symbols differ; typically <= 0.
    pub mismatch_penalty: i64,
    /// Added per gap symbol; typically < 0.
    pub gap_penalty: i64,
}

impl Scoring {
    pub fn new(match_score: i64, mismatch_penalty: i64, gap_penalty: i64) -> Self {
        Self {
            match_score,
            mismatch_penalty,
            gap_penalty,
        }
    }

    /// Score of aligning symbol `a` against symbol `b`.
    #[inline]
    pub fn substitution(&self, a: u8, b: u8) -> i64 {
        if a == b {
            self.match_score
        } else {
            self.mismatch_penalty
        }
    }
}

impl Default for Scoring {
    /// The classic +1 / -1 / -2 parameterisation.
    fn default() -> Self {
        Self::new(1, -1, -2)
    }
}
