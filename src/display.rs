//! Human-readable rendering of tables and alignments.
//!
//! Presentation helpers layered on top of the core output; nothing here is
//! needed to compute an alignment.

use crate::table::DpTables;
use crate::traceback::Alignment;
use std::fmt;

impl DpTables {
    /// Render the score grid with header row and column.
    ///
    /// Columns are the prefixes of `b`, rows the prefixes of `a`; the empty
    /// prefix is shown as `-`. Cell widths adapt to the widest score.
    pub fn render_scores(&self, a: &[u8], b: &[u8]) -> String {
        let width = self
            .scores
            .as_slice()
            .iter()
            .map(|v| v.to_string().len())
            .max()
            .unwrap_or(1);

        let mut out = String::new();
        out.push_str(&format!("{:>width$}", ""));
        out.push_str(&format!(" {:>width$}", "-"));
        for &c in b {
            out.push_str(&format!(" {:>width$}", c as char));
        }
        out.push('\n');

        for i in 0..self.scores.rows() {
            let label = if i == 0 { '-' } else { a[i - 1] as char };
            out.push_str(&format!("{label:>width$}"));
            for j in 0..self.scores.cols() {
                out.push_str(&format!(" {:>width$}", self.scores[(i, j)]));
            }
            out.push('\n');
        }
        out
    }
}

impl Alignment {
    /// Line of `|` under matching columns, spaces elsewhere (gaps included).
    pub fn match_line(&self) -> String {
        self.aligned_a
            .iter()
            .zip(&self.aligned_b)
            .map(|(&x, &y)| if x == y { '|' } else { ' ' })
            .collect()
    }
}

/// Three-line rendering: aligned A, aligned B, match line.
impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", String::from_utf8_lossy(&self.aligned_a))?;
        writeln!(f, "{}", String::from_utf8_lossy(&self.aligned_b))?;
        write!(f, "{}", self.match_line())
    }
}
