//! Boundary-row and pathological-parameter cases.

use global_align::{align, Scoring, GAP};

#[test]
fn empty_against_length_k_is_pure_gap_run() {
    let t = b"ACGTA";
    let result = align(b"", t, &Scoring::new(1, -1, -2));
    assert_eq!(result.score, -2 * t.len() as i64);
    assert_eq!(result.aligned_a, vec![GAP; t.len()]);
    assert_eq!(result.aligned_b, t);
}

#[test]
fn length_k_against_empty_mirrors_the_boundary_column() {
    let s = b"TTG";
    let result = align(s, b"", &Scoring::new(1, -1, -2));
    assert_eq!(result.score, -6);
    assert_eq!(result.aligned_a, s);
    assert_eq!(result.aligned_b, vec![GAP; s.len()]);
}

#[test]
fn both_empty() {
    let result = align(b"", b"", &Scoring::default());
    assert_eq!(result.score, 0);
    assert!(result.is_empty());
}

#[test]
fn attractive_gaps_produce_an_all_gap_alignment() {
    // gap = +2 beats every match; the optimum spells out both sequences
    // against gaps. Mathematically correct for these inputs, not an error.
    let s = b"AA";
    let t = b"AA";
    let result = align(s, t, &Scoring::new(1, -1, 2));
    assert_eq!(result.score, 2 * (s.len() + t.len()) as i64);
    assert_eq!(result.len(), s.len() + t.len());
    for (&x, &y) in result.aligned_a.iter().zip(&result.aligned_b) {
        assert!(x == GAP || y == GAP);
        assert!(!(x == GAP && y == GAP));
    }
}

#[test]
fn single_symbol_mismatch_prefers_diagonal_when_cheaper() {
    // One mismatch (-1) beats two gaps (-4).
    let result = align(b"A", b"C", &Scoring::new(1, -1, -2));
    assert_eq!(result.score, -1);
    assert_eq!(result.aligned_a, b"A");
    assert_eq!(result.aligned_b, b"C");
}
