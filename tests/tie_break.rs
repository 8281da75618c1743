//! Deterministic tie-break behavior: diagonal beats vertical beats
//! horizontal whenever candidates are equal.

use global_align::{align, Decision, DpTables, Scoring};

#[test]
fn three_way_ties_resolve_diagonal_all_the_way() {
    // With match = mismatch = 2 and gap = 1 every interior candidate triple
    // on the main diagonal ties, so the walk must take diagonals only.
    let s = b"AC";
    let t = b"AC";
    let scoring = Scoring::new(2, 2, 1);

    let tables = DpTables::build(s, t, &scoring);
    assert_eq!(tables.decisions[(1, 1)], Decision::Diagonal);
    assert_eq!(tables.decisions[(2, 2)], Decision::Diagonal);

    let result = align(s, t, &scoring);
    assert_eq!(result.score, 4);
    assert_eq!(result.aligned_a, s);
    assert_eq!(result.aligned_b, t);
}

#[test]
fn vertical_wins_a_gap_only_tie() {
    // The mismatch candidate loses, leaving vertical and horizontal tied.
    let tables = DpTables::build(b"A", b"C", &Scoring::new(5, 0, 1));
    assert_eq!(tables.decisions[(1, 1)], Decision::Vertical);
}

#[test]
fn same_inputs_always_give_the_same_alignment() {
    let s = b"GATTACA";
    let t = b"GCATGCU";
    let scoring = Scoring::new(1, -1, -1);
    let first = align(s, t, &scoring);
    for _ in 0..10 {
        assert_eq!(align(s, t, &scoring), first);
    }
}
