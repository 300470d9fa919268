use super::*;
use crate::helpers::utils::test_random;

#[test]
fn can_create_random_tour() {
    let random = test_random();

    let solution = TourSolution::random(5, random.as_ref());

    let mut cities = solution.cities().to_vec();
    cities.sort();
    assert_eq!(cities, vec![0, 1, 2, 3, 4]);
}

#[test]
fn can_reject_invalid_reversals() {
    let mut solution = TourSolution::new(vec![0, 1, 2, 3, 4]);

    let result = solution.apply(&Move::SegmentReversal { from: 2, to: 2 });
    assert_eq!(result, Err(MoveError::Structural { reason: "reversal positions must differ".to_string() }));

    let result = solution.apply(&Move::SegmentReversal { from: 7, to: 2 });
    assert_eq!(result, Err(MoveError::Structural { reason: "position 7 is out of tour of size 5".to_string() }));

    assert_eq!(solution.cities(), &[0, 1, 2, 3, 4]);
}

#[test]
fn can_reject_subset_moves() {
    let mut solution = TourSolution::new(vec![0, 1, 2]);

    assert_eq!(
        solution.apply(&Move::Addition { item: 1 }),
        Err(MoveError::UnsupportedKind { kind: "addition" })
    );
    assert_eq!(
        solution.apply(&Move::Swap { insert: 0, remove: 1 }),
        Err(MoveError::UnsupportedKind { kind: "swap" })
    );
}

#[test]
fn can_deep_copy_independently() {
    let solution = TourSolution::new(vec![0, 1, 2, 3]);
    let mut copy = solution.deep_copy();

    copy.apply(&Move::SegmentReversal { from: 0, to: 1 }).unwrap();

    assert_eq!(copy.cities(), &[1, 0, 2, 3]);
    assert_eq!(solution.cities(), &[0, 1, 2, 3]);
}

parameterized_test! {can_reverse_segments, (from, to, expected), {
    can_reverse_segments_impl(from, to, expected);
}}

can_reverse_segments! {
    case_01_inner_run: (1, 3, vec![0, 3, 2, 1, 4]),
    case_02_adjacent_positions: (2, 3, vec![0, 1, 3, 2, 4]),
    case_03_full_span: (0, 4, vec![4, 3, 2, 1, 0]),
    case_04_wrapping_run: (3, 1, vec![4, 3, 2, 1, 0]),
    case_05_wrapping_pair: (4, 0, vec![4, 1, 2, 3, 0]),
}

fn can_reverse_segments_impl(from: usize, to: usize, expected: Vec<usize>) {
    let mut solution = TourSolution::new(vec![0, 1, 2, 3, 4]);

    solution.apply(&Move::SegmentReversal { from, to }).unwrap();

    assert_eq!(solution.cities(), expected.as_slice());
}
