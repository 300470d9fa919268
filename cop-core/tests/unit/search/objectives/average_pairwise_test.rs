use super::*;
use crate::helpers::models::create_matrix;
use crate::helpers::utils::assert_close;
use crate::search::neighborhoods::SingleSwapNeighborhood;

fn create_test_matrix() -> DistanceMatrix {
    create_matrix(4, &[(0, 1, 2.), (0, 2, 4.), (0, 3, 1.), (1, 2, 6.), (1, 3, 3.), (2, 3, 5.)])
}

#[test]
fn can_evaluate_selection() {
    let matrix = create_test_matrix();
    let objective = AveragePairwiseObjective::default();
    let solution = SubsetSolution::with_selected(4, &[0, 1, 2]);

    let evaluation = objective.evaluate(&solution, &matrix);

    assert_eq!(objective.direction(), Direction::Maximize);
    assert_close(evaluation.value(), (2. + 4. + 6.) / 3.);
}

parameterized_test! {can_evaluate_trivial_selections, selected, {
    let matrix = create_test_matrix();
    let solution = SubsetSolution::with_selected(4, &selected);

    let evaluation = AveragePairwiseObjective::default().evaluate(&solution, &matrix);

    assert_eq!(evaluation.value(), 0.);
}}

can_evaluate_trivial_selections! {
    case_01_empty: vec![],
    case_02_single: vec![1],
}

#[test]
fn can_evaluate_regardless_of_selection_order() {
    let matrix = create_test_matrix();
    let objective = AveragePairwiseObjective::default();

    let forward = objective.evaluate(&SubsetSolution::with_selected(4, &[0, 1, 2]), &matrix);
    let shuffled = objective.evaluate(&SubsetSolution::with_selected(4, &[2, 0, 1]), &matrix);

    assert_close(forward.value(), shuffled.value());
}

#[test]
fn can_delta_evaluate_addition() {
    let matrix = create_test_matrix();
    let objective = AveragePairwiseObjective::default();
    let mut solution = SubsetSolution::with_selected(4, &[0, 1, 2]);
    let evaluation = objective.evaluate(&solution, &matrix);
    let mv = Move::Addition { item: 3 };

    let delta = objective.delta_evaluate(&mv, &solution, &evaluation, &matrix).unwrap();

    solution.apply(&mv).unwrap();
    assert_close(delta.value(), 3.5);
    assert_close(delta.value(), objective.evaluate(&solution, &matrix).value());
}

#[test]
fn can_delta_evaluate_swap() {
    let matrix = create_test_matrix();
    let objective = AveragePairwiseObjective::default();
    let mut solution = SubsetSolution::with_selected(4, &[0, 1, 2]);
    let evaluation = objective.evaluate(&solution, &matrix);
    let mv = Move::Swap { insert: 3, remove: 1 };

    let delta = objective.delta_evaluate(&mv, &solution, &evaluation, &matrix).unwrap();

    solution.apply(&mv).unwrap();
    assert_close(delta.value(), 10. / 3.);
    assert_close(delta.value(), objective.evaluate(&solution, &matrix).value());
}

#[test]
fn can_match_full_evaluation_for_all_swaps() {
    let matrix = create_test_matrix();
    let objective = AveragePairwiseObjective::default();
    let solution = SubsetSolution::with_selected(4, &[0, 1]);
    let evaluation = objective.evaluate(&solution, &matrix);

    SingleSwapNeighborhood::default().moves(&solution).for_each(|mv| {
        let delta = objective.delta_evaluate(&mv, &solution, &evaluation, &matrix).unwrap();

        let mut next = solution.deep_copy();
        next.apply(&mv).unwrap();
        assert_close(delta.value(), objective.evaluate(&next, &matrix).value());
    });
}

#[test]
fn can_reject_tour_moves() {
    let matrix = create_test_matrix();
    let objective = AveragePairwiseObjective::default();
    let solution = SubsetSolution::with_selected(4, &[0, 1]);
    let evaluation = objective.evaluate(&solution, &matrix);

    let result = objective.delta_evaluate(&Move::SegmentReversal { from: 0, to: 1 }, &solution, &evaluation, &matrix);

    assert_eq!(
        result.err(),
        Some(EvaluationError::IncompatibleMove { objective: "AveragePairwiseObjective", kind: "segment reversal" })
    );
}
