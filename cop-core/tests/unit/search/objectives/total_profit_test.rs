use super::*;
use crate::helpers::utils::assert_close;

fn create_test_table() -> ItemTable {
    ItemTable::new(vec![3., 1., 4., 1., 5.], vec![2., 2., 2., 2., 2.]).unwrap()
}

#[test]
fn can_evaluate_selection() {
    let table = create_test_table();
    let objective = TotalProfitObjective::default();
    let solution = SubsetSolution::with_selected(5, &[0, 2, 4]);

    let evaluation = objective.evaluate(&solution, &table);

    assert_eq!(objective.direction(), Direction::Maximize);
    assert_close(evaluation.value(), 12.);
}

#[test]
fn can_delta_evaluate_addition() {
    let table = create_test_table();
    let objective = TotalProfitObjective::default();
    let mut solution = SubsetSolution::with_selected(5, &[0, 2, 4]);
    let evaluation = objective.evaluate(&solution, &table);
    let mv = Move::Addition { item: 1 };

    let delta = objective.delta_evaluate(&mv, &solution, &evaluation, &table).unwrap();

    solution.apply(&mv).unwrap();
    assert_close(delta.value(), 13.);
    assert_close(delta.value(), objective.evaluate(&solution, &table).value());
}

#[test]
fn can_delta_evaluate_swap() {
    let table = create_test_table();
    let objective = TotalProfitObjective::default();
    let mut solution = SubsetSolution::with_selected(5, &[0, 2, 4]);
    let evaluation = objective.evaluate(&solution, &table);
    let mv = Move::Swap { insert: 3, remove: 0 };

    let delta = objective.delta_evaluate(&mv, &solution, &evaluation, &table).unwrap();

    solution.apply(&mv).unwrap();
    assert_close(delta.value(), 10.);
    assert_close(delta.value(), objective.evaluate(&solution, &table).value());
}

#[test]
fn can_reject_tour_moves() {
    let table = create_test_table();
    let objective = TotalProfitObjective::default();
    let solution = SubsetSolution::with_selected(5, &[0, 2]);
    let evaluation = objective.evaluate(&solution, &table);

    let result = objective.delta_evaluate(&Move::SegmentReversal { from: 0, to: 1 }, &solution, &evaluation, &table);

    assert_eq!(
        result.err(),
        Some(EvaluationError::IncompatibleMove { objective: "TotalProfitObjective", kind: "segment reversal" })
    );
}
