#[cfg(test)]
#[path = "../../../tests/unit/search/objectives/total_profit_test.rs"]
mod total_profit_test;

use crate::models::problem::ItemTable;
use crate::models::solution::SubsetSolution;
use crate::search::Move;
use springbok::prelude::*;
use springbok::utils::short_type_name;

/// Scores a subset selection by the total profit of selected items, so the objective is
/// maximized. Capacity constraints stay with the owning problem: the objective itself
/// accepts any selection.
#[derive(Default)]
pub struct TotalProfitObjective {}

impl Objective for TotalProfitObjective {
    type Solution = SubsetSolution;
    type Data = ItemTable;
    type Evaluation = SimpleEvaluation;

    fn direction(&self) -> Direction {
        Direction::Maximize
    }

    fn evaluate(&self, solution: &Self::Solution, data: &Self::Data) -> Self::Evaluation {
        SimpleEvaluation::new(solution.selected().iter().map(|&item| data.profit(item)).sum())
    }

    fn delta_evaluate(
        &self,
        mv: &Move,
        _solution: &Self::Solution,
        evaluation: &Self::Evaluation,
        data: &Self::Data,
    ) -> Result<Self::Evaluation, EvaluationError> {
        match *mv {
            Move::Addition { item } => Ok(SimpleEvaluation::new(evaluation.value() + data.profit(item))),
            Move::Swap { insert, remove } => {
                Ok(SimpleEvaluation::new(evaluation.value() + data.profit(insert) - data.profit(remove)))
            }
            Move::SegmentReversal { .. } => {
                Err(EvaluationError::IncompatibleMove { objective: short_type_name::<Self>(), kind: mv.kind() })
            }
        }
    }
}
