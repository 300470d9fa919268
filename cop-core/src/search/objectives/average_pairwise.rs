#[cfg(test)]
#[path = "../../../tests/unit/search/objectives/average_pairwise_test.rs"]
mod average_pairwise_test;

use crate::models::problem::DistanceMatrix;
use crate::models::solution::SubsetSolution;
use crate::search::Move;
use springbok::prelude::*;
use springbok::utils::{map_reduce, short_type_name};

/// Scores a subset selection by the average distance over all pairs of selected items.
/// Bigger values mean a more spread out selection, so the objective is maximized.
/// Selections with fewer than two items evaluate to zero by definition.
#[derive(Default)]
pub struct AveragePairwiseObjective {}

/// An evaluation of [`AveragePairwiseObjective`] which caches the total distance sum over
/// selected pairs, so single item changes only touch distances of the affected item.
#[derive(Clone, Debug)]
pub struct PairwiseDistanceEvaluation {
    value: Float,
    sum: Float,
}

impl PairwiseDistanceEvaluation {
    fn from_sum(sum: Float, count: usize) -> Self {
        if count < 2 {
            return Self { value: 0., sum };
        }

        let pairs = (count * (count - 1) / 2) as f64;
        Self { value: sum / pairs, sum }
    }
}

impl Evaluation for PairwiseDistanceEvaluation {
    fn value(&self) -> Float {
        self.value
    }
}

impl Objective for AveragePairwiseObjective {
    type Solution = SubsetSolution;
    type Data = DistanceMatrix;
    type Evaluation = PairwiseDistanceEvaluation;

    fn direction(&self) -> Direction {
        Direction::Maximize
    }

    fn evaluate(&self, solution: &Self::Solution, data: &Self::Data) -> Self::Evaluation {
        let selected = solution.selected();
        if selected.len() < 2 {
            return PairwiseDistanceEvaluation::from_sum(0., selected.len());
        }

        // each unordered pair is visited once as item ids are unique
        let sum = map_reduce(
            selected,
            |&item| {
                selected.iter().filter(|&&other| other > item).map(|&other| data.distance(item, other)).sum::<Float>()
            },
            || 0.,
            |left, right| left + right,
        );

        PairwiseDistanceEvaluation::from_sum(sum, selected.len())
    }

    fn delta_evaluate(
        &self,
        mv: &Move,
        solution: &Self::Solution,
        evaluation: &Self::Evaluation,
        data: &Self::Data,
    ) -> Result<Self::Evaluation, EvaluationError> {
        let selected = solution.selected();
        match *mv {
            Move::Addition { item } => {
                let gained = selected.iter().map(|&other| data.distance(item, other)).sum::<Float>();

                Ok(PairwiseDistanceEvaluation::from_sum(evaluation.sum + gained, selected.len() + 1))
            }
            Move::Swap { insert, remove } => {
                let (gained, lost) =
                    selected.iter().filter(|&&other| other != remove).fold((0., 0.), |(gained, lost), &other| {
                        (gained + data.distance(insert, other), lost + data.distance(remove, other))
                    });

                Ok(PairwiseDistanceEvaluation::from_sum(evaluation.sum + gained - lost, selected.len()))
            }
            Move::SegmentReversal { .. } => {
                Err(EvaluationError::IncompatibleMove { objective: short_type_name::<Self>(), kind: mv.kind() })
            }
        }
    }
}
