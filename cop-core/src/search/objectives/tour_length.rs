#[cfg(test)]
#[path = "../../../tests/unit/search/objectives/tour_length_test.rs"]
mod tour_length_test;

use crate::models::problem::DistanceMatrix;
use crate::models::solution::TourSolution;
use crate::search::Move;
use springbok::prelude::*;
use springbok::utils::short_type_name;

/// Scores a tour by its total round trip length, so the objective is minimized.
///
/// A segment reversal changes two edges of the cycle only, which makes its incremental
/// evaluation constant time. The distance matrix is expected to be symmetric: the
/// traversal direction of the reversed run does not contribute to the length.
#[derive(Default)]
pub struct TourLengthObjective {}

impl Objective for TourLengthObjective {
    type Solution = TourSolution;
    type Data = DistanceMatrix;
    type Evaluation = SimpleEvaluation;

    fn direction(&self) -> Direction {
        Direction::Minimize
    }

    fn evaluate(&self, solution: &Self::Solution, data: &Self::Data) -> Self::Evaluation {
        let cities = solution.cities();
        let length = cities
            .iter()
            .enumerate()
            .map(|(idx, &from)| data.distance(from, cities[(idx + 1) % cities.len()]))
            .sum::<Float>();

        SimpleEvaluation::new(length)
    }

    fn delta_evaluate(
        &self,
        mv: &Move,
        solution: &Self::Solution,
        evaluation: &Self::Evaluation,
        data: &Self::Data,
    ) -> Result<Self::Evaluation, EvaluationError> {
        match *mv {
            Move::SegmentReversal { from, to } => {
                let cities = solution.cities();
                let size = cities.len();

                // the run covers the whole cycle: reversing it flips the travel
                // direction only, the cyclic edge set stays the same
                if (to + 1) % size == from {
                    return Ok(SimpleEvaluation::new(evaluation.value()));
                }

                let first = cities[from];
                let last = cities[to];
                let before = cities[(from + size - 1) % size];
                let after = cities[(to + 1) % size];

                let length = evaluation.value() - data.distance(before, first) - data.distance(last, after)
                    + data.distance(before, last)
                    + data.distance(first, after);

                Ok(SimpleEvaluation::new(length))
            }
            Move::Addition { .. } | Move::Swap { .. } => {
                Err(EvaluationError::IncompatibleMove { objective: short_type_name::<Self>(), kind: mv.kind() })
            }
        }
    }
}
