#[cfg(test)]
#[path = "../../../tests/unit/search/neighborhoods/segment_reversal_test.rs"]
mod segment_reversal_test;

use crate::models::solution::TourSolution;
use crate::search::Move;
use springbok::prelude::{Neighborhood, Random};
use springbok::utils::SelectionSamplingIterator;
use std::sync::Arc;

/// Generates segment reversal moves for every pair of distinct tour positions with
/// `from < to`, the classic 2-opt exchange. A tour of `n` cities has `n * (n - 1) / 2`
/// such moves.
#[derive(Default)]
pub struct SegmentReversalNeighborhood {}

impl SegmentReversalNeighborhood {
    /// Returns `amount` moves sampled uniformly without replacement from the neighborhood
    /// of given solution. Returns less moves when the neighborhood is smaller than `amount`
    /// which must be positive.
    pub fn sampled_moves(
        &self,
        solution: &TourSolution,
        amount: usize,
        random: Arc<dyn Random + Send + Sync>,
    ) -> Vec<Move> {
        // NOTE sampling needs an exact size which a boxed lazy iterator cannot promise
        let moves = self.moves(solution).collect::<Vec<_>>();

        SelectionSamplingIterator::new(moves.into_iter(), amount, random).collect()
    }
}

impl Neighborhood for SegmentReversalNeighborhood {
    type Solution = TourSolution;

    fn moves<'a>(&'a self, solution: &'a Self::Solution) -> Box<dyn Iterator<Item = Move> + 'a> {
        let size = solution.size();
        Box::new((0..size).flat_map(move |from| {
            ((from + 1)..size).map(move |to| Move::SegmentReversal { from, to })
        }))
    }

    fn random_move(
        &self,
        solution: &Self::Solution,
        random: &(dyn Random + Send + Sync),
    ) -> Option<Move> {
        let size = solution.size();
        if size < 2 {
            return None;
        }

        // draw an unordered pair of distinct positions
        let first = random.uniform_int(0, size as i32 - 1) as usize;
        let second = random.uniform_int(0, size as i32 - 2) as usize;
        let second = if second >= first { second + 1 } else { second };

        let (from, to) = (first.min(second), first.max(second));

        Some(Move::SegmentReversal { from, to })
    }
}
