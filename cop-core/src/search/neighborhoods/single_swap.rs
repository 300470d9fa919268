#[cfg(test)]
#[path = "../../../tests/unit/search/neighborhoods/single_swap_test.rs"]
mod single_swap_test;

use crate::models::solution::SubsetSolution;
use crate::search::Move;
use springbok::prelude::{Neighborhood, Random};

/// Generates swap moves which exchange one selected item for one unselected item, covering
/// the full cartesian product of the two sets. Selection size stays constant.
#[derive(Default)]
pub struct SingleSwapNeighborhood {}

impl Neighborhood for SingleSwapNeighborhood {
    type Solution = SubsetSolution;

    fn moves<'a>(&'a self, solution: &'a Self::Solution) -> Box<dyn Iterator<Item = Move> + 'a> {
        Box::new(solution.unselected().iter().flat_map(move |&insert| {
            solution.selected().iter().map(move |&remove| Move::Swap { insert, remove })
        }))
    }

    fn random_move(
        &self,
        solution: &Self::Solution,
        random: &(dyn Random + Send + Sync),
    ) -> Option<Move> {
        let (selected, unselected) = (solution.selected(), solution.unselected());
        if selected.is_empty() || unselected.is_empty() {
            return None;
        }

        let insert = unselected[random.uniform_int(0, unselected.len() as i32 - 1) as usize];
        let remove = selected[random.uniform_int(0, selected.len() as i32 - 1) as usize];

        Some(Move::Swap { insert, remove })
    }
}
