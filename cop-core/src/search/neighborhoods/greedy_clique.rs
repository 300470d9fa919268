#[cfg(test)]
#[path = "../../../tests/unit/search/neighborhoods/greedy_clique_test.rs"]
mod greedy_clique_test;

use crate::models::common::ItemId;
use crate::models::problem::AdjacencyGraph;
use crate::models::solution::SubsetSolution;
use crate::search::Move;
use springbok::prelude::{Neighborhood, Random};
use std::sync::Arc;

/// Generates addition moves which grow a clique by one vertex. Only vertices adjacent to
/// every selected vertex are considered, and among those only the ones with the highest
/// degree within the candidate set survive, so additions keep the future growth potential
/// as high as possible.
///
/// The neighborhood is empty when the clique cannot be extended.
pub struct GreedyCliqueNeighborhood {
    graph: Arc<AdjacencyGraph>,
}

impl GreedyCliqueNeighborhood {
    /// Creates a new instance of `GreedyCliqueNeighborhood` over given graph.
    pub fn new(graph: Arc<AdjacencyGraph>) -> Self {
        Self { graph }
    }

    /// Returns vertices whose addition keeps the selection a clique, reduced to the ones
    /// with the maximum degree within that candidate set.
    fn best_candidates(&self, solution: &SubsetSolution) -> Vec<ItemId> {
        let feasible = solution
            .unselected()
            .iter()
            .copied()
            .filter(|&candidate| {
                solution.selected().iter().all(|&vertex| self.graph.connected(vertex, candidate))
            })
            .collect::<Vec<_>>();

        let mut best_degree = 0;
        let mut candidates = Vec::new();
        for &candidate in feasible.iter() {
            let degree = self.graph.degree_within(candidate, feasible.as_slice());
            if degree > best_degree {
                best_degree = degree;
                candidates.clear();
                candidates.push(candidate);
            } else if degree == best_degree {
                candidates.push(candidate);
            }
        }

        candidates
    }
}

impl Neighborhood for GreedyCliqueNeighborhood {
    type Solution = SubsetSolution;

    fn moves<'a>(&'a self, solution: &'a Self::Solution) -> Box<dyn Iterator<Item = Move> + 'a> {
        Box::new(self.best_candidates(solution).into_iter().map(|item| Move::Addition { item }))
    }

    fn random_move(
        &self,
        solution: &Self::Solution,
        random: &(dyn Random + Send + Sync),
    ) -> Option<Move> {
        let candidates = self.best_candidates(solution);
        if candidates.is_empty() {
            return None;
        }

        let item = candidates[random.uniform_int(0, candidates.len() as i32 - 1) as usize];

        Some(Move::Addition { item })
    }
}
