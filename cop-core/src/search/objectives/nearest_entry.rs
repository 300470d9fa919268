#[cfg(test)]
#[path = "../../../tests/unit/search/objectives/nearest_entry_test.rs"]
mod nearest_entry_test;

use crate::models::common::{Distance, ItemId};
use crate::models::problem::DistanceMatrix;
use crate::models::solution::SubsetSolution;
use crate::search::Move;
use rustc_hash::FxHashMap;
use springbok::prelude::*;
use springbok::utils::{parallel_collect, short_type_name};

/// Scores a subset selection by the average distance of every selected item to its
/// closest other selected item. Bigger values mean a selection without tight clumps, so
/// the objective is maximized. Selections with fewer than two items evaluate to zero.
///
/// The evaluation caches the closest selected neighbor of every selected item. This makes
/// additions cheap: the new item can only improve existing entries. Removals are the
/// expensive direction: every item which pointed at the removed one has to rescan the
/// remaining selection.
#[derive(Default)]
pub struct NearestEntryObjective {}

/// A closest selected item together with the distance to it.
#[derive(Clone, Copy, Debug)]
struct NearestNeighbor {
    item: ItemId,
    distance: Distance,
}

/// An evaluation of [`NearestEntryObjective`] which carries the per item nearest neighbor
/// cache next to the scalar value.
#[derive(Clone, Debug)]
pub struct NearestEntryEvaluation {
    value: Float,
    sum: Float,
    nearest: FxHashMap<ItemId, NearestNeighbor>,
}

impl NearestEntryEvaluation {
    fn from_parts(sum: Float, nearest: FxHashMap<ItemId, NearestNeighbor>, count: usize) -> Self {
        let value = if count < 2 { 0. } else { sum / count as f64 };
        Self { value, sum, nearest }
    }
}

impl Evaluation for NearestEntryEvaluation {
    fn value(&self) -> Float {
        self.value
    }
}

fn nearest_of<I>(item: ItemId, others: I, data: &DistanceMatrix) -> Option<NearestNeighbor>
where
    I: Iterator<Item = ItemId>,
{
    others
        .filter(|&other| other != item)
        .map(|other| NearestNeighbor { item: other, distance: data.distance(item, other) })
        .min_by(|left, right| compare_floats(left.distance, right.distance))
}

impl NearestEntryObjective {
    /// Inserts `added` into the cache: existing entries are challenged by the new item,
    /// the new item picks its own neighbor among `others`.
    fn add_to_cache(
        added: ItemId,
        others: &[ItemId],
        nearest: &mut FxHashMap<ItemId, NearestNeighbor>,
        sum: &mut Float,
        data: &DistanceMatrix,
    ) {
        for &item in others {
            let distance = data.distance(item, added);
            match nearest.get_mut(&item) {
                Some(neighbor) if distance < neighbor.distance => {
                    *sum += distance - neighbor.distance;
                    *neighbor = NearestNeighbor { item: added, distance };
                }
                Some(_) => {}
                None => {
                    *sum += distance;
                    nearest.insert(item, NearestNeighbor { item: added, distance });
                }
            }
        }

        if let Some(neighbor) = nearest_of(added, others.iter().copied(), data) {
            *sum += neighbor.distance;
            nearest.insert(added, neighbor);
        }
    }

    /// Drops `removed` from the cache: items which pointed at it rescan the remaining
    /// selection given by `others`.
    fn remove_from_cache(
        removed: ItemId,
        others: &[ItemId],
        nearest: &mut FxHashMap<ItemId, NearestNeighbor>,
        sum: &mut Float,
        data: &DistanceMatrix,
    ) {
        if let Some(neighbor) = nearest.remove(&removed) {
            *sum -= neighbor.distance;
        }

        for &item in others {
            let points_at_removed = nearest.get(&item).is_some_and(|neighbor| neighbor.item == removed);
            if !points_at_removed {
                continue;
            }

            match nearest_of(item, others.iter().copied(), data) {
                Some(neighbor) => {
                    let old = nearest.insert(item, neighbor);
                    *sum += neighbor.distance - old.map_or(0., |old| old.distance);
                }
                None => {
                    if let Some(old) = nearest.remove(&item) {
                        *sum -= old.distance;
                    }
                }
            }
        }
    }
}

impl Objective for NearestEntryObjective {
    type Solution = SubsetSolution;
    type Data = DistanceMatrix;
    type Evaluation = NearestEntryEvaluation;

    fn direction(&self) -> Direction {
        Direction::Maximize
    }

    fn evaluate(&self, solution: &Self::Solution, data: &Self::Data) -> Self::Evaluation {
        let selected = solution.selected();
        if selected.len() < 2 {
            return NearestEntryEvaluation::from_parts(0., FxHashMap::default(), selected.len());
        }

        let entries = parallel_collect(selected, |&item| (item, nearest_of(item, selected.iter().copied(), data)));

        let mut nearest = FxHashMap::default();
        let mut sum = 0.;
        entries.into_iter().filter_map(|(item, neighbor)| neighbor.map(|neighbor| (item, neighbor))).for_each(
            |(item, neighbor)| {
                sum += neighbor.distance;
                nearest.insert(item, neighbor);
            },
        );

        NearestEntryEvaluation::from_parts(sum, nearest, selected.len())
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
                let mut nearest = evaluation.nearest.clone();
                let mut sum = evaluation.sum;

                Self::add_to_cache(item, selected, &mut nearest, &mut sum, data);

                Ok(NearestEntryEvaluation::from_parts(sum, nearest, selected.len() + 1))
            }
            Move::Swap { insert, remove } => {
                let mut nearest = evaluation.nearest.clone();
                let mut sum = evaluation.sum;
                let remaining = selected.iter().copied().filter(|&item| item != remove).collect::<Vec<_>>();

                Self::remove_from_cache(remove, &remaining, &mut nearest, &mut sum, data);
                Self::add_to_cache(insert, &remaining, &mut nearest, &mut sum, data);

                Ok(NearestEntryEvaluation::from_parts(sum, nearest, remaining.len() + 1))
            }
            Move::SegmentReversal { .. } => {
                Err(EvaluationError::IncompatibleMove { objective: short_type_name::<Self>(), kind: mv.kind() })
            }
        }
    }
}
