#[cfg(test)]
#[path = "../../../tests/unit/models/solution/tour_test.rs"]
mod tour_test;

use crate::models::common::ItemId;
use crate::search::Move;
use rand::seq::SliceRandom;
use springbok::prelude::{MoveError, Random, Solution};

/// A tour solution: a cyclic permutation of the full item universe. The first city is
/// not fixed, so every cyclic rotation describes the same round trip.
pub struct TourSolution {
    cities: Vec<ItemId>,
}

impl TourSolution {
    /// Creates an instance of `TourSolution` from given city order. The order is expected
    /// to be a permutation of the item universe, which is checked in debug builds only.
    pub fn new(cities: Vec<ItemId>) -> Self {
        debug_assert!(is_permutation(&cities));
        Self { cities }
    }

    /// Creates a random tour over given amount of cities.
    pub fn random(size: usize, random: &(dyn Random + Send + Sync)) -> Self {
        let mut cities = (0..size).collect::<Vec<_>>();
        cities.shuffle(&mut random.get_rng());

        Self { cities }
    }

    /// Returns cities in visiting order.
    pub fn cities(&self) -> &[ItemId] {
        &self.cities
    }

    /// Returns amount of cities in the tour.
    pub fn size(&self) -> usize {
        self.cities.len()
    }

    fn reverse_segment(&mut self, from: usize, to: usize) {
        if from <= to {
            self.cities[from..=to].reverse();
        } else {
            // the run wraps over the vector end: swap pairwise walking inwards
            let len = self.cities.len();
            let count = (len - from + to + 1) / 2;
            (0..count).for_each(|offset| {
                let i = (from + offset) % len;
                let j = (to + len - offset) % len;
                self.cities.swap(i, j);
            });
        }
    }
}

impl Solution for TourSolution {
    type Move = Move;

    fn deep_copy(&self) -> Self {
        Self { cities: self.cities.clone() }
    }

    fn apply(&mut self, mv: &Self::Move) -> Result<(), MoveError> {
        match *mv {
            Move::SegmentReversal { from, to } => {
                let size = self.size();
                if from >= size || to >= size {
                    let position = if from >= size { from } else { to };
                    return Err(MoveError::Structural {
                        reason: format!("position {position} is out of tour of size {size}"),
                    });
                }
                if from == to {
                    return Err(MoveError::Structural { reason: "reversal positions must differ".to_string() });
                }

                self.reverse_segment(from, to);
                Ok(())
            }
            Move::Addition { .. } | Move::Swap { .. } => Err(MoveError::UnsupportedKind { kind: mv.kind() }),
        }
    }
}

fn is_permutation(cities: &[ItemId]) -> bool {
    let mut seen = vec![false; cities.len()];
    cities.iter().all(|&city| city < seen.len() && !std::mem::replace(&mut seen[city], true))
}
