#[cfg(test)]
#[path = "../../../tests/unit/models/problem/distances_test.rs"]
mod distances_test;

use crate::models::common::{Distance, ItemId};
use crate::models::problem::DataError;
use springbok::prelude::{Float, compare_floats};
use std::cmp::Ordering;

/// An item to item distance matrix stored as a flat vector in row-major order.
///
/// The matrix is expected to be symmetric with zero diagonal: readers are supposed to
/// validate their input, so these properties are checked in debug builds only.
pub struct DistanceMatrix {
    data: Vec<Distance>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates an instance of `DistanceMatrix` from a flat vector in row-major order.
    pub fn new(data: Vec<Distance>, size: usize) -> Result<Self, DataError> {
        if data.len() != size * size {
            return Err(DataError::InvalidMatrixShape { expected: size * size, actual: data.len() });
        }

        let matrix = Self { data, size };
        debug_assert!(matrix.is_symmetric_with_zero_diagonal());

        Ok(matrix)
    }

    /// Returns a distance between two items.
    pub fn distance(&self, from: ItemId, to: ItemId) -> Distance {
        self.data[from * self.size + to]
    }

    /// Returns amount of items covered by the matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the average distance of an item to its closest item at a positive distance.
    /// The statistic is commonly used to scale temperature ranges of annealing style engines.
    pub fn average_nearest_neighbor_distance(&self) -> Float {
        if self.size < 2 {
            return 0.;
        }

        let sum = (0..self.size)
            .filter_map(|item| {
                (0..self.size)
                    .map(|other| self.distance(item, other))
                    .filter(|&distance| distance > 0.)
                    .min_by(|a, b| compare_floats(*a, *b))
            })
            .sum::<Float>();

        sum / self.size as f64
    }

    fn is_symmetric_with_zero_diagonal(&self) -> bool {
        (0..self.size).all(|i| {
            compare_floats(self.distance(i, i), 0.) == Ordering::Equal
                && (0..i).all(|j| compare_floats(self.distance(i, j), self.distance(j, i)) == Ordering::Equal)
        })
    }
}
