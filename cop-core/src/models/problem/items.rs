#[cfg(test)]
#[path = "../../../tests/unit/models/problem/items_test.rs"]
mod items_test;

use crate::models::common::{ItemId, Profit, Weight};
use crate::models::problem::DataError;

/// A table of item profits and weights. Profits are consumed by the total profit
/// objective, weights are exposed for capacity constraints of the owning problem.
pub struct ItemTable {
    profits: Vec<Profit>,
    weights: Vec<Weight>,
}

impl ItemTable {
    /// Creates an instance of `ItemTable` from profit and weight columns of equal length.
    /// Values are expected to be non negative, which is checked in debug builds only.
    pub fn new(profits: Vec<Profit>, weights: Vec<Weight>) -> Result<Self, DataError> {
        if profits.len() != weights.len() {
            return Err(DataError::MismatchedTableSize { profits: profits.len(), weights: weights.len() });
        }

        debug_assert!(profits.iter().chain(weights.iter()).all(|&value| value >= 0.));

        Ok(Self { profits, weights })
    }

    /// Returns a profit of given item.
    pub fn profit(&self, item: ItemId) -> Profit {
        self.profits[item]
    }

    /// Returns a weight of given item.
    pub fn weight(&self, item: ItemId) -> Weight {
        self.weights[item]
    }

    /// Returns amount of items in the table.
    pub fn size(&self) -> usize {
        self.profits.len()
    }

    /// Returns a total weight of given items.
    pub fn total_weight<I: IntoIterator<Item = ItemId>>(&self, items: I) -> Weight {
        items.into_iter().map(|item| self.weight(item)).sum()
    }
}
