//! This module contains read only problem data models. Data instances are built once,
//! usually from external readers, then shared behind `Arc` for the whole search.

mod distances;
pub use self::distances::*;

mod graph;
pub use self::graph::*;

mod items;
pub use self::items::*;

use thiserror::Error;

/// An error which is returned when problem data cannot be constructed.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DataError {
    /// A flat matrix vector does not match the expected squared size.
    #[error("matrix data has length {actual}, expected {expected}")]
    InvalidMatrixShape {
        /// An expected length of the flat vector.
        expected: usize,
        /// An actual length of the flat vector.
        actual: usize,
    },

    /// Profit and weight columns of an item table have different lengths.
    #[error("item table columns have different lengths: {profits} profits, {weights} weights")]
    MismatchedTableSize {
        /// An amount of profit entries.
        profits: usize,
        /// An amount of weight entries.
        weights: usize,
    },

    /// An item id does not belong to the problem universe.
    #[error("item {item} is out of range of universe size {size}")]
    ItemOutOfRange {
        /// An item id.
        item: usize,
        /// A size of the universe.
        size: usize,
    },
}
