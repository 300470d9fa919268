//! Common primitives shared by problem and solution models.

use springbok::prelude::Float;

/// Represents an item of a problem: a city of a tour, a vertex of a graph, an entry of
/// a knapsack. Items are identified by a dense zero based index.
pub type ItemId = usize;

/// Represents a distance between two items.
pub type Distance = Float;

/// Represents a profit of an item.
pub type Profit = Float;

/// Represents a weight of an item.
pub type Weight = Float;
