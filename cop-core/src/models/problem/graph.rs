#[cfg(test)]
#[path = "../../../tests/unit/models/problem/graph_test.rs"]
mod graph_test;

use crate::models::common::ItemId;
use crate::models::problem::DataError;
use rustc_hash::FxHashSet;

/// An undirected graph over the item universe, stored as one adjacency set per vertex.
pub struct AdjacencyGraph {
    adjacency: Vec<FxHashSet<ItemId>>,
}

impl AdjacencyGraph {
    /// Creates an instance of `AdjacencyGraph` with given amount of vertices from an edge
    /// list. Every edge is inserted in both directions, self loops are ignored.
    pub fn new(size: usize, edges: &[(ItemId, ItemId)]) -> Result<Self, DataError> {
        let mut adjacency = vec![FxHashSet::default(); size];

        for &(from, to) in edges {
            if from >= size || to >= size {
                let item = if from >= size { from } else { to };
                return Err(DataError::ItemOutOfRange { item, size });
            }

            if from == to {
                continue;
            }

            adjacency[from].insert(to);
            adjacency[to].insert(from);
        }

        Ok(Self { adjacency })
    }

    /// Returns true if two items are connected by an edge.
    pub fn connected(&self, a: ItemId, b: ItemId) -> bool {
        self.adjacency[a].contains(&b)
    }

    /// Returns a degree of given item counted within given item group only.
    pub fn degree_within(&self, item: ItemId, group: &[ItemId]) -> usize {
        group.iter().filter(|&&other| self.connected(item, other)).count()
    }

    /// Returns amount of vertices in the graph.
    pub fn size(&self) -> usize {
        self.adjacency.len()
    }
}
