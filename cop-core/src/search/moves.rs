#[cfg(test)]
#[path = "../../tests/unit/search/moves_test.rs"]
mod moves_test;

use crate::models::common::ItemId;

/// A move which transforms a solution into one of its neighbors.
///
/// Moves are plain data: they carry item ids and positions, never a reference to the
/// solution they were generated for. A move is meant to be applied at most once, to the
/// solution state it was generated for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Move {
    /// Adds an unselected item to the selection of a subset solution.
    Addition {
        /// An item to select.
        item: ItemId,
    },

    /// Replaces one selected item of a subset solution with an unselected one.
    Swap {
        /// An item to select.
        insert: ItemId,
        /// An item to deselect.
        remove: ItemId,
    },

    /// Reverses a cyclic run of cities of a tour solution. The run starts at position
    /// `from` and ends at position `to`, wrapping over the tour end when `from > to`.
    SegmentReversal {
        /// A position of the first city of the reversed run.
        from: usize,
        /// A position of the last city of the reversed run.
        to: usize,
    },
}

impl Move {
    /// Returns a short name of the move kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Move::Addition { .. } => "addition",
            Move::Swap { .. } => "swap",
            Move::SegmentReversal { .. } => "segment reversal",
        }
    }
}
