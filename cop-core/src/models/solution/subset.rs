#[cfg(test)]
#[path = "../../../tests/unit/models/solution/subset_test.rs"]
mod subset_test;

use crate::models::common::ItemId;
use crate::search::Move;
use springbok::prelude::{MoveError, Random, Solution};

/// A subset selection solution: the item universe is partitioned into selected and
/// unselected items.
///
/// Both partitions are stored as dense vectors with a positional index on top, so
/// membership tests, selection and deselection are all constant time. The iteration
/// order of [`SubsetSolution::selected`] is unspecified, but stays stable while the
/// solution is not modified.
pub struct SubsetSolution {
    selected: Vec<ItemId>,
    unselected: Vec<ItemId>,
    positions: Vec<Position>,
}

#[derive(Clone, Copy)]
enum Position {
    Selected(usize),
    Unselected(usize),
}

impl SubsetSolution {
    /// Creates an instance of `SubsetSolution` with all items unselected.
    pub fn new(size: usize) -> Self {
        Self {
            selected: Vec::with_capacity(size),
            unselected: (0..size).collect(),
            positions: (0..size).map(Position::Unselected).collect(),
        }
    }

    /// Creates an instance of `SubsetSolution` with given items selected.
    pub fn with_selected(size: usize, items: &[ItemId]) -> Self {
        let mut solution = Self::new(size);
        items.iter().for_each(|&item| {
            solution.select(item);
        });

        solution
    }

    /// Creates a solution with given amount of items selected uniformly at random.
    pub fn random(size: usize, amount: usize, random: &(dyn Random + Send + Sync)) -> Self {
        assert!(amount <= size);

        let mut solution = Self::new(size);
        (0..amount).for_each(|_| {
            let idx = random.uniform_int(0, solution.unselected.len() as i32 - 1) as usize;
            let item = solution.unselected[idx];
            solution.select(item);
        });

        solution
    }

    /// Selects given item. Returns false if the item is selected already.
    pub fn select(&mut self, item: ItemId) -> bool {
        match self.positions[item] {
            Position::Selected(_) => false,
            Position::Unselected(idx) => {
                self.unselected.swap_remove(idx);
                if let Some(&moved) = self.unselected.get(idx) {
                    self.positions[moved] = Position::Unselected(idx);
                }

                self.positions[item] = Position::Selected(self.selected.len());
                self.selected.push(item);

                true
            }
        }
    }

    /// Deselects given item. Returns false if the item is not selected.
    pub fn deselect(&mut self, item: ItemId) -> bool {
        match self.positions[item] {
            Position::Unselected(_) => false,
            Position::Selected(idx) => {
                self.selected.swap_remove(idx);
                if let Some(&moved) = self.selected.get(idx) {
                    self.positions[moved] = Position::Selected(idx);
                }

                self.positions[item] = Position::Unselected(self.unselected.len());
                self.unselected.push(item);

                true
            }
        }
    }

    /// Returns true if given item is selected.
    pub fn is_selected(&self, item: ItemId) -> bool {
        matches!(self.positions[item], Position::Selected(_))
    }

    /// Returns selected items.
    pub fn selected(&self) -> &[ItemId] {
        &self.selected
    }

    /// Returns unselected items.
    pub fn unselected(&self) -> &[ItemId] {
        &self.unselected
    }

    /// Returns the size of the item universe.
    pub fn size(&self) -> usize {
        self.positions.len()
    }

    fn ensure_in_range(&self, item: ItemId) -> Result<(), MoveError> {
        if item < self.size() {
            Ok(())
        } else {
            Err(MoveError::Structural { reason: format!("item {item} is out of universe of size {}", self.size()) })
        }
    }
}

impl Solution for SubsetSolution {
    type Move = Move;

    fn deep_copy(&self) -> Self {
        Self {
            selected: self.selected.clone(),
            unselected: self.unselected.clone(),
            positions: self.positions.clone(),
        }
    }

    fn apply(&mut self, mv: &Self::Move) -> Result<(), MoveError> {
        match *mv {
            Move::Addition { item } => {
                self.ensure_in_range(item)?;
                if self.is_selected(item) {
                    return Err(MoveError::Structural { reason: format!("item {item} is already selected") });
                }

                self.select(item);
                Ok(())
            }
            Move::Swap { insert, remove } => {
                self.ensure_in_range(insert)?;
                self.ensure_in_range(remove)?;
                if self.is_selected(insert) {
                    return Err(MoveError::Structural { reason: format!("item {insert} is already selected") });
                }
                if !self.is_selected(remove) {
                    return Err(MoveError::Structural { reason: format!("item {remove} is not selected") });
                }

                self.select(insert);
                self.deselect(remove);
                Ok(())
            }
            Move::SegmentReversal { .. } => Err(MoveError::UnsupportedKind { kind: mv.kind() }),
        }
    }
}
