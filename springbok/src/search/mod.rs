//! This module contains a local search abstraction: solutions modified by moves, objectives
//! which evaluate moves incrementally, and neighborhoods which generate moves.

mod error;
pub use self::error::*;

mod evaluation;
pub use self::evaluation::*;

use crate::utils::{Float, Random};

/// Specifies whether an objective is to be minimized or maximized.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    /// Smaller values are better.
    Minimize,
    /// Bigger values are better.
    Maximize,
}

impl Direction {
    /// Returns true if the left value is better than the right one in this direction.
    pub fn is_better(&self, left: Float, right: Float) -> bool {
        match self {
            Direction::Minimize => left < right,
            Direction::Maximize => left > right,
        }
    }
}

/// Represents a solution of a combinatorial optimization problem.
pub trait Solution: Send + Sync {
    /// A move type which describes a modification of the solution.
    type Move;

    /// Creates a deep copy of the solution.
    fn deep_copy(&self) -> Self;

    /// Applies given move to the solution modifying it in place. The solution stays
    /// unchanged when an error is returned.
    fn apply(&mut self, mv: &Self::Move) -> Result<(), MoveError>;
}

/// Evaluates solutions of a concrete problem, both from scratch and incrementally.
///
/// The central contract: for any solution, its evaluation and a move applicable to it,
/// [`Objective::delta_evaluate`] returns the same value as a full [`Objective::evaluate`]
/// of the modified solution.
pub trait Objective: Send + Sync {
    /// A solution type which can be evaluated.
    type Solution: Solution;
    /// A read only problem data type used by evaluation.
    type Data;
    /// A concrete evaluation type produced by the objective.
    type Evaluation: Evaluation;

    /// Returns an optimization direction of the objective.
    fn direction(&self) -> Direction;

    /// Evaluates given solution from scratch.
    fn evaluate(&self, solution: &Self::Solution, data: &Self::Data) -> Self::Evaluation;

    /// Evaluates the solution which would result from applying given move to given solution,
    /// reusing the evaluation of the current solution. Neither the solution nor the passed
    /// evaluation is modified.
    ///
    /// The default implementation falls back to a full evaluation of a modified solution copy.
    fn delta_evaluate(
        &self,
        mv: &<Self::Solution as Solution>::Move,
        solution: &Self::Solution,
        _evaluation: &Self::Evaluation,
        data: &Self::Data,
    ) -> Result<Self::Evaluation, EvaluationError> {
        let mut next = solution.deep_copy();
        next.apply(mv)?;

        Ok(self.evaluate(&next, data))
    }
}

/// Generates moves which transform a solution into its neighbors.
pub trait Neighborhood: Send + Sync {
    /// A solution type for which moves are generated.
    type Solution: Solution;

    /// Returns a lazy iterator over all moves applicable to given solution. The iterator
    /// borrows the solution, so the solution cannot be modified till the iterator is dropped.
    fn moves<'a>(
        &'a self,
        solution: &'a Self::Solution,
    ) -> Box<dyn Iterator<Item = <Self::Solution as Solution>::Move> + 'a>;

    /// Returns a single move drawn uniformly from the neighborhood of given solution or
    /// `None` if the solution has no neighbors.
    fn random_move(
        &self,
        solution: &Self::Solution,
        random: &(dyn Random + Send + Sync),
    ) -> Option<<Self::Solution as Solution>::Move>;
}
