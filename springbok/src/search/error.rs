#[cfg(test)]
#[path = "../../tests/unit/search/error_test.rs"]
mod error_test;

use thiserror::Error;

/// An error which is returned when a move cannot be applied to a solution.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MoveError {
    /// A move refers to a solution state which does not hold, e.g. adds an item which
    /// is already selected or points to a position outside of the solution.
    #[error("move violates solution structure: {reason}")]
    Structural {
        /// An explanation of the violation.
        reason: String,
    },

    /// A move kind makes no sense for the topology of the target solution, e.g. a segment
    /// reversal applied to an unordered subset.
    #[error("move kind '{kind}' is not applicable to the solution")]
    UnsupportedKind {
        /// A name of the move kind.
        kind: &'static str,
    },
}

/// An error which is returned by incremental evaluation.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum EvaluationError {
    /// An objective does not know how to evaluate given move kind incrementally.
    /// This is different from a structural violation: the move itself can be valid
    /// for the solution, but the objective has no delta for it.
    #[error("'{objective}' cannot delta evaluate move kind '{kind}'")]
    IncompatibleMove {
        /// A name of the objective.
        objective: &'static str,
        /// A name of the move kind.
        kind: &'static str,
    },

    /// A move application failure surfaced while evaluating a solution copy.
    #[error(transparent)]
    Move(#[from] MoveError),
}
