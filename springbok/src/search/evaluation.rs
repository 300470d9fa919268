#[cfg(test)]
#[path = "../../tests/unit/search/evaluation_test.rs"]
mod evaluation_test;

use crate::utils::Float;

/// Represents an objective value of a concrete solution.
///
/// Implementations are free to carry extra metadata (e.g. per item caches) next to the scalar
/// value to make incremental evaluation cheap. An evaluation is bound to the solution state it
/// was produced from and gets stale once the solution is modified.
pub trait Evaluation: Send + Sync {
    /// Returns a scalar value of the evaluation.
    fn value(&self) -> Float;
}

/// An evaluation which carries a scalar value and nothing else.
#[derive(Clone, Debug, PartialEq)]
pub struct SimpleEvaluation {
    value: Float,
}

impl SimpleEvaluation {
    /// Creates an instance of `SimpleEvaluation`.
    pub fn new(value: Float) -> Self {
        Self { value }
    }
}

impl Evaluation for SimpleEvaluation {
    fn value(&self) -> Float {
        self.value
    }
}
