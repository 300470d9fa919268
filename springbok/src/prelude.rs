//! This module reimports commonly used types.

pub use crate::search::Direction;
pub use crate::search::Evaluation;
pub use crate::search::EvaluationError;
pub use crate::search::MoveError;
pub use crate::search::Neighborhood;
pub use crate::search::Objective;
pub use crate::search::SimpleEvaluation;
pub use crate::search::Solution;

pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::Float;
pub use crate::utils::InfoLogger;
pub use crate::utils::compare_floats;
pub use crate::utils::{Random, RandomGen};
