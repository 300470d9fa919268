//! This module reimports a commonly used types.

// Reimport problem and solution models
pub use crate::models::common::{Distance, ItemId, Profit, Weight};

pub use crate::models::problem::AdjacencyGraph;
pub use crate::models::problem::DistanceMatrix;
pub use crate::models::problem::ItemTable;

pub use crate::models::solution::SubsetSolution;
pub use crate::models::solution::TourSolution;

pub use crate::search::Move;

// Reimport neighborhoods and objectives
pub use crate::search::neighborhoods::GreedyCliqueNeighborhood;
pub use crate::search::neighborhoods::SegmentReversalNeighborhood;
pub use crate::search::neighborhoods::SingleSwapNeighborhood;

pub use crate::search::objectives::AveragePairwiseObjective;
pub use crate::search::objectives::NearestEntryObjective;
pub use crate::search::objectives::TotalProfitObjective;
pub use crate::search::objectives::TourLengthObjective;

// Reimport springbok types
pub use springbok::prelude::Direction;
pub use springbok::prelude::Environment;
pub use springbok::prelude::Evaluation;
pub use springbok::prelude::EvaluationError;
pub use springbok::prelude::MoveError;
pub use springbok::prelude::Neighborhood;
pub use springbok::prelude::Objective;
pub use springbok::prelude::Random;
pub use springbok::prelude::Solution;
