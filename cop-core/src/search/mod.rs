//! This module contains concrete moves, objectives and neighborhoods for the problem
//! models: the parts which a local search engine combines into an actual solver.

mod moves;
pub use self::moves::*;

pub mod neighborhoods;
pub mod objectives;
