//! This module contains solution models for subset and permutation based problems.

mod subset;
pub use self::subset::*;

mod tour;
pub use self::tour::*;
