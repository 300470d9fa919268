//! This crate exposes solution, objective and neighborhood abstractions together with some
//! helper functionality which can be used to build a local search based solver for
//! combinatorial optimization problems.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod prelude;
pub mod search;
pub mod utils;
