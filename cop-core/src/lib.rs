//! Core crate contains solution, move and objective models for classic combinatorial
//! optimization problems: subset selection, knapsack, maximum clique and traveling salesman.
//! The models are building blocks for local search metaheuristics: solutions are transformed
//! by small typed moves which objectives can evaluate incrementally.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod models;
pub mod prelude;
pub mod search;
