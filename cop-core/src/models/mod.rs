//! A collection of models to represent problem data and solutions of combinatorial
//! optimization problems.

pub mod common;
pub mod problem;
pub mod solution;
