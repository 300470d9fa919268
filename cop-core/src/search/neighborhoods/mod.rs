//! This module contains neighborhoods: generators of all moves applicable to a solution,
//! with uniform random sampling on top for stochastic engines.

mod greedy_clique;
pub use self::greedy_clique::*;

mod segment_reversal;
pub use self::segment_reversal::*;

mod single_swap;
pub use self::single_swap::*;
