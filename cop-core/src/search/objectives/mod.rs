//! This module contains objectives for subset and tour solutions. Every objective knows
//! how to evaluate a solution from scratch and, for supported move kinds, how to update
//! an existing evaluation incrementally.
//!
//! Incremental evaluation trusts its input: the move is expected to be structurally valid
//! for given solution, validity is enforced on application instead.

mod average_pairwise;
pub use self::average_pairwise::*;

mod nearest_entry;
pub use self::nearest_entry::*;

mod total_profit;
pub use self::total_profit::*;

mod tour_length;
pub use self::tour_length::*;
