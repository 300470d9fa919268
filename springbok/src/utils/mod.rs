//! This module contains helper functionality.

mod comparison;
pub use self::comparison::*;

mod environment;
pub use self::environment::*;

mod iterators;
pub use self::iterators::*;

mod parallel;
pub use self::parallel::*;

mod random;
pub use self::random::*;

mod types;
pub use self::types::*;
