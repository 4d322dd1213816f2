//! This module contains some statistic and vector math related functionality.

mod distance;
pub use self::distance::*;

mod statistics;
pub use self::statistics::*;
