//! Provides helper functionality to analyze point tables.

mod clusters;
pub use self::clusters::*;
