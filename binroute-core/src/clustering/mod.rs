//! This module assigns collection points to service clusters.
//!
//! Clustering works on standardized feature vectors prepared from the point table. The number of
//! clusters is selected automatically by scanning a range of candidate counts and ranking them by
//! three internal quality scores. When the quality is not good enough, the escalation controller
//! retries with another feature set and, finally, with a density based strategy.

mod escalation;
pub use self::escalation::*;

mod features;
pub use self::features::*;

mod labeling;
pub use self::labeling::*;

mod quality;
pub use self::quality::*;

mod selector;
pub use self::selector::*;

mod strategies;
pub use self::strategies::*;
