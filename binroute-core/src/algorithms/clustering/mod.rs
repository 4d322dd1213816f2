//! This module contains implementations of partitioning algorithms which work on numeric feature
//! vectors and produce labels aligned with the input.

mod dbscan;
pub use self::dbscan::create_density_labels;

mod hierarchical;
pub use self::hierarchical::create_ward_labels;

mod kmeans;
pub use self::kmeans::{KMeans, KMeansResult};
