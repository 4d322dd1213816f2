//! This module builds a closed visiting tour for each cluster.
//!
//! # Nearest neighbor heuristic
//!
//! A tour starts at the first point of the cluster in input order and repeatedly moves to the
//! closest unvisited point. When all points are visited, the tour returns to its start. This is a
//! fast O(n²) construction without any improvement phase, so the tour is not guaranteed to be
//! optimal.

mod builder;
pub use self::builder::*;

mod matrix;
pub use self::matrix::DistanceMatrix;

mod tour;
pub use self::tour::*;
