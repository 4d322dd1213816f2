//! Core crate contains building blocks for cluster-aware ***waste collection route planning***.
//!
//! A planning run takes a table of collection points, partitions it into service clusters and
//! builds a closed visiting tour for every cluster:
//!
//! - the number of clusters is selected automatically by ranking candidate partitions with
//!   silhouette, Davies-Bouldin and Calinski-Harabasz scores
//! - when partition quality is poor, clustering escalates to geography only features and then to
//!   a density based strategy
//! - each cluster is routed with a nearest neighbor heuristic over geodesic distances
//! - tour distances are converted into fuel, cost and CO2 estimates and aggregated
//!
//! # Examples
//!
//! ```
//! use binroute_core::prelude::*;
//!
//! let points = vec![
//!     Point::new(1, 0., 0., 10.),
//!     Point::new(2, 0., 0.01, 10.),
//!     Point::new(3, 0.01, 0., 10.),
//!     Point::new(4, 1., 1., 10.),
//!     Point::new(5, 1., 1.01, 10.),
//!     Point::new(6, 1.01, 1., 10.),
//! ];
//!
//! let report = plan_routes(&points, &PlanningConfig::default(), &Environment::new_silent())?;
//!
//! assert_eq!(report.summary.clusters, 2);
//! assert_eq!(report.summary.points, 6);
//! # Ok::<(), PlanningError>(())
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod clustering;
pub mod metrics;
pub mod models;
pub mod planning;
pub mod prelude;
pub mod routing;
pub mod utils;
