//! This module reimports commonly used types.

// Reimport planning types
pub use crate::planning::PlanningConfig;
pub use crate::planning::PlanningReport;
pub use crate::planning::plan_routes;
pub use crate::planning::route_clusters;

pub use crate::clustering::EscalationConfig;
pub use crate::clustering::EscalationResult;
pub use crate::clustering::run_escalation;

pub use crate::metrics::ClusterRouteResult;
pub use crate::metrics::ResourceConfig;
pub use crate::metrics::SystemSummary;

pub use crate::models::ClusterLabel;
pub use crate::models::LabeledPoint;
pub use crate::models::Point;

// Reimport utils
pub use crate::utils::Environment;
pub use crate::utils::Float;
pub use crate::utils::GenericError;
pub use crate::utils::GenericResult;
pub use crate::utils::InfoLogger;
pub use crate::utils::PlanningError;
pub use crate::utils::compare_floats;
