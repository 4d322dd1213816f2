#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use crate::models::ClusterLabel;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A basic error type which, essentially, a wrapper on String type.
#[derive(Clone, Debug)]
pub struct GenericError(String);

/// A type alias for result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl fmt::Display for GenericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl<'a> From<&'a str> for GenericError {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}

impl From<std::io::Error> for GenericError {
    fn from(value: std::io::Error) -> Self {
        Self(value.to_string())
    }
}

impl From<PlanningError> for GenericError {
    fn from(value: PlanningError) -> Self {
        Self(value.to_string())
    }
}

impl PartialEq<Self> for GenericError {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for GenericError {}

impl Hash for GenericError {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

/// Specifies errors which can happen while planning collection routes.
#[derive(Clone, Debug, PartialEq)]
pub enum PlanningError {
    /// Input data is malformed: required columns or values are missing, ids are duplicated, etc.
    InvalidInput {
        /// A stage which detected the problem.
        stage: &'static str,
        /// Details about offending input.
        details: String,
    },

    /// Every candidate cluster count in the configured range produced a degenerate partition.
    NoValidPartition {
        /// Lower bound of the scanned range.
        k_min: usize,
        /// Upper bound of the scanned range.
        k_max: usize,
    },

    /// Computational quota was reached before any candidate could be scored.
    QuotaReached {
        /// A stage which was interrupted.
        stage: &'static str,
        /// Amount of candidates left unevaluated.
        interrupted: usize,
    },

    /// A cluster has no points at route building time.
    EmptyCluster {
        /// Cluster label.
        cluster: ClusterLabel,
    },

    /// A clustering strategy produced a single effective label or noise only.
    DegenerateLabeling {
        /// A name of the clustering strategy.
        strategy: String,
        /// Describes the kind of degeneracy.
        reason: String,
    },
}

impl PlanningError {
    /// Creates an invalid input error for given stage.
    pub fn invalid_input(stage: &'static str, details: impl Into<String>) -> Self {
        Self::InvalidInput { stage, details: details.into() }
    }

    /// Returns true if error means that the current strategy did not work and the caller can try
    /// another one. Malformed input is never recoverable.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::InvalidInput { .. })
    }
}

impl fmt::Display for PlanningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { stage, details } => write!(f, "invalid input at '{stage}' stage: {details}"),
            Self::NoValidPartition { k_min, k_max } => {
                write!(f, "no valid partition found for cluster counts in range [{k_min}, {k_max}]")
            }
            Self::QuotaReached { stage, interrupted } => {
                write!(f, "time quota reached at '{stage}' stage, {interrupted} candidate(s) left unevaluated")
            }
            Self::EmptyCluster { cluster } => write!(f, "cluster {cluster} has no points"),
            Self::DegenerateLabeling { strategy, reason } => {
                write!(f, "'{strategy}' clustering produced degenerate labeling: {reason}")
            }
        }
    }
}

impl std::error::Error for PlanningError {}
