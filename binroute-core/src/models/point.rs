#[cfg(test)]
#[path = "../../tests/unit/models/point_test.rs"]
mod point_test;

use crate::utils::{Float, PointId};
use std::fmt;

/// A geolocated waste collection point.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    /// A unique id of the point.
    pub id: PointId,
    /// Latitude in degrees.
    pub latitude: Float,
    /// Longitude in degrees.
    pub longitude: Float,
    /// An amount of waste to collect, absent when the point table has no weight column.
    pub waste_kg: Option<Float>,
}

impl Point {
    /// Creates a new point with waste weight.
    pub fn new(id: PointId, latitude: Float, longitude: Float, waste_kg: Float) -> Self {
        Self { id, latitude, longitude, waste_kg: Some(waste_kg) }
    }

    /// Creates a new point without waste weight.
    pub fn new_unweighted(id: PointId, latitude: Float, longitude: Float) -> Self {
        Self { id, latitude, longitude, waste_kg: None }
    }
}

/// A cluster assignment of a point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClusterLabel {
    /// A point belongs to the cluster with given id.
    Cluster(usize),
    /// A point is not a part of any dense region.
    Noise,
}

impl ClusterLabel {
    /// A value which represents noise in tabular output.
    pub const NOISE_VALUE: i64 = -1;

    /// Returns cluster id unless the label is noise.
    pub fn cluster_id(&self) -> Option<usize> {
        match self {
            Self::Cluster(id) => Some(*id),
            Self::Noise => None,
        }
    }

    /// Returns true if the label is noise.
    pub fn is_noise(&self) -> bool {
        matches!(self, Self::Noise)
    }

    /// Returns tabular representation of the label.
    pub fn as_value(&self) -> i64 {
        match self {
            Self::Cluster(id) => *id as i64,
            Self::Noise => Self::NOISE_VALUE,
        }
    }

    /// Restores the label from its tabular representation: any negative value is noise.
    pub fn from_value(value: i64) -> Self {
        if value < 0 { Self::Noise } else { Self::Cluster(value as usize) }
    }
}

impl fmt::Display for ClusterLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cluster(id) => write!(f, "{id}"),
            Self::Noise => write!(f, "noise"),
        }
    }
}

/// A point with its cluster assignment.
#[derive(Clone, Debug, PartialEq)]
pub struct LabeledPoint {
    /// An original point.
    pub point: Point,
    /// An assigned cluster.
    pub cluster: ClusterLabel,
}
