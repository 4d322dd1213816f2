#[cfg(test)]
#[path = "../../tests/unit/clustering/features_test.rs"]
mod features_test;

use crate::algorithms::math::standardize;
use crate::models::Point;
use crate::utils::{Float, PlanningError};
use rustc_hash::FxHashSet;
use std::fmt;

const STAGE: &str = "feature preparation";

/// Specifies which point attributes are used as clustering features.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureSet {
    /// Latitude, longitude and waste weight.
    WithWeight,
    /// Latitude and longitude only.
    GeographyOnly,
}

impl FeatureSet {
    /// Returns names of the feature columns.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Self::WithWeight => &["latitude", "longitude", "waste_kg"],
            Self::GeographyOnly => &["latitude", "longitude"],
        }
    }
}

impl fmt::Display for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.columns().join("+").as_str())
    }
}

/// Standardized feature vectors, one per point and aligned with the input rows.
#[derive(Clone, Debug)]
pub struct FeatureMatrix {
    /// The feature set which was actually used.
    pub feature_set: FeatureSet,
    /// Scaled feature vectors.
    pub rows: Vec<Vec<Float>>,
}

impl FeatureMatrix {
    /// Returns amount of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Prepares standardized clustering features. Weight is included only when requested and every
/// point has it. Statistics are computed over the given points on each call.
pub fn prepare_features(points: &[Point], include_weight: bool) -> Result<FeatureMatrix, PlanningError> {
    validate_points(points)?;

    let has_weight = points.iter().all(|point| point.waste_kg.is_some_and(|waste| waste.is_finite()));
    let feature_set = if include_weight && has_weight { FeatureSet::WithWeight } else { FeatureSet::GeographyOnly };

    let mut columns = vec![
        points.iter().map(|point| point.latitude).collect::<Vec<_>>(),
        points.iter().map(|point| point.longitude).collect::<Vec<_>>(),
    ];

    if feature_set == FeatureSet::WithWeight {
        columns.push(points.iter().map(|point| point.waste_kg.unwrap_or_default()).collect());
    }

    columns.iter_mut().for_each(|column| standardize(column));

    let rows = (0..points.len()).map(|row| columns.iter().map(|column| column[row]).collect()).collect();

    Ok(FeatureMatrix { feature_set, rows })
}

/// Checks that point table is not empty, has valid coordinates and unique ids.
pub fn validate_points(points: &[Point]) -> Result<(), PlanningError> {
    if points.is_empty() {
        return Err(PlanningError::invalid_input(STAGE, "point table is empty"));
    }

    if let Some(point) = points.iter().find(|point| {
        !point.latitude.is_finite()
            || !point.longitude.is_finite()
            || point.latitude.abs() > 90.
            || point.longitude.abs() > 180.
    }) {
        return Err(PlanningError::invalid_input(
            STAGE,
            format!("point {} has invalid coordinates ({}, {})", point.id, point.latitude, point.longitude),
        ));
    }

    let mut ids = FxHashSet::default();
    if let Some(point) = points.iter().find(|point| !ids.insert(point.id)) {
        return Err(PlanningError::invalid_input(STAGE, format!("point id {} is not unique", point.id)));
    }

    Ok(())
}
