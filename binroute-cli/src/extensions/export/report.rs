#[cfg(test)]
#[path = "../../../tests/unit/extensions/export/report_test.rs"]
mod report_test;

use binroute_core::clustering::{ClusterQuality, EscalationStep, QualityReport, Verdict};
use binroute_core::metrics::{ClusterRouteResult, SystemSummary};
use binroute_core::planning::PlanningReport;
use binroute_core::utils::GenericError;
use serde::Serialize;
use std::io::{BufWriter, Write};

/// A planning report in a serializable form.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// System wide totals.
    pub summary: Summary,
    /// Per-cluster routes.
    pub clusters: Vec<ClusterRoute>,
    /// Clustering escalation trace.
    pub escalation: Escalation,
    /// Run duration in milliseconds.
    pub duration_ms: u128,
}

/// System wide totals.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Amount of cluster routes.
    pub clusters: usize,
    /// Amount of routed points.
    pub points: usize,
    /// Amount of noise points routed as a separate group.
    pub noise_points: usize,
    /// Total distance in kilometers.
    pub distance_km: f64,
    /// Total fuel in liters.
    pub fuel_liters: f64,
    /// Total fuel cost.
    pub cost_currency: f64,
    /// Total CO2 in kilograms.
    pub co2_kg: f64,
    /// Amount of points which were not routed.
    pub skipped_points: usize,
    /// Amount of clusters which were not routed.
    pub skipped_clusters: usize,
}

/// A route of a single cluster.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterRoute {
    /// Cluster id, `-1` for the noise group.
    pub cluster: i64,
    /// Amount of points in the cluster.
    pub points: usize,
    /// Tour distance in kilometers.
    pub distance_km: f64,
    /// Consumed fuel in liters.
    pub fuel_liters: f64,
    /// Fuel cost.
    pub cost_currency: f64,
    /// Emitted CO2 in kilograms.
    pub co2_kg: f64,
    /// Point ids in visit order, the first one is repeated at the end.
    pub tour: Vec<i64>,
}

/// Clustering escalation trace.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Escalation {
    /// True if the final labeling met the acceptance threshold.
    pub accepted: bool,
    /// A state which produced the final labeling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Quality of the final labeling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<Quality>,
    /// Amount of clusters in the final labeling.
    pub clusters: usize,
    /// Amount of noise points in the final labeling.
    pub noise: usize,
    /// All attempts in order.
    pub steps: Vec<Step>,
    /// Cluster count scans of fixed-k attempts.
    pub quality_reports: Vec<ScanReport>,
}

/// Partition quality scores.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quality {
    /// Silhouette score.
    pub silhouette: f64,
    /// Davies-Bouldin index.
    pub davies_bouldin: f64,
    /// Calinski-Harabasz index.
    pub calinski_harabasz: f64,
}

/// One escalation attempt.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Escalation state name.
    pub state: String,
    /// Selected cluster count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub k: Option<usize>,
    /// Attempt quality.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<Quality>,
    /// True if the attempt was accepted.
    pub accepted: bool,
    /// An error message of a failed attempt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Candidates of one cluster count scan.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    /// Names of used feature columns.
    pub features: Vec<String>,
    /// Amount of candidates skipped as degenerate.
    pub skipped: usize,
    /// Amount of candidates left unevaluated because the time quota was reached.
    pub interrupted: usize,
    /// Evaluated candidates ordered by `k`.
    pub candidates: Vec<ScanCandidate>,
}

/// An evaluated candidate cluster count.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanCandidate {
    /// Candidate cluster count.
    pub k: usize,
    /// Candidate quality.
    #[serde(flatten)]
    pub quality: Quality,
}

impl From<&ClusterQuality> for Quality {
    fn from(quality: &ClusterQuality) -> Self {
        Self {
            silhouette: quality.silhouette,
            davies_bouldin: quality.davies_bouldin,
            calinski_harabasz: quality.calinski_harabasz,
        }
    }
}

impl From<&SystemSummary> for Summary {
    fn from(summary: &SystemSummary) -> Self {
        Self {
            clusters: summary.clusters,
            points: summary.points,
            noise_points: summary.noise_points,
            distance_km: summary.total_distance_km,
            fuel_liters: summary.total_fuel_liters,
            cost_currency: summary.total_cost_currency,
            co2_kg: summary.total_co2_kg,
            skipped_points: summary.skipped_points,
            skipped_clusters: summary.skipped_clusters,
        }
    }
}

impl From<&ClusterRouteResult> for ClusterRoute {
    fn from(route: &ClusterRouteResult) -> Self {
        Self {
            cluster: route.cluster.as_value(),
            points: route.points,
            distance_km: route.distance_km,
            fuel_liters: route.fuel_liters,
            cost_currency: route.cost_currency,
            co2_kg: route.co2_kg,
            tour: route.tour.ids().to_vec(),
        }
    }
}

impl From<&EscalationStep> for Step {
    fn from(step: &EscalationStep) -> Self {
        Self {
            state: step.state.to_string(),
            k: step.k,
            quality: step.quality.as_ref().map(Quality::from),
            accepted: step.verdict == Verdict::Accepted,
            error: step.error.clone(),
        }
    }
}

impl From<&QualityReport> for ScanReport {
    fn from(report: &QualityReport) -> Self {
        Self {
            features: report.feature_set.columns().iter().map(|column| column.to_string()).collect(),
            skipped: report.skipped,
            interrupted: report.interrupted,
            candidates: report
                .candidates
                .iter()
                .map(|candidate| ScanCandidate { k: candidate.k, quality: Quality::from(&candidate.quality) })
                .collect(),
        }
    }
}

impl From<&PlanningReport> for Report {
    fn from(report: &PlanningReport) -> Self {
        let escalation = &report.escalation;

        Self {
            summary: Summary::from(&report.summary),
            clusters: report.routes.iter().map(ClusterRoute::from).collect(),
            escalation: Escalation {
                accepted: escalation.is_accepted,
                state: escalation.state.map(|state| state.to_string()),
                quality: escalation.quality.as_ref().map(Quality::from),
                clusters: escalation.labeling.cluster_count(),
                noise: escalation.labeling.noise_count(),
                steps: escalation.steps.iter().map(Step::from).collect(),
                quality_reports: escalation.reports.iter().map(ScanReport::from).collect(),
            },
            duration_ms: report.duration_ms,
        }
    }
}

/// Serializes planning report as a pretty printed json.
pub fn write_report<W: Write>(writer: BufWriter<W>, report: &PlanningReport) -> Result<(), GenericError> {
    serde_json::to_writer_pretty(writer, &Report::from(report))
        .map_err(|err| format!("cannot serialize report: '{err}'").into())
}
