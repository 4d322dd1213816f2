//! Escalation controller: a finite state machine which retries clustering with other feature sets
//! and strategies while partition quality stays below the acceptance threshold.

#[cfg(test)]
#[path = "../../tests/unit/clustering/escalation_test.rs"]
mod escalation_test;

use crate::clustering::*;
use crate::models::Point;
use crate::utils::{Environment, Float, PlanningError, compare_floats};
use std::fmt;

/// Specifies density based fallback parameters.
#[derive(Clone, Debug)]
pub struct DensityConfig {
    /// A neighborhood radius in the scaled feature space.
    pub eps: Float,
    /// Minimum amount of points within `eps` to form a dense core.
    pub min_samples: usize,
}

impl Default for DensityConfig {
    fn default() -> Self {
        Self { eps: 0.03, min_samples: 5 }
    }
}

/// Specifies escalation settings.
#[derive(Clone, Debug)]
pub struct EscalationConfig {
    /// A minimum silhouette score to accept a partition.
    pub acceptance_threshold: Float,
    /// Cluster count selection settings used by fixed-k states.
    pub selector: SelectorConfig,
    /// Density based fallback settings.
    pub density: DensityConfig,
}

impl Default for EscalationConfig {
    fn default() -> Self {
        Self { acceptance_threshold: 0.5, selector: SelectorConfig::default(), density: DensityConfig::default() }
    }
}

/// A state of the escalation controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EscalationState {
    /// Fixed-k auto selection with waste weight included into features.
    WithWeight,
    /// Fixed-k auto selection with geography only features.
    GeographyOnly,
    /// Density based clustering.
    DensityFallback,
}

/// A verdict about the quality of an attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Quality is at or above the acceptance threshold.
    Accepted,
    /// Quality is below the threshold or the attempt failed.
    Rejected,
}

impl EscalationState {
    /// Returns the initial state.
    pub fn initial() -> Self {
        Self::WithWeight
    }

    /// A transition table: returns the next state or `None` when the controller should stop.
    pub fn next(self, verdict: Verdict) -> Option<Self> {
        match (self, verdict) {
            (_, Verdict::Accepted) => None,
            (Self::WithWeight, Verdict::Rejected) => Some(Self::GeographyOnly),
            (Self::GeographyOnly, Verdict::Rejected) => Some(Self::DensityFallback),
            (Self::DensityFallback, Verdict::Rejected) => None,
        }
    }
}

impl fmt::Display for EscalationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::WithWeight => "with-weight fixed-k",
            Self::GeographyOnly => "geography-only fixed-k",
            Self::DensityFallback => "density-based fallback",
        })
    }
}

/// A record about one escalation attempt.
#[derive(Clone, Debug)]
pub struct EscalationStep {
    /// A state in which the attempt was made.
    pub state: EscalationState,
    /// Selected cluster count for fixed-k states.
    pub k: Option<usize>,
    /// Quality of the attempt labeling, if it could be evaluated.
    pub quality: Option<ClusterQuality>,
    /// A verdict about the attempt.
    pub verdict: Verdict,
    /// An error message if the attempt failed.
    pub error: Option<String>,
}

/// A final result of escalation.
#[derive(Clone, Debug)]
pub struct EscalationResult {
    /// The chosen labeling, always aligned with the input points.
    pub labeling: Labeling,
    /// A state which produced the chosen labeling, `None` when no attempt produced a labeling.
    pub state: Option<EscalationState>,
    /// Quality of the chosen labeling.
    pub quality: Option<ClusterQuality>,
    /// True if the chosen labeling met the acceptance threshold.
    pub is_accepted: bool,
    /// All attempts in the order they were made.
    pub steps: Vec<EscalationStep>,
    /// Quality reports of all cluster count scans.
    pub reports: Vec<QualityReport>,
}

type Candidate = (EscalationState, Labeling, Option<ClusterQuality>);

struct Attempt {
    labeling: Labeling,
    quality: Option<ClusterQuality>,
    k: Option<usize>,
    report: Option<QualityReport>,
}

/// Runs clustering escalation over the points and always returns a usable labeling unless input
/// is malformed. Makes at most three attempts.
pub fn run_escalation(
    points: &[Point],
    config: &EscalationConfig,
    environment: &Environment,
) -> Result<EscalationResult, PlanningError> {
    validate_points(points)?;

    let mut steps = Vec::new();
    let mut reports = Vec::new();
    let mut candidates: Vec<Candidate> = Vec::new();
    let mut state = Some(EscalationState::initial());

    while let Some(current) = state {
        environment.log(&format!("clustering attempt: {current}"));

        let (verdict, step) = match run_attempt(current, points, config, environment) {
            Ok(attempt) => {
                let score = attempt.quality.map(|quality| quality.silhouette);
                let verdict = match score {
                    Some(score) if score >= config.acceptance_threshold => Verdict::Accepted,
                    _ => Verdict::Rejected,
                };

                environment.log(&format!(
                    "{current}: silhouette={} is {} threshold {:.3}",
                    score.map_or("n/a".to_string(), |score| format!("{score:.3}")),
                    if verdict == Verdict::Accepted { "at or above" } else { "below" },
                    config.acceptance_threshold
                ));

                let step =
                    EscalationStep { state: current, k: attempt.k, quality: attempt.quality, verdict, error: None };
                reports.extend(attempt.report);
                candidates.push((current, attempt.labeling, attempt.quality));

                (verdict, step)
            }
            Err(err) if err.is_recoverable() => {
                environment.log(&format!("{current}: failed and treated as below threshold: {err}"));

                let step = EscalationStep {
                    state: current,
                    k: None,
                    quality: None,
                    verdict: Verdict::Rejected,
                    error: Some(err.to_string()),
                };

                (Verdict::Rejected, step)
            }
            Err(err) => return Err(err),
        };

        steps.push(step);

        let next = current.next(verdict);
        if let Some(next) = next {
            environment.log(&format!("escalating from {current} to {next}"));
        }
        state = next;
    }

    let is_accepted = steps.last().is_some_and(|step| step.verdict == Verdict::Accepted);
    let chosen = if is_accepted { candidates.pop() } else { take_best_candidate(candidates) };

    let result = match chosen {
        Some((state, labeling, quality)) => {
            EscalationResult { labeling, state: Some(state), quality, is_accepted, steps, reports }
        }
        None => {
            environment.log("no clustering attempt produced a labeling, all points are put into a single cluster");
            EscalationResult {
                labeling: Labeling::single(points.len()),
                state: None,
                quality: None,
                is_accepted,
                steps,
                reports,
            }
        }
    };

    environment.log(&format!(
        "clustering finished after {} attempt(s): {} cluster(s), {} noise point(s), accepted: {}",
        result.steps.len(),
        result.labeling.cluster_count(),
        result.labeling.noise_count(),
        result.is_accepted
    ));

    Ok(result)
}

fn run_attempt(
    state: EscalationState,
    points: &[Point],
    config: &EscalationConfig,
    environment: &Environment,
) -> Result<Attempt, PlanningError> {
    match state {
        EscalationState::WithWeight | EscalationState::GeographyOnly => {
            let features = prepare_features(points, state == EscalationState::WithWeight)?;
            let scan = select_cluster_count(&features, &config.selector, environment)?;

            Ok(Attempt {
                labeling: scan.selection.labeling,
                quality: Some(scan.selection.quality),
                k: Some(scan.selection.k),
                report: Some(scan.report),
            })
        }
        EscalationState::DensityFallback => {
            let strategy = DensityBased { eps: config.density.eps, min_samples: config.density.min_samples };
            let labeling = strategy.cluster_non_degenerate(&prepare_features(points, true)?)?;

            // density clusters are judged by their geographic separation
            let quality = evaluate_quality(&prepare_features(points, false)?, &labeling);

            Ok(Attempt { labeling, quality, k: None, report: None })
        }
    }
}

/// Takes the candidate with the highest silhouette, the earliest one wins ties. Candidates without
/// quality are used only if nothing else is available.
fn take_best_candidate(candidates: Vec<Candidate>) -> Option<Candidate> {
    candidates.into_iter().fold(None, |best, current| {
        let is_better = match (&best, &current.2) {
            (None, _) => true,
            (Some((_, _, None)), Some(_)) => true,
            (Some((_, _, Some(best_quality))), Some(quality)) => {
                compare_floats(quality.silhouette, best_quality.silhouette).is_gt()
            }
            _ => false,
        };

        if is_better { Some(current) } else { best }
    })
}
