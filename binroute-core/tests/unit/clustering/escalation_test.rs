use super::*;
use crate::helpers::models::*;
use crate::helpers::utils::*;

parameterized_test! {can_follow_transition_table, (state, verdict, expected), {
    assert_eq!(state.next(verdict), expected);
}}

can_follow_transition_table! {
    case01: (EscalationState::WithWeight, Verdict::Accepted, None),
    case02: (EscalationState::WithWeight, Verdict::Rejected, Some(EscalationState::GeographyOnly)),
    case03: (EscalationState::GeographyOnly, Verdict::Accepted, None),
    case04: (EscalationState::GeographyOnly, Verdict::Rejected, Some(EscalationState::DensityFallback)),
    case05: (EscalationState::DensityFallback, Verdict::Accepted, None),
    case06: (EscalationState::DensityFallback, Verdict::Rejected, None),
}

#[test]
fn can_accept_first_attempt_for_well_separated_groups() {
    let points = create_two_groups_points();

    let result = run_escalation(&points, &EscalationConfig::default(), &create_test_environment())
        .expect("should cluster");

    assert!(result.is_accepted);
    assert_eq!(result.steps.len(), 1);
    assert_eq!(result.state, Some(EscalationState::WithWeight));
    assert_eq!(result.steps[0].k, Some(2));
    assert_eq!(result.labeling.cluster_count(), 2);
    assert!(result.quality.is_some_and(|quality| quality.silhouette > 0.8));
    assert_eq!(result.reports.len(), 1);
}

#[test]
fn can_escalate_through_all_states_and_keep_best_candidate() {
    let points = create_two_groups_points();
    let config = EscalationConfig { acceptance_threshold: 1.1, ..EscalationConfig::default() };

    let result = run_escalation(&points, &config, &create_test_environment()).expect("should cluster");

    assert!(!result.is_accepted);
    assert_eq!(
        result.steps.iter().map(|step| step.state).collect::<Vec<_>>(),
        vec![EscalationState::WithWeight, EscalationState::GeographyOnly, EscalationState::DensityFallback]
    );
    assert!(result.steps.iter().all(|step| step.verdict == Verdict::Rejected));
    // triples are too small to form dense regions
    assert!(result.steps[2].error.is_some());
    assert!(matches!(result.state, Some(EscalationState::WithWeight) | Some(EscalationState::GeographyOnly)));
    assert_eq!(result.labeling.cluster_count(), 2);
    assert_eq!(result.labeling.len(), points.len());
}

#[test]
fn can_accept_density_fallback() {
    let mut points = create_points_from_coordinates(&[
        (0., 0.),
        (0., 0.001),
        (0.001, 0.),
        (0.001, 0.001),
        (0.0005, 0.0005),
        (1., 1.),
        (1., 1.001),
        (1.001, 1.),
        (1.001, 1.001),
        (1.0005, 1.0005),
    ]);
    points.iter_mut().for_each(|point| point.waste_kg = Some(10.));
    let config = EscalationConfig {
        selector: SelectorConfig { k_min: 20, k_max: 20, ..SelectorConfig::default() },
        ..EscalationConfig::default()
    };

    let result = run_escalation(&points, &config, &create_test_environment()).expect("should cluster");

    assert!(result.is_accepted);
    assert_eq!(result.state, Some(EscalationState::DensityFallback));
    assert_eq!(result.steps.len(), 3);
    assert_eq!(result.steps[0].error, Some(PlanningError::NoValidPartition { k_min: 20, k_max: 20 }.to_string()));
    assert_eq!(result.labeling.cluster_count(), 2);
    assert_eq!(result.labeling.noise_count(), 0);
}

#[test]
fn can_fallback_to_single_cluster_when_nothing_works() {
    let points = vec![Point::new(1, 28.7, 77.1, 10.)];

    let result = run_escalation(&points, &EscalationConfig::default(), &create_test_environment())
        .expect("should not fail");

    assert!(!result.is_accepted);
    assert_eq!(result.steps.len(), 3);
    assert_eq!(result.state, None);
    assert_eq!(result.quality, None);
    assert_eq!(result.labeling, Labeling::single(1));
}

#[test]
fn can_propagate_invalid_input() {
    let points = vec![Point::new(1, 0., 0., 1.), Point::new(1, 1., 1., 1.)];

    let result = run_escalation(&points, &EscalationConfig::default(), &create_test_environment());

    assert!(matches!(result, Err(PlanningError::InvalidInput { .. })));
}

#[test]
fn can_log_escalation_decisions() {
    let (environment, messages) = create_test_environment_with_logs();
    let config = EscalationConfig { acceptance_threshold: 1.1, ..EscalationConfig::default() };

    run_escalation(&create_two_groups_points(), &config, &environment).expect("should cluster");

    let messages = messages.lock().unwrap();
    assert!(messages.iter().any(|msg| msg.contains("escalating from with-weight fixed-k to geography-only fixed-k")));
    assert!(messages.iter().any(|msg| msg.contains("density-based fallback: failed")));
}

#[test]
fn can_escalate_past_fixed_k_states_when_quota_is_reached() {
    let points = create_two_groups_points();

    let result = run_escalation(&points, &EscalationConfig::default(), &create_test_environment_with_reached_quota())
        .expect("should not fail");

    assert_eq!(result.steps.len(), 3);
    result.steps[..2].iter().for_each(|step| {
        assert_eq!(step.verdict, Verdict::Rejected);
        assert!(step.error.as_ref().is_some_and(|err| err.starts_with("time quota reached")));
    });
    assert_eq!(result.steps[2].state, EscalationState::DensityFallback);
}
