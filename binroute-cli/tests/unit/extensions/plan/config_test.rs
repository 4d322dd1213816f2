use super::*;

fn read_from_str(content: &str) -> Result<Config, String> {
    read_config(BufReader::new(content.as_bytes()))
}

#[test]
fn can_use_defaults_for_empty_config() {
    let config = create_planning_config(&read_from_str("{}").expect("should read config"));
    let defaults = PlanningConfig::default();

    assert_eq!(config.escalation.acceptance_threshold, defaults.escalation.acceptance_threshold);
    assert_eq!(config.escalation.selector.k_max, defaults.escalation.selector.k_max);
    assert_eq!(config.resources, defaults.resources);
    assert_eq!(config.max_cluster_size, 5000);
}

#[test]
fn can_override_only_specified_values() {
    let content = r#"{
        "clustering": {
            "acceptanceThreshold": 0.4,
            "kMax": 6,
            "density": { "minSamples": 3 }
        },
        "resources": { "fuelPrice": 100.5 },
        "routing": { "maxClusterSize": 100 }
    }"#;

    let config = create_planning_config(&read_from_str(content).expect("should read config"));

    assert_eq!(config.escalation.acceptance_threshold, 0.4);
    assert_eq!(config.escalation.selector.k_min, 2);
    assert_eq!(config.escalation.selector.k_max, 6);
    assert_eq!(config.escalation.selector.seed, 42);
    assert_eq!(config.escalation.density.eps, 0.03);
    assert_eq!(config.escalation.density.min_samples, 3);
    assert_eq!(config.resources.fuel_efficiency, 4.);
    assert_eq!(config.resources.fuel_price, 100.5);
    assert_eq!(config.max_cluster_size, 100);
}

#[test]
fn can_fail_on_malformed_config() {
    let result = read_from_str(r#"{ "clustering": { "kMax": "ten" } }"#);

    assert!(result.is_err_and(|err| err.starts_with("cannot deserialize config")));
}
