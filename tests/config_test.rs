/*!
 * Configuration Tests
 * Loading simulation inputs from JSON files
 */

use pretty_assertions::assert_eq;
use round_robin_sim::{config::ConfigError, Algorithm, Process, SimulationConfig};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_full_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("workload.json");
    fs::write(
        &path,
        r#"{
            "algorithm": "enhanced",
            "quantum": 2,
            "processes": [
                { "name": "A", "arrival_time": 0, "burst_time": 3 },
                { "name": "B", "arrival_time": 1, "burst_time": 4 }
            ]
        }"#,
    )
    .unwrap();

    let config = SimulationConfig::from_file(&path).unwrap();

    assert_eq!(
        config,
        SimulationConfig {
            algorithm: Algorithm::Enhanced,
            quantum: 2,
            processes: vec![Process::new("A", 0, 3), Process::new("B", 1, 4)],
        }
    );

    let result = config
        .algorithm
        .simulate(&config.processes, config.quantum)
        .unwrap();
    assert_eq!(result.final_processes().len(), 2);
}

#[test]
fn test_empty_object_is_the_default_workload() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("empty.json");
    fs::write(&path, "{}").unwrap();

    assert_eq!(
        SimulationConfig::from_file(&path).unwrap(),
        SimulationConfig::default()
    );
}

#[test]
fn test_malformed_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    fs::write(&path, r#"{ "quantum": "three" }"#).unwrap();

    let err = SimulationConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn test_config_round_trips_through_json() {
    let config = SimulationConfig::default();
    let json = serde_json::to_string(&config).unwrap();

    assert!(json.contains(r#""algorithm":"standard""#));
    assert_eq!(
        serde_json::from_str::<SimulationConfig>(&json).unwrap(),
        config
    );
}
