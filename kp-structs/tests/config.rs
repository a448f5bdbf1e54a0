use kp_engine::{SolverConfig, Strategy, DEFAULT_MAX_TABLE_CELLS};
use kp_structs::config::RuntimeConfig;
use std::path::{Path, PathBuf};

#[test]
fn test_empty_config_uses_defaults() {
    let config = RuntimeConfig::load("{}").unwrap();
    assert_eq!(config, RuntimeConfig::default());
    assert_eq!(config.solver_config(), SolverConfig::default());
    assert_eq!(
        config.solver_config().max_table_cells,
        DEFAULT_MAX_TABLE_CELLS
    );
}

#[test]
fn test_partial_solver_config() {
    let config = RuntimeConfig::load(r#"{"solver": {"strategy": "recompute"}}"#).unwrap();
    let solver = config.solver_config();
    assert_eq!(solver.strategy, Strategy::Recompute);
    assert_eq!(solver.max_table_cells, DEFAULT_MAX_TABLE_CELLS);
}

#[test]
fn test_full_config() {
    let config = RuntimeConfig::load(
        r#"{"solver": {"strategy": "table", "max_table_cells": 5000}, "output_dir": "outputs"}"#,
    )
    .unwrap();
    assert_eq!(config.solver_config().max_table_cells, 5000);
    assert_eq!(config.output_dir().map(String::as_str), Some("outputs"));
}

#[test]
fn test_unknown_strategy_rejected() {
    let err = RuntimeConfig::load(r#"{"solver": {"strategy": "greedy"}}"#).unwrap_err();
    assert!(err.to_string().starts_with("Failed to parse config"));
}

#[test]
fn test_resolve_output_path() {
    let config = RuntimeConfig {
        solver: None,
        output_dir: Some("outputs".to_string()),
    };
    assert_eq!(
        config.resolve_output_path(Path::new("chosen_items.json")),
        PathBuf::from("outputs/chosen_items.json")
    );
    assert_eq!(
        config.resolve_output_path(Path::new("elsewhere/chosen_items.json")),
        PathBuf::from("elsewhere/chosen_items.json")
    );
    assert_eq!(
        RuntimeConfig::default().resolve_output_path(Path::new("chosen_items.json")),
        PathBuf::from("chosen_items.json")
    );
}
