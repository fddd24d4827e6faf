//! Config: tests for parsing and validating the controller RON file.

use std::path::Path;

use bevy::prelude::*;

use super::{ControllerConfig, load_controller_config, parse_controller_config};
use crate::movement::{
    ACTION_JUMP, ACTION_LEFT, ActionBindings, JumpPolicy, PROBE_TOLERANCE, ProbeMode,
};

#[test]
fn test_empty_file_uses_defaults() {
    let config = parse_controller_config("()", "inline").unwrap();
    let defaults = ControllerConfig::default();

    assert_eq!(config.move_speed, defaults.move_speed);
    assert_eq!(config.jump_force, defaults.jump_force);
    assert_eq!(config.jump_policy, JumpPolicy::DeltaToTarget);
    assert_eq!(config.probe.mode, ProbeMode::Edges);
    assert_eq!(config.probe.tolerance, 0.05);
    assert_eq!(config.fixed_hz, 50.0);
    assert_eq!(config.input_keys.len(), 4);
}

#[test]
fn test_full_config_parses() {
    let text = r#"(
        move_speed: 3.5,
        jump_force: 12.0,
        jump_policy: SetAbsolute,
        probe: (mode: Center),
        walk_epsilon: 0.02,
        fixed_hz: 60.0,
        input_keys: {
            "left": [ArrowLeft, KeyA],
            "jump": [Space],
        },
    )"#;
    let config = parse_controller_config(text, "inline").unwrap();

    let tuning = config.tuning();
    assert_eq!(tuning.move_speed, 3.5);
    assert_eq!(tuning.jump_force, 12.0);
    assert_eq!(tuning.jump_policy, JumpPolicy::SetAbsolute);
    assert_eq!(tuning.probe.mode, ProbeMode::Center);
    assert_eq!(tuning.probe.tolerance, PROBE_TOLERANCE);
    assert_eq!(tuning.walk_epsilon, 0.02);
    assert_eq!(config.fixed_hz, 60.0);

    let bindings = ActionBindings::new(config.input_keys.clone());
    assert_eq!(
        bindings.keys_for(ACTION_LEFT),
        &[KeyCode::ArrowLeft, KeyCode::KeyA]
    );
    assert_eq!(bindings.keys_for(ACTION_JUMP), &[KeyCode::Space]);
    // Replaced wholesale: no default "right" binding sneaks back in.
    assert!(bindings.keys_for("right").is_empty());
}

#[test]
fn test_ground_tolerance_is_not_configurable() {
    let config = parse_controller_config("(probe: (mode: Center))", "inline").unwrap();
    assert_eq!(config.probe.mode, ProbeMode::Center);
    assert_eq!(config.probe.tolerance, 0.05);

    let err = parse_controller_config("(probe: (tolerance: 2.0))", "inline").unwrap_err();
    assert!(err.message.starts_with("Parse error"));
}

#[test]
fn test_malformed_file_is_parse_error() {
    let err = parse_controller_config("(move_speed: fast)", "bad.ron").unwrap_err();
    assert_eq!(err.file, "bad.ron");
    assert!(err.message.starts_with("Parse error"));
}

#[test]
fn test_invalid_values_are_rejected() {
    for text in [
        "(move_speed: -1.0)",
        "(walk_epsilon: -0.01)",
        "(fixed_hz: 0.0)",
    ] {
        assert!(
            parse_controller_config(text, "inline").is_err(),
            "accepted {text}"
        );
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_controller_config(Path::new("does/not/exist.ron")).unwrap_err();
    assert!(err.message.starts_with("IO error"));
    assert!(err.to_string().contains("does/not/exist.ron"));
}

#[test]
fn test_shipped_config_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(super::DEFAULT_CONFIG_PATH);
    let config = load_controller_config(&path).unwrap();
    assert_eq!(config.input_keys.len(), 4);
    assert_eq!(config.probe.mode, ProbeMode::Edges);
    assert_eq!(config.probe.tolerance, PROBE_TOLERANCE);
}
