//! Loader for the controller RON file.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use bevy::prelude::*;
use ron::Options;
use serde::Deserialize;

use crate::movement::{GroundProbe, JumpPolicy, MovementTuning, default_keys};

/// Error type for config loading failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ConfigLoadError {}

/// Public tunables of the controller. Every field is optional in the file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub move_speed: f32,
    pub jump_force: f32,
    pub jump_policy: JumpPolicy,
    pub probe: GroundProbe,
    pub walk_epsilon: f32,
    /// Fixed simulation rate in ticks per second.
    pub fixed_hz: f64,
    pub input_keys: HashMap<String, Vec<KeyCode>>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        let tuning = MovementTuning::default();
        Self {
            move_speed: tuning.move_speed,
            jump_force: tuning.jump_force,
            jump_policy: tuning.jump_policy,
            probe: tuning.probe,
            walk_epsilon: tuning.walk_epsilon,
            fixed_hz: 50.0,
            input_keys: default_keys(),
        }
    }
}

impl ControllerConfig {
    pub fn tuning(&self) -> MovementTuning {
        MovementTuning {
            move_speed: self.move_speed,
            jump_force: self.jump_force,
            jump_policy: self.jump_policy,
            probe: self.probe,
            walk_epsilon: self.walk_epsilon,
        }
    }

    fn validate(&self) -> Result<(), String> {
        if !self.move_speed.is_finite() || self.move_speed < 0.0 {
            return Err(format!("move_speed must be >= 0, got {}", self.move_speed));
        }
        if !self.jump_force.is_finite() {
            return Err(format!("jump_force must be finite, got {}", self.jump_force));
        }
        if !self.walk_epsilon.is_finite() || self.walk_epsilon < 0.0 {
            return Err(format!("walk_epsilon must be >= 0, got {}", self.walk_epsilon));
        }
        if !self.fixed_hz.is_finite() || self.fixed_hz <= 0.0 {
            return Err(format!("fixed_hz must be > 0, got {}", self.fixed_hz));
        }
        Ok(())
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse and validate config text. `file` only labels errors.
pub fn parse_controller_config(
    contents: &str,
    file: &str,
) -> Result<ControllerConfig, ConfigLoadError> {
    let config: ControllerConfig =
        ron_options()
            .from_str(contents)
            .map_err(|e| ConfigLoadError {
                file: file.to_string(),
                message: format!("Parse error: {}", e),
            })?;

    config.validate().map_err(|message| ConfigLoadError {
        file: file.to_string(),
        message,
    })?;

    Ok(config)
}

pub fn load_controller_config(path: &Path) -> Result<ControllerConfig, ConfigLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_controller_config(&contents, &file_name)
}
