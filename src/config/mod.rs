//! Controller configuration loaded from RON at startup.

mod loader;

#[cfg(test)]
mod tests;

pub use loader::{
    ConfigLoadError, ControllerConfig, load_controller_config, parse_controller_config,
};

use std::path::PathBuf;

use bevy::prelude::*;

use crate::movement::ActionBindings;

pub const DEFAULT_CONFIG_PATH: &str = "assets/data/controller.ron";

/// Loads the controller config and installs the tuning, bindings and fixed
/// timestep. Falls back to defaults when the file cannot be used.
pub struct ConfigPlugin {
    pub path: PathBuf,
}

impl Default for ConfigPlugin {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }
}

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        let config = match load_controller_config(&self.path) {
            Ok(config) => {
                info!(
                    "Loaded controller config from {}: move_speed={}, jump_force={}, policy={:?}, probe={:?}",
                    self.path.display(),
                    config.move_speed,
                    config.jump_force,
                    config.jump_policy,
                    config.probe.mode
                );
                config
            }
            Err(e) => {
                warn!("{}; using default controller config", e);
                ControllerConfig::default()
            }
        };

        app.insert_resource(Time::<Fixed>::from_hz(config.fixed_hz))
            .insert_resource(ActionBindings::new(config.input_keys.clone()))
            .insert_resource(config.tuning());
    }
}
