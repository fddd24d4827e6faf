//! Movement domain: logical action bindings.
//!
//! An action is a name bound to one or more key codes. It is active while any
//! of its keys is held; names with no binding are simply never active.

use std::collections::HashMap;

use bevy::prelude::*;

pub const ACTION_LEFT: &str = "left";
pub const ACTION_RIGHT: &str = "right";
pub const ACTION_JUMP: &str = "jump";
pub const ACTION_RESET: &str = "reset";

/// Anything that can answer "is this key held right now".
pub trait KeySource {
    fn is_pressed(&self, code: KeyCode) -> bool;
}

impl KeySource for ButtonInput<KeyCode> {
    fn is_pressed(&self, code: KeyCode) -> bool {
        self.pressed(code)
    }
}

/// Immutable action table, built once from config.
#[derive(Resource, Debug, Clone)]
pub struct ActionBindings {
    keys: HashMap<String, Vec<KeyCode>>,
}

impl Default for ActionBindings {
    fn default() -> Self {
        Self::new(default_keys())
    }
}

/// `left: A`, `right: D`, `jump: W | Space`, `reset: R`.
pub fn default_keys() -> HashMap<String, Vec<KeyCode>> {
    HashMap::from([
        (ACTION_LEFT.to_string(), vec![KeyCode::KeyA]),
        (ACTION_RIGHT.to_string(), vec![KeyCode::KeyD]),
        (ACTION_JUMP.to_string(), vec![KeyCode::KeyW, KeyCode::Space]),
        (ACTION_RESET.to_string(), vec![KeyCode::KeyR]),
    ])
}

impl ActionBindings {
    pub fn new(keys: HashMap<String, Vec<KeyCode>>) -> Self {
        Self { keys }
    }

    pub fn is_active(&self, action: &str, input: &impl KeySource) -> bool {
        self.keys
            .get(action)
            .is_some_and(|codes| codes.iter().any(|&code| input.is_pressed(code)))
    }

    pub fn keys_for(&self, action: &str) -> &[KeyCode] {
        self.keys.get(action).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Snapshot of the controller's four actions for one tick.
    pub fn resolve(&self, input: &impl KeySource) -> ActiveActions {
        ActiveActions {
            left: self.is_active(ACTION_LEFT, input),
            right: self.is_active(ACTION_RIGHT, input),
            jump: self.is_active(ACTION_JUMP, input),
            reset: self.is_active(ACTION_RESET, input),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveActions {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub reset: bool,
}
