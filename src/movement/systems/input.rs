//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::{ActionBindings, MovementInput};

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<ActionBindings>,
    mut input: ResMut<MovementInput>,
) {
    input.actions = bindings.resolve(&*keyboard);
}
