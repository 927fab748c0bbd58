//! Locomotion domain: device sampling into capability reads.

use bevy::prelude::*;

use crate::locomotion::ActionInput;

pub(crate) fn read_action_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut input: ResMut<ActionInput>,
) {
    // Right/forward axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    input.move_axis = Vec2::new(x, y);
    input.sprint = keyboard.pressed(KeyCode::ShiftLeft);
    input.walk = keyboard.pressed(KeyCode::ControlLeft);
    input.jump = keyboard.pressed(KeyCode::Space);
    input.attack = mouse.pressed(MouseButton::Left) || keyboard.pressed(KeyCode::KeyJ);
}
