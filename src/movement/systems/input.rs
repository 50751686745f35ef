//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::InputSnapshot;

pub(crate) fn sample_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<InputSnapshot>) {
    // Directional influence from opposing action pairs: pressing both
    // directions at full strength cancels to exactly zero.
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

    input.axis = Vec2::new(x, y);

    let jump_keys = [KeyCode::Space, KeyCode::KeyW, KeyCode::ArrowUp];
    input.jump_just_pressed = keyboard.any_just_pressed(jump_keys);
    input.jump_just_released = keyboard.any_just_released(jump_keys);
    input.jump_held = keyboard.any_pressed(jump_keys);

    input.dash_held =
        keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::KeyJ);
}
