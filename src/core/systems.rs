//! Core domain: camera, pause toggling, and win handling.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::events::GoalReachedEvent;
use crate::core::resources::GameplayPaused;
use crate::core::state::GameState;

const PAUSE_SOURCE: &str = "pause";

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Escape toggles the gameplay pause. The pause menu itself lives outside
/// this crate; this only gates the simulation.
pub(crate) fn toggle_pause(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut paused: ResMut<GameplayPaused>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        if paused.sources.contains(PAUSE_SOURCE) {
            info!("Resumed");
            paused.unpause(PAUSE_SOURCE);
        } else {
            info!("Paused");
            paused.pause(PAUSE_SOURCE);
        }
    }
}

pub(crate) fn handle_goal_reached(
    mut events: MessageReader<GoalReachedEvent>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    for _ in events.read() {
        info!("Goal reached!");
        game_state.set(GameState::Won);
    }
}
