//! Core domain: app-wide states, pause gating, and shared notifications.

mod events;
mod resources;
mod state;
mod systems;

pub use events::{CheckpointReachedEvent, DamageEvent, GoalReachedEvent, PlayerDiedEvent};
pub use resources::{gameplay_active, GameplayPaused};
pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::{handle_goal_reached, setup_camera, toggle_pause};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<GameplayPaused>()
            .add_message::<DamageEvent>()
            .add_message::<PlayerDiedEvent>()
            .add_message::<CheckpointReachedEvent>()
            .add_message::<GoalReachedEvent>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, toggle_pause)
            .add_systems(Update, handle_goal_reached);
    }
}
