//! World domain: level geometry, hazards, checkpoints, goal, and the
//! spawn/respawn bookkeeping that consumes the death notification.

mod components;
mod resources;
mod spawn;
mod systems;

pub use components::{Checkpoint, Goalpoint, Hazard};
pub use resources::RespawnPoint;

use bevy::prelude::*;

use crate::core::{gameplay_active, GameState};
use crate::world::spawn::{setup_level, spawn_initial_player};
use crate::world::systems::{
    activate_checkpoints, apply_damage, handle_player_death, handle_retry, hazard_contact,
    reach_goal,
};

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RespawnPoint>()
            .add_systems(Startup, (setup_level, spawn_initial_player).chain())
            .add_systems(
                Update,
                (
                    hazard_contact,
                    activate_checkpoints,
                    reach_goal,
                    apply_damage,
                    handle_player_death,
                )
                    .chain()
                    .run_if(in_state(GameState::Run))
                    .run_if(gameplay_active),
            )
            .add_systems(Update, handle_retry.run_if(in_state(GameState::Run)));
    }
}
