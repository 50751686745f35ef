//! Movement domain: input sampling, the ability state machine, and the
//! motion integrator.
//!
//! Per-tick order is a schedule contract: input is sampled, the ground
//! sensor reports into the state machine, the countdowns tick, and only then
//! do the velocity rules run. The systems are registered as one chained
//! tuple so that contract cannot drift.

mod abilities;
mod components;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use abilities::{AbilityState, CoyotePhase};
pub use components::{GameLayer, Ground, MotionTimers, Player};
pub use resources::{InputSnapshot, MovementTuning};

use bevy::prelude::*;

use crate::core::{gameplay_active, GameState};
use crate::movement::systems::{
    apply_air_dash, apply_fast_fall, apply_gravity, apply_horizontal, apply_jump, cancel_air_dash,
    detect_ground, halt_dead, sample_input, update_facing, update_timers,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<InputSnapshot>()
            .add_systems(
                Update,
                (
                    sample_input,
                    detect_ground,
                    update_timers,
                    apply_horizontal,
                    apply_gravity,
                    apply_jump,
                    apply_air_dash,
                    apply_fast_fall,
                    cancel_air_dash,
                    halt_dead,
                    update_facing,
                )
                    .chain()
                    .run_if(in_state(GameState::Run))
                    .run_if(gameplay_active),
            );
    }
}
