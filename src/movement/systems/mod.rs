//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::detect_ground;
pub(crate) use input::sample_input;
pub(crate) use movement::{
    apply_air_dash, apply_fast_fall, apply_gravity, apply_horizontal, apply_jump, cancel_air_dash,
    halt_dead, update_facing, update_timers,
};
