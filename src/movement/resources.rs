//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Locomotion tuning constants.
///
/// Acceleration, gravity, and impulses are specified per nominal frame and
/// scaled by `delta * target_rate` at integration time, so game feel is the
/// same at 30, 60, or 144 Hz. `friction` and `air_resistance` are exponential
/// decay rates whose per-tick interpolation factor is `rate * delta`.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct MovementTuning {
    pub accel: f32,
    pub max_speed: f32,
    pub friction: f32,
    pub air_resistance: f32,
    pub gravity: f32,
    pub jump_force: f32,
    /// Fixed speed added on top of carried momentum when a dash starts.
    pub dash_boost: f32,
    /// Fraction of current speed carried into the dash.
    pub dash_carry: f32,
    /// Horizontal speed cap multiplier while a dash is active.
    pub dash_speed_factor: f32,
    /// Dash duration in seconds.
    pub dash_time: f32,
    pub fast_fall_impulse: f32,
    /// Downward axis fraction that counts as fast-fall intent.
    pub fast_fall_threshold: f32,
    /// Jump grace window after leaving the ground, in seconds.
    pub coyote_time: f32,
    /// Nominal frame rate the per-frame constants are tuned against.
    pub target_rate: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            accel: 8.0,
            max_speed: 96.0,
            friction: 16.0,
            air_resistance: 1.2,
            gravity: 4.0,
            jump_force: 128.0,
            dash_boost: 160.0,
            dash_carry: 0.5,
            dash_speed_factor: 2.0,
            dash_time: 0.16,
            fast_fall_impulse: 80.0,
            fast_fall_threshold: 0.6,
            coyote_time: 0.12,
            target_rate: 60.0,
        }
    }
}

/// One tick's worth of input intent, rebuilt from the keyboard every frame
/// and never retained across ticks.
///
/// `axis` components are in `[-1, 1]`, built by subtracting opposing action
/// strengths so simultaneous opposite presses cancel to exactly 0. `axis.y`
/// is positive upward, matching the engine's Y-up convention.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub jump_just_released: bool,
    pub jump_held: bool,
    pub dash_held: bool,
}
