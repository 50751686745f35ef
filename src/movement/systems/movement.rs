//! Movement domain: the motion integrator.
//!
//! Runs once per tick as a chained sequence after input sampling and ground
//! sensing. Each system applies one velocity rule and commits at most one
//! ability through the state machine; a rejected commit leaves velocity
//! untouched by that rule. Tuning constants are per nominal frame, scaled by
//! `delta * target_rate`.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    AbilityState, CoyotePhase, InputSnapshot, MotionTimers, MovementTuning, Player,
};

/// Tick the coyote and dash countdowns. Each expiry delivers exactly one
/// state mutation, on the same serial tick boundary as everything else.
pub(crate) fn update_timers(
    time: Res<Time>,
    mut query: Query<(&mut AbilityState, &mut MotionTimers), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut state, mut timers) in &mut query {
        if state.is_dead() {
            continue;
        }

        if state.coyote_phase() == CoyotePhase::Armed {
            timers.coyote -= dt;
            if timers.coyote <= 0.0 {
                state.expire_coyote_time();
                debug!("Coyote window expired");
            }
        }

        if state.is_air_dash_active() {
            timers.dash -= dt;
            if timers.dash <= 0.0 {
                state.finish_air_dash();
                debug!("Air dash ran out");
            }
        }
    }
}

pub(crate) fn apply_horizontal(
    time: Res<Time>,
    input: Res<InputSnapshot>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&AbilityState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (state, mut velocity) in &mut query {
        if state.is_dead() {
            continue;
        }

        if input.axis.x != 0.0 {
            let cap = horizontal_cap(state, &tuning);
            velocity.x += tuning.accel * input.axis.x * dt * tuning.target_rate;
            velocity.x = velocity.x.clamp(-cap, cap);
        } else {
            // Drag choice keys on grounded AND not dashing: a dash that
            // clipped a grounded frame still decays at the air rate.
            let rate = if state.is_grounded() && !state.is_air_dash_active() {
                tuning.friction
            } else {
                tuning.air_resistance
            };
            velocity.x = drag_toward_rest(velocity.x, rate * dt);
        }
    }
}

pub(crate) fn apply_gravity(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&AbilityState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (state, mut velocity) in &mut query {
        if state.is_dead() {
            continue;
        }

        // Half gravity while dashing keeps the dash floaty without fully
        // suspending the fall.
        let scale = if state.is_air_dash_active() { 0.5 } else { 1.0 };
        velocity.y -= tuning.gravity * scale * dt * tuning.target_rate;
    }
}

pub(crate) fn apply_jump(
    input: Res<InputSnapshot>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut AbilityState, &mut LinearVelocity), With<Player>>,
) {
    for (mut state, mut velocity) in &mut query {
        if state.is_dead() {
            continue;
        }

        if input.jump_just_pressed && state.commit_jump() {
            velocity.y = tuning.jump_force;
            debug!("Jump committed (coyote={:?})", state.coyote_phase());
        }

        // Variable jump height: releasing the button while still ascending
        // fast caps the rise. Independent of jump eligibility, so it also
        // governs a jump started on an earlier tick.
        if input.jump_just_released && velocity.y > tuning.jump_force / 2.0 {
            velocity.y = tuning.jump_force / 2.0;
        }
    }
}

pub(crate) fn apply_air_dash(
    input: Res<InputSnapshot>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut AbilityState, &mut MotionTimers, &mut LinearVelocity), With<Player>>,
) {
    for (mut state, mut timers, mut velocity) in &mut query {
        if state.is_dead() {
            continue;
        }

        if input.dash_held && input.axis.x != 0.0 && state.commit_air_dash() {
            let direction = input.axis.normalize();
            let momentum = dash_momentum(velocity.length(), &tuning);
            velocity.0 = direction * momentum;
            timers.dash = tuning.dash_time;
            debug!("Air dash committed: momentum={momentum:.1}");
        }
    }
}

pub(crate) fn apply_fast_fall(
    input: Res<InputSnapshot>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut AbilityState, &mut LinearVelocity), With<Player>>,
) {
    for (mut state, mut velocity) in &mut query {
        if state.is_dead() {
            continue;
        }

        if input.axis.y < -tuning.fast_fall_threshold {
            if state.commit_fast_fall() {
                velocity.y -= tuning.fast_fall_impulse;
                debug!("Fast fall committed");
            }

            // Crouching on the ground kills horizontal motion and clears a
            // dash that somehow persisted into a grounded frame.
            if state.is_grounded() {
                velocity.x = 0.0;
                state.finish_air_dash();
            }
        }
    }
}

/// End an active dash early when the player steers against it. The landing
/// cancellation lives in `set_grounded`, which clears the active flag on the
/// airborne-to-grounded edge.
pub(crate) fn cancel_air_dash(
    input: Res<InputSnapshot>,
    mut query: Query<(&mut AbilityState, &mut MotionTimers, &LinearVelocity), With<Player>>,
) {
    for (mut state, mut timers, velocity) in &mut query {
        if state.is_dead() || !state.is_air_dash_active() {
            continue;
        }

        let reversed =
            velocity.x != 0.0 && input.axis.x != 0.0 && velocity.x.signum() != input.axis.x.signum();
        if reversed {
            state.finish_air_dash();
            timers.dash = 0.0;
            debug!("Air dash cancelled by reversal");
        }
    }
}

/// A dead character holds a terminal pose: the integrator stops computing
/// motion for it entirely.
pub(crate) fn halt_dead(mut query: Query<(&AbilityState, &mut LinearVelocity), With<Player>>) {
    for (state, mut velocity) in &mut query {
        if state.is_dead() && velocity.0 != Vec2::ZERO {
            velocity.0 = Vec2::ZERO;
        }
    }
}

pub(crate) fn update_facing(
    input: Res<InputSnapshot>,
    mut query: Query<(&AbilityState, &mut Sprite), With<Player>>,
) {
    for (state, mut sprite) in &mut query {
        if state.is_dead() {
            continue;
        }
        if input.axis.x != 0.0 {
            sprite.flip_x = input.axis.x > 0.0;
        }
    }
}

/// Horizontal speed cap, boosted while an air dash is active.
pub(crate) fn horizontal_cap(state: &AbilityState, tuning: &MovementTuning) -> f32 {
    if state.is_air_dash_active() {
        tuning.max_speed * tuning.dash_speed_factor
    } else {
        tuning.max_speed
    }
}

/// Exponential decay toward rest: `lerp(v, 0, k)` with the factor clamped to
/// `[0, 1]` so a large tick can never overshoot past zero.
pub(crate) fn drag_toward_rest(v: f32, k: f32) -> f32 {
    v * (1.0 - k.clamp(0.0, 1.0))
}

/// Dash launch speed: discounted current momentum plus a fixed boost,
/// clamped to twice the boost so chained momentum cannot snowball.
pub(crate) fn dash_momentum(current_speed: f32, tuning: &MovementTuning) -> f32 {
    (current_speed * tuning.dash_carry + tuning.dash_boost).clamp(0.0, 2.0 * tuning.dash_boost)
}
