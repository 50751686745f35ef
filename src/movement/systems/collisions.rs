//! Movement domain: ground sensing feeding the ability state machine.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    AbilityState, CoyotePhase, GameLayer, MotionTimers, MovementTuning, Player,
};

/// Cast a short ray downward from the player's feet and report the contact
/// result into the ability state.
///
/// This is the single `set_grounded` call site per tick; every integrator
/// system is scheduled strictly after it. When leaving the ground arms the
/// coyote phase, this system also starts the real-time grace countdown that
/// `update_timers` later expires.
pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(&Transform, &Collider, &mut AbilityState, &mut MotionTimers), With<Player>>,
) {
    // Filter to only hit Ground layer entities (not hazards or triggers)
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, collider, mut state, mut timers) in &mut query {
        if state.is_dead() {
            continue;
        }

        let player_half_height = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.y,
            None => 12.0,
        };

        let ray_origin = transform.translation.truncate() - Vec2::new(0.0, player_half_height);
        let ray_direction = Dir2::NEG_Y;
        let ray_distance = 2.0;

        let hit = spatial_query.cast_ray(
            ray_origin,
            ray_direction,
            ray_distance,
            true,
            &ground_filter,
        );

        let was_grounded = state.is_grounded();
        let was_armed = state.coyote_phase() == CoyotePhase::Armed;

        state.set_grounded(hit.is_some());

        if state.is_grounded() && !was_grounded {
            debug!("Landed: tallies and coyote phase reset");
        } else if !state.is_grounded() && was_grounded {
            // The state machine arms the window; the countdown is ours.
            if state.coyote_phase() == CoyotePhase::Armed && !was_armed {
                timers.coyote = tuning.coyote_time;
            }
            debug!("Left ground: coyote={:?}", state.coyote_phase());
        }
    }
}
