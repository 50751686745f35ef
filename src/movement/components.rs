//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Walkable surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
    /// Lethal contact surfaces (spikes)
    Hazard,
    /// Non-blocking trigger zones (checkpoints, goal)
    Trigger,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Real-time countdowns owned by the character.
///
/// Ticked once per frame by `update_timers`; each expiry delivers exactly one
/// state mutation on the tick boundary, so a countdown can never race the
/// rest of the schedule. Despawning the character drops the component, which
/// cancels anything pending.
#[derive(Component, Debug, Default)]
pub struct MotionTimers {
    /// Remaining coyote grace, counting while the phase is `Armed`.
    pub coyote: f32,
    /// Remaining dash duration, counting while an air dash is active.
    pub dash: f32,
}
