//! Core domain: notifications exchanged between the character core and the
//! world around it.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Something in the world hurt an entity.
#[derive(Debug)]
pub struct DamageEvent {
    pub target: Entity,
    pub amount: i32,
}

impl Message for DamageEvent {}

/// Raised exactly once per character, on the living-to-dead transition edge.
#[derive(Debug)]
pub struct PlayerDiedEvent {
    pub entity: Entity,
}

impl Message for PlayerDiedEvent {}

/// The player touched a checkpoint; the respawn point moves there.
#[derive(Debug)]
pub struct CheckpointReachedEvent {
    pub checkpoint: Entity,
}

impl Message for CheckpointReachedEvent {}

/// The player reached the goal.
#[derive(Debug)]
pub struct GoalReachedEvent;

impl Message for GoalReachedEvent {}
