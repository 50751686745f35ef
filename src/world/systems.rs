//! World domain: hazard contact, triggers, damage, death, and respawn.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::{CheckpointReachedEvent, DamageEvent, GoalReachedEvent, PlayerDiedEvent};
use crate::movement::{AbilityState, Player};
use crate::world::components::{Checkpoint, Goalpoint, Hazard};
use crate::world::resources::RespawnPoint;
use crate::world::spawn::spawn_player;

/// Touching a spike zone deals one point of contact damage.
pub(crate) fn hazard_contact(
    mut collision_start_events: MessageReader<CollisionStart>,
    hazard_query: Query<(), With<Hazard>>,
    player_query: Query<(), With<Player>>,
    mut damage_events: MessageWriter<DamageEvent>,
) {
    for event in collision_start_events.read() {
        let player = if hazard_query.contains(event.collider1) {
            event.collider2
        } else if hazard_query.contains(event.collider2) {
            event.collider1
        } else {
            continue;
        };

        if player_query.contains(player) {
            damage_events.write(DamageEvent {
                target: player,
                amount: 1,
            });
        }
    }
}

/// Touching a checkpoint moves the respawn point there. The previously
/// active checkpoint deactivates.
pub(crate) fn activate_checkpoints(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut checkpoint_query: Query<(Entity, &Transform, &mut Checkpoint)>,
    player_query: Query<(), With<Player>>,
    mut respawn: ResMut<RespawnPoint>,
    mut checkpoint_events: MessageWriter<CheckpointReachedEvent>,
) {
    for event in collision_start_events.read() {
        let (checkpoint_entity, other) = if checkpoint_query.contains(event.collider1) {
            (event.collider1, event.collider2)
        } else if checkpoint_query.contains(event.collider2) {
            (event.collider2, event.collider1)
        } else {
            continue;
        };

        if !player_query.contains(other) {
            continue;
        }

        let already_active = checkpoint_query
            .get(checkpoint_entity)
            .is_ok_and(|(_, _, checkpoint)| checkpoint.active);
        if already_active {
            continue;
        }

        for (entity, transform, mut checkpoint) in &mut checkpoint_query {
            checkpoint.active = entity == checkpoint_entity;
            if checkpoint.active {
                respawn.position = transform.translation.truncate();
            }
        }

        info!("Checkpoint reached, respawn moved to {}", respawn.position);
        checkpoint_events.write(CheckpointReachedEvent {
            checkpoint: checkpoint_entity,
        });
    }
}

pub(crate) fn reach_goal(
    mut collision_start_events: MessageReader<CollisionStart>,
    goal_query: Query<(), With<Goalpoint>>,
    player_query: Query<(), With<Player>>,
    mut goal_events: MessageWriter<GoalReachedEvent>,
) {
    for event in collision_start_events.read() {
        let other = if goal_query.contains(event.collider1) {
            event.collider2
        } else if goal_query.contains(event.collider2) {
            event.collider1
        } else {
            continue;
        };

        if player_query.contains(other) {
            goal_events.write(GoalReachedEvent);
        }
    }
}

/// Any hit is lethal: damage edges the ability state into its terminal dead
/// state, and the one-shot death notification goes out on that edge only.
pub(crate) fn apply_damage(
    mut damage_events: MessageReader<DamageEvent>,
    mut query: Query<&mut AbilityState>,
    mut death_events: MessageWriter<PlayerDiedEvent>,
) {
    for event in damage_events.read() {
        if let Ok(mut state) = query.get_mut(event.target) {
            if state.mark_dead() {
                info!("Player died (took {} damage)", event.amount);
                death_events.write(PlayerDiedEvent {
                    entity: event.target,
                });
            }
        }
    }
}

/// Remove the dead character and spawn a fresh one at the respawn point.
/// Despawning drops the character's timers with it.
pub(crate) fn handle_player_death(
    mut commands: Commands,
    mut death_events: MessageReader<PlayerDiedEvent>,
    respawn: Res<RespawnPoint>,
) {
    for event in death_events.read() {
        commands.entity(event.entity).despawn();
        spawn_player(&mut commands, respawn.position);
    }
}

/// Manual retry: throw away the current character and start over from the
/// respawn point.
pub(crate) fn handle_retry(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    player_query: Query<Entity, With<Player>>,
    respawn: Res<RespawnPoint>,
) {
    if !keyboard.just_pressed(KeyCode::KeyR) {
        return;
    }

    info!("Retrying...");
    for entity in &player_query {
        commands.entity(entity).despawn();
    }
    spawn_player(&mut commands, respawn.position);
}
