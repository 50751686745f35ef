//! World domain: level geometry and player spawning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{AbilityState, GameLayer, Ground, MotionTimers, Player};
use crate::world::components::{Checkpoint, Goalpoint, Hazard};
use crate::world::resources::RespawnPoint;

pub(crate) const PLAYER_SIZE: Vec2 = Vec2::new(12.0, 24.0);

pub(crate) fn setup_level(mut commands: Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);
    let spike_color = Color::srgb(0.7, 0.3, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    // Left ground slab
    commands.spawn((
        Ground,
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(400.0, 40.0)),
            ..default()
        },
        Transform::from_xyz(-260.0, -160.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(400.0, 40.0),
        ground_layers,
    ));

    // Right ground slab, across the spike pit
    commands.spawn((
        Ground,
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(320.0, 40.0)),
            ..default()
        },
        Transform::from_xyz(300.0, -160.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(320.0, 40.0),
        ground_layers,
    ));

    // Boundary walls
    for x in [-470.0, 470.0] {
        commands.spawn((
            Ground,
            Sprite {
                color: wall_color,
                custom_size: Some(Vec2::new(20.0, 400.0)),
                ..default()
            },
            Transform::from_xyz(x, 0.0, 0.0),
            RigidBody::Static,
            Collider::rectangle(20.0, 400.0),
            ground_layers,
        ));
    }

    // Platform over the pit
    commands.spawn((
        Ground,
        Sprite {
            color: platform_color,
            custom_size: Some(Vec2::new(100.0, 16.0)),
            ..default()
        },
        Transform::from_xyz(40.0, -60.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(100.0, 16.0),
        ground_layers,
    ));

    // High platform, reachable with a dash
    commands.spawn((
        Ground,
        Sprite {
            color: platform_color,
            custom_size: Some(Vec2::new(100.0, 16.0)),
            ..default()
        },
        Transform::from_xyz(180.0, 20.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(100.0, 16.0),
        ground_layers,
    ));

    // Spike floor at the bottom of the pit
    commands.spawn((
        Hazard,
        Sprite {
            color: spike_color,
            custom_size: Some(Vec2::new(200.0, 20.0)),
            ..default()
        },
        Transform::from_xyz(40.0, -210.0, 0.0),
        Collider::rectangle(200.0, 20.0),
        Sensor,
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::Hazard, [GameLayer::Player]),
    ));

    // Starting checkpoint
    commands.spawn((
        Checkpoint { active: true },
        Sprite {
            color: Color::srgb(0.3, 0.6, 0.8),
            custom_size: Some(Vec2::new(16.0, 32.0)),
            ..default()
        },
        Transform::from_xyz(-400.0, -120.0, 0.0),
        Collider::rectangle(16.0, 32.0),
        Sensor,
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::Trigger, [GameLayer::Player]),
    ));

    // Mid-level checkpoint past the pit
    commands.spawn((
        Checkpoint::default(),
        Sprite {
            color: Color::srgb(0.3, 0.6, 0.8),
            custom_size: Some(Vec2::new(16.0, 32.0)),
            ..default()
        },
        Transform::from_xyz(200.0, -120.0, 0.0),
        Collider::rectangle(16.0, 32.0),
        Sensor,
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::Trigger, [GameLayer::Player]),
    ));

    // Goal at the far end
    commands.spawn((
        Goalpoint,
        Sprite {
            color: Color::srgb(0.8, 0.7, 0.2),
            custom_size: Some(Vec2::new(20.0, 40.0)),
            ..default()
        },
        Transform::from_xyz(420.0, -120.0, 0.0),
        Collider::rectangle(20.0, 40.0),
        Sensor,
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::Trigger, [GameLayer::Player]),
    ));
}

pub(crate) fn spawn_initial_player(mut commands: Commands, respawn: Res<RespawnPoint>) {
    spawn_player(&mut commands, respawn.position);
}

/// Spawn a fresh character at `position` with a pristine ability state.
pub(crate) fn spawn_player(commands: &mut Commands, position: Vec2) {
    info!("Spawning player at {position}");
    commands.spawn((
        // Identity & abilities
        (Player, AbilityState::default(), MotionTimers::default()),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(position.x, position.y, 1.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // Gravity is integrated by the movement systems
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Player,
                [GameLayer::Ground, GameLayer::Hazard, GameLayer::Trigger],
            ),
        ),
    ));
}
