//! World domain: markers for level objects.

use bevy::prelude::*;

/// Respawn marker zone. `active` tracks which checkpoint currently holds the
/// respawn point.
#[derive(Component, Debug, Default)]
pub struct Checkpoint {
    pub active: bool,
}

/// End-of-level trigger zone.
#[derive(Component, Debug)]
pub struct Goalpoint;

/// Lethal contact zone (spikes).
#[derive(Component, Debug)]
pub struct Hazard;
