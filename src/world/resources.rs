//! World domain: respawn bookkeeping.

use bevy::prelude::*;

/// Where the next player instance appears. Updated by checkpoint contact.
#[derive(Resource, Debug)]
pub struct RespawnPoint {
    pub position: Vec2,
}

impl Default for RespawnPoint {
    fn default() -> Self {
        Self {
            position: Vec2::new(-400.0, -120.0),
        }
    }
}
