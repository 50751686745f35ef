//! Content domain: RON-backed gameplay tuning.

mod loader;

use bevy::prelude::*;

use crate::content::loader::load_movement_tuning;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_movement_tuning);
    }
}
