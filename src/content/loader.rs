//! Loader for RON content files at startup.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use crate::movement::MovementTuning;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Load a single RON struct from disk.
fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    ron_options()
        .from_str(&contents)
        .map_err(|e| ContentLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })
}

/// Replace the compiled movement tuning defaults with
/// `assets/data/movement.ron` when the file is present and parseable.
/// Bad content never aborts the game; it is reported and ignored.
pub(crate) fn load_movement_tuning(mut tuning: ResMut<MovementTuning>) {
    let path = Path::new("assets/data/movement.ron");
    if !path.exists() {
        debug!("No movement.ron found, using compiled tuning defaults");
        return;
    }

    match load_single_file::<MovementTuning>(path) {
        Ok(loaded) => {
            info!("Loaded movement tuning from {}", path.display());
            *tuning = loaded;
        }
        Err(e) => warn!("{}; keeping compiled tuning defaults", e),
    }
}
