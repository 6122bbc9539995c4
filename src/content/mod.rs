//! Content domain: RON-backed tuning and level data.

mod data;
mod loader;
mod validation;

pub use data::{BlockDef, LEVEL_SCHEMA_VERSION, LevelDef, PlatformDef, RouteDef, WanderDef};
pub use loader::{
    ContentLoadError, DATA_DIR, LEVEL_FILE, LoadedContent, TUNING_FILE, load_content,
    load_single_file, parse_ron, ron_options,
};
pub use validation::{ValidationError, validate_level, validate_tuning};

use bevy::prelude::*;
use std::path::Path;

use crate::movement::NavigationTuning;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let LoadedContent {
            mut tuning,
            mut level,
            errors,
        } = load_content(Path::new(DATA_DIR));

        for error in &errors {
            warn!("[CONTENT] {}, using defaults", error);
        }

        let tuning_errors = validate_tuning(&tuning);
        if !tuning_errors.is_empty() {
            for error in &tuning_errors {
                warn!("[CONTENT] {}", error);
            }
            warn!("[CONTENT] Navigation tuning rejected, using defaults");
            tuning = NavigationTuning::default();
        }

        let level_errors = validate_level(&level);
        if !level_errors.is_empty() {
            for error in &level_errors {
                warn!("[CONTENT] {}", error);
            }
            warn!("[CONTENT] Level rejected, using the fallback level");
            level = LevelDef::default();
        }

        info!(
            "[CONTENT] Loaded level with {} blocks, {} platforms, {} routes",
            level.blocks.len(),
            level.platforms.len(),
            level.routes.len()
        );

        app.register_type::<LevelDef>()
            .insert_resource(tuning)
            .insert_resource(level);
    }
}
