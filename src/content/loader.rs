//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::LevelDef;
use crate::movement::NavigationTuning;

pub const DATA_DIR: &str = "assets/data";
pub const TUNING_FILE: &str = "navigation.ron";
pub const LEVEL_FILE: &str = "level.ron";

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
pub fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a single RON struct from a string. `file` only labels errors.
pub fn parse_ron<T>(file: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load a single RON struct from disk.
pub fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_ron(&file_name, &contents)
}

/// Everything read from the data directory. Files that failed to load are
/// replaced by defaults and their errors collected.
pub struct LoadedContent {
    pub tuning: NavigationTuning,
    pub level: LevelDef,
    pub errors: Vec<ContentLoadError>,
}

pub fn load_content(base_path: &Path) -> LoadedContent {
    let mut errors = Vec::new();

    let tuning = load_single_file::<NavigationTuning>(&base_path.join(TUNING_FILE))
        .unwrap_or_else(|e| {
            errors.push(e);
            NavigationTuning::default()
        });

    let level = load_single_file::<LevelDef>(&base_path.join(LEVEL_FILE)).unwrap_or_else(|e| {
        errors.push(e);
        LevelDef::default()
    });

    LoadedContent {
        tuning,
        level,
        errors,
    }
}
