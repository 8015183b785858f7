use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::BaseDirs;
use log::{debug, warn};
use serde::Deserialize;

use crate::order::{self, Direction, Field, OrderingRule};

/// Optional user settings read from `settings.json`.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub roster: Option<PathBuf>,
    pub default_sort: Option<String>,
    pub verbose: bool,
}

fn get_settings_path() -> Option<PathBuf> {
    let base_dirs = BaseDirs::new()?;

    Some(base_dirs.config_dir().join("TutorBook").join("settings.json"))
}

impl Settings {
    /// Loads `path`, or the default settings file when `path` is `None`.
    /// A missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load_default(get_settings_path()),
        }
    }

    /// Settings from the user config directory. No config directory, or no
    /// file in it, yields default settings.
    fn load_default(path: Option<PathBuf>) -> Result<Self> {
        let Some(path) = path else {
            warn!("No config directory found, using default settings");
            return Ok(Settings::default());
        };
        if !path.try_exists()? {
            debug!("No settings file at {:?}", path);
            return Ok(Settings::default());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Could not read settings {:?}", path))?;
        let settings: Settings = serde_json::from_str(&content)
            .with_context(|| format!("Invalid settings {:?}", path))?;
        debug!("Loaded settings from {:?}: {:?}", path, settings);
        Ok(settings)
    }

    /// Ordering applied once after the roster is loaded.
    ///
    /// Unlike the `sort` command this never fails: an unknown field sorts
    /// by name ascending and an unknown order sorts ascending.
    pub fn default_ordering(&self) -> Option<OrderingRule> {
        let text = self.default_sort.as_deref()?;
        let mut tokens = text.split_whitespace();
        let field_token = tokens.next()?;

        let field = field_token.parse::<Field>().ok();
        if field.is_none() {
            warn!("Unknown default sort field {:?}, sorting by name", field_token);
        }
        let direction = tokens
            .next()
            .and_then(|token| token.parse::<Direction>().ok())
            .unwrap_or_default();

        Some(order::resolve_or_default(field, direction))
    }
}
