//! Config file loading and command-line overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use wc_engine::EngineConfig;

use crate::PlayArgs;

/// Settings for one `play` run.
///
/// ```toml
/// world = "worlds/dc.json"
/// save_dir = "saves"
///
/// [engine]
/// seed = 42
/// player_name = "Lone Wanderer"
/// autosave_on_quit = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// World JSON file; the bundled world when unset.
    pub world: Option<PathBuf>,
    /// Directory for save files; the working directory when unset.
    pub save_dir: Option<PathBuf>,
    pub engine: EngineConfig,
}

impl Settings {
    /// Read a TOML config file.
    pub fn load(path: &Path) -> Result<Self, String> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read config {}: {e}", path.display()))?;
        Self::parse(&data).map_err(|e| format!("invalid config {}: {e}", path.display()))
    }

    fn parse(data: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(data)
    }

    /// Config file (if any) with command-line flags laid over it.
    pub fn resolve(args: &PlayArgs) -> Result<Self, String> {
        let mut settings = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(world) = &args.world {
            settings.world = Some(world.clone());
        }
        if let Some(dir) = &args.save_dir {
            settings.save_dir = Some(dir.clone());
        }
        if let Some(seed) = args.seed {
            settings.engine.seed = Some(seed);
        }
        if let Some(name) = &args.name {
            settings.engine.player_name = name.clone();
        }
        Ok(settings)
    }

    pub fn save_dir(&self) -> PathBuf {
        self.save_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
