use serde::{Deserialize, Serialize};

/// Save key used when none is configured.
pub const DEFAULT_SAVE_KEY: &str = "wasteland-save";

/// Configuration for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// RNG seed for deterministic combat. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Key the save blob is stored under.
    pub save_key: String,
    /// The player character's name.
    pub player_name: String,
    /// Save automatically when the player quits.
    pub autosave_on_quit: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            save_key: DEFAULT_SAVE_KEY.to_string(),
            player_name: "Vault Dweller".to_string(),
            autosave_on_quit: true,
        }
    }
}

impl EngineConfig {
    /// Use a fixed RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the save key.
    pub fn with_save_key(mut self, key: impl Into<String>) -> Self {
        self.save_key = key.into();
        self
    }

    /// Set the player character's name.
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    /// Enable or disable saving on quit.
    pub fn with_autosave_on_quit(mut self, enabled: bool) -> Self {
        self.autosave_on_quit = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = EngineConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.save_key, "wasteland-save");
        assert_eq!(config.player_name, "Vault Dweller");
        assert!(config.autosave_on_quit);
    }

    #[test]
    fn config_builder_chain() {
        let config = EngineConfig::default()
            .with_seed(7)
            .with_save_key("slot-2")
            .with_player_name("Lone Wanderer")
            .with_autosave_on_quit(false);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.save_key, "slot-2");
        assert_eq!(config.player_name, "Lone Wanderer");
        assert!(!config.autosave_on_quit);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"seed": 42}"#).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.save_key, DEFAULT_SAVE_KEY);
    }
}
