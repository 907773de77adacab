//! Persisted game state and the storage seam.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use wc_core::{LocationId, QuestId};

use crate::error::SaveError;
use crate::player::Player;

/// The save blob, stored wholesale under one key.
///
/// The world itself is not part of the save; items taken and enemies killed
/// stay as they are in the running session when a save is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveGame {
    pub player: Player,
    pub current_location: LocationId,
    #[serde(default)]
    pub visited_locations: Vec<LocationId>,
    /// Older saves call this `quests`.
    #[serde(default, alias = "quests")]
    pub active_quests: Vec<QuestId>,
    #[serde(default)]
    pub completed_quests: Vec<QuestId>,
    /// Elapsed play time in seconds.
    #[serde(default)]
    pub game_time: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl SaveGame {
    /// Serialize to the stored JSON form.
    pub fn to_json(&self) -> Result<String, SaveError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a stored blob.
    pub fn from_json(blob: &str) -> Result<Self, SaveError> {
        Ok(serde_json::from_str(blob)?)
    }
}

/// Key-value storage for opaque save blobs.
pub trait SaveStore {
    /// Read the blob under `key`, or `None` if nothing is stored.
    fn read(&self, key: &str) -> Result<Option<String>, SaveError>;

    /// Store `blob` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, blob: &str) -> Result<(), SaveError>;
}

/// In-memory store, used by tests and embedders without persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-filled with one blob.
    pub fn with_blob(key: impl Into<String>, blob: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.slots.insert(key.into(), blob.into());
        store
    }
}

impl SaveStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, SaveError> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, blob: &str) -> Result<(), SaveError> {
        self.slots.insert(key.to_string(), blob.to_string());
        Ok(())
    }
}
