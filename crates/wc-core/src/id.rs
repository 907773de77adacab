use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Runtime identity of a single item instance (or inventory stack).
///
/// Content files never carry ids; a fresh one is generated on load. Saves do
/// carry them, which keeps equipped-slot references valid across a
/// save/load round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub Uuid);

impl ItemId {
    /// Generate a new random item ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// Runtime identity of an enemy placed in a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnemyId(pub Uuid);

impl EnemyId {
    /// Generate a new random enemy ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EnemyId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EnemyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// Content key of a location (e.g. `"vault101"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(pub String);

impl LocationId {
    /// Create a location id from its content key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw content key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Content key of a quest (e.g. `"firstSteps"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestId(pub String);

impl QuestId {
    /// Create a quest id from its content key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw content key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_ids_are_unique() {
        assert_ne!(ItemId::new(), ItemId::new());
    }

    #[test]
    fn display_is_short() {
        assert_eq!(ItemId::new().to_string().len(), 8);
        assert_eq!(EnemyId::new().to_string().len(), 8);
    }

    #[test]
    fn keyed_ids_serialize_transparently() {
        let id = LocationId::new("vault101");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"vault101\"");
        let quest: QuestId = serde_json::from_str("\"firstSteps\"").unwrap();
        assert_eq!(quest.as_str(), "firstSteps");
    }
}
