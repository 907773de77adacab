//! Quests and structured objectives.

use serde::{Deserialize, Serialize};

use crate::id::{LocationId, QuestId};

/// What a player must observably have done for an objective to count.
///
/// Completion is derived on demand by the engine, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ObjectiveKind {
    /// The location is in the visited set.
    VisitLocation {
        /// Location to visit.
        location: LocationId,
    },
    /// The NPC is in the talked-to set.
    TalkTo {
        /// NPC name.
        npc: String,
    },
    /// The combat-encounter counter reached a threshold.
    EncounterCount {
        /// Minimum number of encounters.
        count: u32,
    },
    /// Another quest is completed.
    QuestCompleted {
        /// Prerequisite quest.
        quest: QuestId,
    },
}

/// A quest sub-goal with display text and a structured predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objective {
    /// Display text.
    pub description: String,
    /// The predicate evaluated against player state.
    #[serde(flatten)]
    pub kind: ObjectiveKind,
}

impl Objective {
    /// Create an objective.
    pub fn new(description: impl Into<String>, kind: ObjectiveKind) -> Self {
        Self {
            description: description.into(),
            kind,
        }
    }
}

/// Reward granted on completion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestReward {
    /// Experience points.
    #[serde(default)]
    pub experience: u32,
    /// Bottle caps.
    #[serde(default)]
    pub caps: u32,
}

/// A quest definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    /// Content key.
    pub id: QuestId,
    /// Display name.
    pub name: String,
    /// Summary shown when offered.
    #[serde(default)]
    pub description: String,
    /// Ordered objectives.
    #[serde(default)]
    pub objectives: Vec<Objective>,
    /// Completion reward.
    #[serde(default)]
    pub reward: QuestReward,
}

impl Quest {
    /// Create a quest with no objectives and no reward.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: QuestId::new(id),
            name: name.into(),
            description: String::new(),
            objectives: Vec::new(),
            reward: QuestReward::default(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append an objective.
    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.objectives.push(objective);
        self
    }

    /// Set the reward.
    pub fn with_reward(mut self, experience: u32, caps: u32) -> Self {
        self.reward = QuestReward { experience, caps };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_objective() {
        let json = r#"{"description":"Visit Megaton","type":"visitLocation","location":"megaton"}"#;
        let objective: Objective = serde_json::from_str(json).unwrap();
        assert_eq!(objective.description, "Visit Megaton");
        assert_eq!(
            objective.kind,
            ObjectiveKind::VisitLocation {
                location: LocationId::new("megaton")
            }
        );
    }

    #[test]
    fn quest_builder() {
        let quest = Quest::new("firstSteps", "First Steps")
            .with_objective(Objective::new(
                "Talk to Lucas Simms",
                ObjectiveKind::TalkTo {
                    npc: "Lucas Simms".to_string(),
                },
            ))
            .with_reward(50, 100);
        assert_eq!(quest.id.as_str(), "firstSteps");
        assert_eq!(quest.objectives.len(), 1);
        assert_eq!(quest.reward.caps, 100);
    }
}
