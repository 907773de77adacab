//! Enemies and NPCs.

use serde::{Deserialize, Serialize};

use crate::effect::Effect;
use crate::id::{EnemyId, QuestId};
use crate::item::{Item, name_matches};

/// A hostile creature with a fixed stat block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enemy {
    /// Instance identity.
    #[serde(default)]
    pub id: EnemyId,
    /// Display name.
    pub name: String,
    /// Current hit points. May drop below zero on the killing blow.
    pub hp: i32,
    /// Maximum hit points.
    pub max_hp: i32,
    /// Base damage per retaliation.
    pub damage: u32,
    /// Experience granted on defeat.
    pub experience: u32,
    /// Flavor text.
    #[serde(default)]
    pub description: String,
    /// Items dropped into the location on defeat.
    #[serde(default)]
    pub loot: Vec<Item>,
}

impl Enemy {
    /// Create an enemy at full health.
    pub fn new(name: impl Into<String>, max_hp: i32, damage: u32, experience: u32) -> Self {
        Self {
            id: EnemyId::new(),
            name: name.into(),
            hp: max_hp,
            max_hp,
            damage,
            experience,
            description: String::new(),
            loot: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a loot item.
    pub fn with_loot(mut self, item: Item) -> Self {
        self.loot.push(item);
        self
    }

    /// Whether the enemy has been reduced to zero hit points or below.
    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }

    /// Case-insensitive substring match against the enemy name.
    pub fn matches(&self, needle: &str) -> bool {
        name_matches(&self.name, needle)
    }
}

/// One selectable line in a dialogue tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogueOption {
    /// What the player says.
    pub prompt: String,
    /// What the NPC answers.
    pub response: String,
    /// Applied when chosen.
    #[serde(default)]
    pub effect: Option<Effect>,
    /// Options offered next; empty for a leaf.
    #[serde(default)]
    pub follow_ups: Vec<DialogueOption>,
}

impl DialogueOption {
    /// Create a leaf option.
    pub fn new(prompt: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            response: response.into(),
            effect: None,
            follow_ups: Vec::new(),
        }
    }

    /// Attach an effect.
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }

    /// Add a follow-up option.
    pub fn with_follow_up(mut self, option: DialogueOption) -> Self {
        self.follow_ups.push(option);
        self
    }
}

/// A non-player character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Npc {
    /// Display name; also the key recorded in the talked-to set.
    pub name: String,
    /// Flavor text.
    #[serde(default)]
    pub description: String,
    /// Fixed greeting line.
    pub greeting: String,
    /// Top-level dialogue options.
    #[serde(default)]
    pub options: Vec<DialogueOption>,
    /// Quest offered as soon as a conversation starts.
    #[serde(default)]
    pub quest: Option<QuestId>,
}

impl Npc {
    /// Create an NPC with no dialogue tree.
    pub fn new(name: impl Into<String>, greeting: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            greeting: greeting.into(),
            options: Vec::new(),
            quest: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a top-level dialogue option.
    pub fn with_option(mut self, option: DialogueOption) -> Self {
        self.options.push(option);
        self
    }

    /// Offer a quest on greeting.
    pub fn with_quest(mut self, quest: QuestId) -> Self {
        self.quest = Some(quest);
        self
    }

    /// Case-insensitive substring match against the NPC name.
    pub fn matches(&self, needle: &str) -> bool {
        name_matches(&self.name, needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enemy_builder() {
        let enemy = Enemy::new("Radroach", 15, 3, 10)
            .with_description("A large, mutated cockroach.")
            .with_loot(Item::bottle_cap());
        assert_eq!(enemy.hp, 15);
        assert_eq!(enemy.loot.len(), 1);
        assert!(!enemy.is_defeated());
        assert!(enemy.matches("roach"));
    }

    #[test]
    fn dialogue_tree_builder() {
        let npc = Npc::new("Lucas Simms", "Welcome to Megaton, stranger.").with_option(
            DialogueOption::new("Tell me about Megaton.", "Built around a bomb.")
                .with_follow_up(DialogueOption::new("Is it safe?", "Mostly.")),
        );
        assert_eq!(npc.options.len(), 1);
        assert_eq!(npc.options[0].follow_ups.len(), 1);
        assert!(npc.matches("lucas"));
    }

    #[test]
    fn deserialize_npc_defaults() {
        let npc: Npc =
            serde_json::from_str(r#"{"name":"Vendor","greeting":"What can I get you?"}"#).unwrap();
        assert!(npc.options.is_empty());
        assert!(npc.quest.is_none());
    }
}
