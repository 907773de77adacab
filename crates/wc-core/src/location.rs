//! Locations and the exits that connect them.

use serde::{Deserialize, Serialize};

use crate::actor::{Enemy, Npc};
use crate::id::{EnemyId, ItemId, LocationId};
use crate::item::{Item, name_matches};
use crate::requirement::Requirement;

/// A directed edge to another location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exit {
    /// Direction name as typed by the player (`north`, `down`, ...).
    pub direction: String,
    /// Target location.
    #[serde(alias = "location")]
    pub destination: LocationId,
    /// Gate evaluated before moving.
    #[serde(default)]
    pub requirement: Option<Requirement>,
    /// Narrated when the requirement fails.
    #[serde(default)]
    pub blocked_message: Option<String>,
}

impl Exit {
    /// An ungated exit.
    pub fn new(direction: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            direction: direction.into(),
            destination: LocationId::new(destination),
            requirement: None,
            blocked_message: None,
        }
    }

    /// Gate this exit behind a requirement.
    pub fn with_requirement(mut self, requirement: Requirement) -> Self {
        self.requirement = Some(requirement);
        self
    }

    /// Message shown when the requirement fails.
    pub fn with_blocked_message(mut self, message: impl Into<String>) -> Self {
        self.blocked_message = Some(message.into());
        self
    }

    /// Exact or substring match on the direction, ignoring case.
    pub fn matches(&self, needle: &str) -> bool {
        self.direction.eq_ignore_ascii_case(needle.trim()) || name_matches(&self.direction, needle)
    }
}

/// A place in the world holding items, NPCs and enemies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Content key.
    pub id: LocationId,
    /// Display name.
    pub name: String,
    /// Narrated by `look`.
    pub description: String,
    /// Narrated when looking toward this location from a neighbour.
    pub short_description: String,
    /// Exits in declaration order.
    #[serde(default)]
    pub exits: Vec<Exit>,
    /// Items lying here.
    #[serde(default)]
    pub items: Vec<Item>,
    /// NPCs present.
    #[serde(default)]
    pub npcs: Vec<Npc>,
    /// Enemies present.
    #[serde(default)]
    pub enemies: Vec<Enemy>,
}

impl Location {
    /// Create an empty location.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        short_description: impl Into<String>,
    ) -> Self {
        Self {
            id: LocationId::new(id),
            name: name.into(),
            description: description.into(),
            short_description: short_description.into(),
            exits: Vec::new(),
            items: Vec::new(),
            npcs: Vec::new(),
            enemies: Vec::new(),
        }
    }

    /// Add an exit.
    pub fn with_exit(mut self, exit: Exit) -> Self {
        self.exits.push(exit);
        self
    }

    /// Place an item.
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Place an NPC.
    pub fn with_npc(mut self, npc: Npc) -> Self {
        self.npcs.push(npc);
        self
    }

    /// Place an enemy.
    pub fn with_enemy(mut self, enemy: Enemy) -> Self {
        self.enemies.push(enemy);
        self
    }

    /// First exit whose direction matches.
    pub fn find_exit(&self, needle: &str) -> Option<&Exit> {
        self.exits.iter().find(|e| e.matches(needle))
    }

    /// First item whose name matches.
    pub fn find_item(&self, needle: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.matches(needle))
    }

    /// First NPC whose name matches.
    pub fn find_npc(&self, needle: &str) -> Option<&Npc> {
        self.npcs.iter().find(|n| n.matches(needle))
    }

    /// First enemy whose name matches.
    pub fn find_enemy(&self, needle: &str) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.matches(needle))
    }

    /// Look up an enemy by instance id.
    pub fn enemy(&self, id: EnemyId) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.id == id)
    }

    /// Mutable enemy lookup by instance id.
    pub fn enemy_mut(&mut self, id: EnemyId) -> Option<&mut Enemy> {
        self.enemies.iter_mut().find(|e| e.id == id)
    }

    /// Remove an item by instance id.
    pub fn remove_item(&mut self, id: ItemId) -> Option<Item> {
        let pos = self.items.iter().position(|i| i.id == id)?;
        Some(self.items.remove(pos))
    }

    /// Remove an enemy by instance id.
    pub fn remove_enemy(&mut self, id: EnemyId) -> Option<Enemy> {
        let pos = self.enemies.iter().position(|e| e.id == id)?;
        Some(self.enemies.remove(pos))
    }
}
