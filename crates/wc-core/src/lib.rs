//! Core types for Wasteland Chronicles: the world model and content schema.
//!
//! This crate defines the shapes the content author must satisfy (locations,
//! items, NPCs, enemies, quests) together with the effect and requirement
//! vocabularies. It holds no session state; the engine crate drives it.

/// Actors placed in locations: enemies and NPCs with dialogue trees.
pub mod actor;
/// Bundled default content.
pub mod content;
/// Effects applied against the player or world.
pub mod effect;
/// Error types used throughout the crate.
pub mod error;
/// Stable identifiers for content and runtime instances.
pub mod id;
/// Items and item kinds.
pub mod item;
/// Locations and exits.
pub mod location;
/// Quests and structured objectives.
pub mod quest;
/// Requirements gating exits.
pub mod requirement;
/// Player attribute and skill names.
pub mod stats;
/// The world model that owns locations and the quest table.
pub mod world;

pub use actor::{DialogueOption, Enemy, Npc};
pub use effect::Effect;
pub use error::{CoreError, CoreResult};
pub use id::{EnemyId, ItemId, LocationId, QuestId};
pub use item::{BOTTLE_CAP, Item, ItemKind, ItemType, name_matches};
pub use location::{Exit, Location};
pub use quest::{Objective, ObjectiveKind, Quest, QuestReward};
pub use requirement::Requirement;
pub use stats::{Skill, Skills, Special, SpecialStat};
pub use world::{ValidationIssue, World, WorldMeta};
