//! Game engine for Wasteland Chronicles.
//!
//! A [`GameSession`] owns the world, the player and the combat, dialogue and
//! quest state machines. Hosts feed it one line of input at a time through
//! [`GameSession::process`] and render the returned [`Outcome`]: narration
//! lines tagged with a [`Severity`] plus the display areas that changed.
//! Persistence goes through the [`SaveStore`] trait so the host decides where
//! save blobs live.

/// Play-time clock.
pub mod clock;
/// Combat rules and the fight state machine.
pub mod combat;
/// Session configuration.
pub mod config;
mod dialogue;
mod effects;
/// Error types used throughout the crate.
pub mod error;
/// Inventory stacks and weight accounting.
pub mod inventory;
/// Narration events, refresh signals and session state.
pub mod narration;
mod navigation;
/// Command parsing and fuzzy suggestions.
pub mod parser;
/// The player character.
pub mod player;
/// Quest journal and objective evaluation.
pub mod quests;
/// Save schema and storage.
pub mod save;
/// The session context object.
pub mod session;
/// Inventory, character and help listings.
pub mod status;

#[cfg(test)]
mod testing;

pub use clock::{GameClock, format_time};
pub use combat::{enemy_damage, player_damage};
pub use config::{DEFAULT_SAVE_KEY, EngineConfig};
pub use error::{EngineError, EngineResult, SaveError};
pub use inventory::{Consolidation, Inventory, Stack};
pub use narration::{Narration, Outcome, SessionState, Severity, UiRefresh};
pub use parser::{Command, parse_command, suggest_name, suggest_verb};
pub use player::{Acquired, Equipped, Player, UNARMED_DAMAGE};
pub use quests::{QuestLog, objective_met};
pub use save::{MemoryStore, SaveGame, SaveStore};
pub use session::GameSession;
pub use status::fmt_weight;
