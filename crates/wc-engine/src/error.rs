//! Error types for the engine.
//!
//! Every variant's `Display` text is the narration shown to the player, so a
//! rejected command reaches the presentation layer as one error line.

use thiserror::Error;
use wc_core::LocationId;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors a command can fail with. None of them are fatal; the session
/// narrates the message and leaves its state untouched.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The verb is not in the command table.
    #[error("Unknown command: {verb}. Type 'help' for available commands.{}", hint(.suggestion))]
    UnknownCommand {
        /// The verb as typed.
        verb: String,
        /// Closest known verb, if any is similar enough.
        suggestion: Option<String>,
    },

    /// No item, NPC or enemy at the current location matches.
    #[error("You don't see {name} here.{}", hint(.suggestion))]
    NotHere {
        /// The name as typed.
        name: String,
        /// Closest name present, if any is similar enough.
        suggestion: Option<String>,
    },

    /// Neither the inventory nor the location holds a matching item.
    #[error("You don't see {0} here or in your inventory.")]
    NotFound(String),

    /// No exit matches the direction.
    #[error("You can't go {0}.")]
    NoExit(String),

    /// The inventory holds no matching item.
    #[error("You don't have {0}.")]
    NotCarrying(String),

    /// The verb needs an argument (the payload is the prompt, e.g. "Take what?").
    #[error("{0}")]
    MissingArgument(&'static str),

    /// A dialogue selection outside the offered range.
    #[error("Invalid choice: {0}. Pick one of the numbered options.")]
    InvalidChoice(usize),

    /// A combat-only verb was used outside combat.
    #[error("You are not in combat.")]
    NotInCombat,

    /// A dialogue-only verb was used outside a conversation.
    #[error("You are not talking to anyone.")]
    NotInConversation,

    /// A non-combat verb was used during combat.
    #[error("In combat! Use \"attack\", \"flee\", or \"use [item]\".")]
    CombatOnly,

    /// Taking the item would exceed the carry limit.
    #[error("You can't carry {0}. It's too heavy!")]
    TooHeavy(String),

    /// An exit requirement failed; the payload is the narrated reason.
    #[error("{0}")]
    Blocked(String),

    /// The item has no use outside combat.
    #[error("You can't use {0} that way.")]
    CannotUse(String),

    /// Only consumables may be used during combat.
    #[error("You can't use {0} in combat.")]
    CannotUseInCombat(String),

    /// The player is dead; only load, restart and quit remain.
    #[error(
        "You have died in the wasteland. Type 'load' to restore your last save or 'restart' to begin again."
    )]
    GameOver,

    /// The session points at a location the world does not define.
    #[error("Location not found: {0}")]
    LocationNotFound(LocationId),

    /// Saving or loading failed.
    #[error(transparent)]
    Persistence(#[from] SaveError),
}

/// Failures of the persistence path.
#[derive(Debug, Error)]
pub enum SaveError {
    /// Nothing stored under the save key.
    #[error("No save file found.")]
    NotFound,

    /// The stored blob is not a valid save.
    #[error("Error loading save file.")]
    Malformed(#[from] serde_json::Error),

    /// The save names a location this world does not define.
    #[error("Error loading save file: unknown location \"{0}\".")]
    UnknownLocation(LocationId),

    /// The storage backend failed.
    #[error("Save storage failed: {0}")]
    Io(#[from] std::io::Error),
}

fn hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" Did you mean \"{s}\"?"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_narration() {
        let err = EngineError::UnknownCommand {
            verb: "dance".to_string(),
            suggestion: None,
        };
        assert_eq!(
            err.to_string(),
            "Unknown command: dance. Type 'help' for available commands."
        );

        let err = EngineError::NotHere {
            name: "stimpack".to_string(),
            suggestion: Some("Stimpak".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "You don't see stimpack here. Did you mean \"Stimpak\"?"
        );
    }

    #[test]
    fn persistence_is_transparent() {
        let err: EngineError = SaveError::NotFound.into();
        assert_eq!(err.to_string(), "No save file found.");
    }
}
