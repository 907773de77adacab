//! Effects that modify player or world state.

use serde::{Deserialize, Serialize};

use crate::id::QuestId;
use crate::item::Item;
use crate::stats::SpecialStat;

/// An effect applied when a consumable is used or a dialogue option is chosen.
///
/// Applied atomically by the engine; each variant is handled exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Effect {
    /// Restore hit points, capped at the player's maximum.
    Heal {
        /// Hit points restored.
        value: u32,
    },
    /// Add (positive) or remove (negative) radiation.
    #[serde(alias = "rads")]
    Radiation {
        /// Signed radiation delta.
        value: i32,
    },
    /// Adjust a S.P.E.C.I.A.L. attribute.
    Stat {
        /// The attribute to change.
        stat: SpecialStat,
        /// Signed change.
        #[serde(alias = "value")]
        delta: i32,
    },
    /// Hand the player an item.
    GiveItem {
        /// The item template; a fresh instance id is generated on grant.
        item: Box<Item>,
    },
    /// Hand the player bottle caps.
    GiveCaps {
        /// Number of caps.
        amount: u32,
    },
    /// Complete an active quest.
    CompleteQuest {
        /// Quest to complete.
        quest: QuestId,
    },
    /// Offer a quest, making it active.
    OfferQuest {
        /// Quest to offer.
        quest: QuestId,
    },
}

impl Effect {
    /// Short human-readable description, as shown when examining an item.
    pub fn describe(&self) -> String {
        match self {
            Effect::Heal { value } => format!("Restores {value} HP"),
            Effect::Radiation { value } if *value > 0 => format!("Adds {value} radiation"),
            Effect::Radiation { value } => format!("Removes {} radiation", value.unsigned_abs()),
            Effect::Stat { stat, delta } => {
                let sign = if *delta > 0 { "+" } else { "" };
                format!("{sign}{delta} to {stat}")
            }
            Effect::GiveItem { item } => format!("Grants {}", item.name),
            Effect::GiveCaps { amount } => format!("Grants {amount} caps"),
            Effect::CompleteQuest { quest } => format!("Completes quest {quest}"),
            Effect::OfferQuest { quest } => format!("Starts quest {quest}"),
        }
    }
}
