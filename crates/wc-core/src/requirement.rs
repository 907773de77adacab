//! Requirements gating exits.

use serde::{Deserialize, Serialize};

use crate::id::QuestId;
use crate::stats::{Skill, SpecialStat};

/// A predicate over player state that must hold before an exit can be used.
///
/// Evaluated by the engine. Kinds this build does not know deserialize to
/// [`Requirement::Unknown`], which is always satisfied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Requirement {
    /// The player carries an item whose name contains this text.
    Item {
        /// Item name (substring, case-insensitive).
        item: String,
    },
    /// A skill is at or above a threshold.
    Skill {
        /// The skill checked.
        skill: Skill,
        /// Minimum value.
        value: u32,
    },
    /// A S.P.E.C.I.A.L. attribute is at or above a threshold.
    Special {
        /// The attribute checked.
        stat: SpecialStat,
        /// Minimum value.
        value: u32,
    },
    /// A quest has been completed.
    Quest {
        /// The quest id.
        quest: QuestId,
    },
    /// Unrecognized requirement kind.
    #[serde(other)]
    Unknown,
}
