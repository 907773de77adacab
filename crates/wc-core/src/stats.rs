use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the seven S.P.E.C.I.A.L. attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpecialStat {
    /// Raw physical power; adds to melee and unarmed damage.
    Strength,
    /// Awareness of the surroundings.
    Perception,
    /// Stamina and toughness.
    Endurance,
    /// Presence and persuasion.
    Charisma,
    /// Reasoning and knowledge.
    Intelligence,
    /// Speed and coordination.
    Agility,
    /// Fortune; adds a small bonus to damage.
    Luck,
}

impl SpecialStat {
    /// All attributes in S.P.E.C.I.A.L. order.
    pub const ALL: [SpecialStat; 7] = [
        Self::Strength,
        Self::Perception,
        Self::Endurance,
        Self::Charisma,
        Self::Intelligence,
        Self::Agility,
        Self::Luck,
    ];

    /// Lowercase display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Perception => "perception",
            Self::Endurance => "endurance",
            Self::Charisma => "charisma",
            Self::Intelligence => "intelligence",
            Self::Agility => "agility",
            Self::Luck => "luck",
        }
    }
}

impl fmt::Display for SpecialStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the eighteen player skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum Skill {
    SmallGuns,
    BigGuns,
    EnergyWeapons,
    Unarmed,
    Melee,
    Throwing,
    FirstAid,
    Doctor,
    Sneak,
    Lockpick,
    Steal,
    Traps,
    Science,
    Repair,
    Speech,
    Barter,
    Gambling,
    Outdoorsman,
}

impl Skill {
    /// All skills in sheet order.
    pub const ALL: [Skill; 18] = [
        Self::SmallGuns,
        Self::BigGuns,
        Self::EnergyWeapons,
        Self::Unarmed,
        Self::Melee,
        Self::Throwing,
        Self::FirstAid,
        Self::Doctor,
        Self::Sneak,
        Self::Lockpick,
        Self::Steal,
        Self::Traps,
        Self::Science,
        Self::Repair,
        Self::Speech,
        Self::Barter,
        Self::Gambling,
        Self::Outdoorsman,
    ];
}

/// The player's S.P.E.C.I.A.L. attribute values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Special {
    /// Strength.
    pub strength: u32,
    /// Perception.
    pub perception: u32,
    /// Endurance.
    pub endurance: u32,
    /// Charisma.
    pub charisma: u32,
    /// Intelligence.
    pub intelligence: u32,
    /// Agility.
    pub agility: u32,
    /// Luck.
    pub luck: u32,
}

impl Special {
    /// Every attribute set to the same value.
    pub fn uniform(value: u32) -> Self {
        Self {
            strength: value,
            perception: value,
            endurance: value,
            charisma: value,
            intelligence: value,
            agility: value,
            luck: value,
        }
    }

    /// Read one attribute.
    pub fn get(&self, stat: SpecialStat) -> u32 {
        match stat {
            SpecialStat::Strength => self.strength,
            SpecialStat::Perception => self.perception,
            SpecialStat::Endurance => self.endurance,
            SpecialStat::Charisma => self.charisma,
            SpecialStat::Intelligence => self.intelligence,
            SpecialStat::Agility => self.agility,
            SpecialStat::Luck => self.luck,
        }
    }

    /// Apply a signed delta to one attribute, flooring at zero.
    /// Returns the new value.
    pub fn adjust(&mut self, stat: SpecialStat, delta: i32) -> u32 {
        let slot = match stat {
            SpecialStat::Strength => &mut self.strength,
            SpecialStat::Perception => &mut self.perception,
            SpecialStat::Endurance => &mut self.endurance,
            SpecialStat::Charisma => &mut self.charisma,
            SpecialStat::Intelligence => &mut self.intelligence,
            SpecialStat::Agility => &mut self.agility,
            SpecialStat::Luck => &mut self.luck,
        };
        *slot = slot.saturating_add_signed(delta);
        *slot
    }
}

impl Default for Special {
    fn default() -> Self {
        Self::uniform(5)
    }
}

/// Skill values. Skills absent from the map read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Skills(BTreeMap<Skill, u32>);

impl Skills {
    /// All eighteen skills at zero.
    pub fn new() -> Self {
        Self(Skill::ALL.iter().map(|s| (*s, 0)).collect())
    }

    /// Read a skill value.
    pub fn get(&self, skill: Skill) -> u32 {
        self.0.get(&skill).copied().unwrap_or(0)
    }

    /// Set a skill value.
    pub fn set(&mut self, skill: Skill, value: u32) {
        self.0.insert(skill, value);
    }
}
