//! Items and their type-specific data.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::effect::Effect;
use crate::id::ItemId;

/// Name of the wasteland's currency item. Bottle caps never occupy an
/// inventory slot; they convert straight into the caps counter.
pub const BOTTLE_CAP: &str = "Bottle Cap";

/// Item names that stack regardless of their type.
const STACKABLE_NAMES: &[&str] = &[BOTTLE_CAP, "Pre-War Money"];

/// Type-specific item data, tagged by `type` in content files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ItemKind {
    /// Equippable weapon.
    Weapon {
        /// Base damage replacing the unarmed default.
        damage: u32,
    },
    /// Equippable armor.
    Armor {
        /// Defense rating.
        #[serde(default)]
        defense: u32,
    },
    /// Single-use item carrying an optional effect.
    Consumable {
        /// What happens when used.
        #[serde(default)]
        effect: Option<Effect>,
    },
    /// Money of some kind.
    Currency,
    /// A utility item.
    Tool,
    /// Opens something.
    Key,
    /// Ammunition.
    Ammo,
}

/// The discriminant of an [`ItemKind`], used for stack matching and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum ItemType {
    Weapon,
    Armor,
    Consumable,
    Currency,
    Tool,
    Key,
    Ammo,
}

impl ItemType {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Weapon => "Weapon",
            Self::Armor => "Armor",
            Self::Consumable => "Consumable",
            Self::Currency => "Currency",
            Self::Tool => "Tool",
            Self::Key => "Key",
            Self::Ammo => "Ammo",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An item, either lying in a location or held in an inventory stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Instance identity.
    #[serde(default)]
    pub id: ItemId,
    /// Display name; also the key used for stack matching.
    pub name: String,
    /// Type-specific data.
    #[serde(flatten)]
    pub kind: ItemKind,
    /// Unit weight in pounds.
    #[serde(default)]
    pub weight: f64,
    /// Flavor text.
    #[serde(default)]
    pub description: String,
}

impl Item {
    /// Create an item with a fresh id.
    pub fn new(name: impl Into<String>, kind: ItemKind, weight: f64) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            kind,
            weight,
            description: String::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// A single bottle cap.
    pub fn bottle_cap() -> Self {
        Self::new(BOTTLE_CAP, ItemKind::Currency, 0.0)
            .with_description("The currency of the wasteland.")
    }

    /// Copy of this item with a new instance id.
    pub fn instantiate(&self) -> Self {
        Self {
            id: ItemId::new(),
            ..self.clone()
        }
    }

    /// The item's type discriminant.
    pub fn item_type(&self) -> ItemType {
        match self.kind {
            ItemKind::Weapon { .. } => ItemType::Weapon,
            ItemKind::Armor { .. } => ItemType::Armor,
            ItemKind::Consumable { .. } => ItemType::Consumable,
            ItemKind::Currency => ItemType::Currency,
            ItemKind::Tool => ItemType::Tool,
            ItemKind::Key => ItemType::Key,
            ItemKind::Ammo => ItemType::Ammo,
        }
    }

    /// Whether multiple units merge into one inventory entry.
    pub fn is_stackable(&self) -> bool {
        matches!(
            self.item_type(),
            ItemType::Currency | ItemType::Consumable | ItemType::Ammo
        ) || STACKABLE_NAMES.contains(&self.name.as_str())
    }

    /// Bottle caps convert to the caps counter instead of entering the inventory.
    pub fn is_bottle_cap(&self) -> bool {
        self.item_type() == ItemType::Currency && self.name == BOTTLE_CAP
    }

    /// Whether `other` belongs in the same stack as this item.
    pub fn stacks_with(&self, other: &Item) -> bool {
        self.name == other.name && self.item_type() == other.item_type()
    }

    /// Case-insensitive substring match against the item name.
    pub fn matches(&self, needle: &str) -> bool {
        name_matches(&self.name, needle)
    }
}

/// Case-insensitive substring containment; an empty needle never matches.
pub fn name_matches(name: &str, needle: &str) -> bool {
    let needle = needle.trim().to_lowercase();
    !needle.is_empty() && name.to_lowercase().contains(&needle)
}
