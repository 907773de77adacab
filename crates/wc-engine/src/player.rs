//! Player character state.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use wc_core::{Item, ItemId, ItemKind, Skills, Special};

use crate::inventory::{Consolidation, Inventory, Stack};

/// Damage dealt with no weapon equipped.
pub const UNARMED_DAMAGE: u32 = 5;

/// Weak references into the inventory for the two equipment slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipped {
    /// Inventory entry in the weapon slot.
    pub weapon: Option<ItemId>,
    /// Inventory entry in the armor slot.
    pub armor: Option<ItemId>,
}

/// Where an acquired item ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acquired {
    /// A bottle cap, credited to the caps counter.
    Caps,
    /// Stored in the inventory entry with this id.
    Stored(ItemId),
}

/// The player character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub name: String,
    pub level: u32,
    pub experience: u32,
    pub hp: i32,
    pub max_hp: i32,
    pub ap: i32,
    pub max_ap: i32,
    pub rads: u32,
    pub max_rads: u32,
    pub caps: u32,
    pub max_weight: f64,
    pub special: Special,
    pub skills: Skills,
    #[serde(default)]
    pub inventory: Inventory,
    #[serde(default)]
    pub equipped: Equipped,
    /// Names of every NPC the player has spoken to.
    #[serde(default)]
    pub talked_to: BTreeSet<String>,
    /// Number of combat encounters started.
    #[serde(default)]
    pub encounters: u32,
}

impl Player {
    /// A fresh level-1 character.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: 1,
            experience: 0,
            hp: 100,
            max_hp: 100,
            ap: 100,
            max_ap: 100,
            rads: 0,
            max_rads: 100,
            caps: 0,
            max_weight: 150.0,
            special: Special::default(),
            skills: Skills::new(),
            inventory: Inventory::new(),
            equipped: Equipped::default(),
            talked_to: BTreeSet::new(),
            encounters: 0,
        }
    }

    /// Current carried weight.
    pub fn weight(&self) -> f64 {
        self.inventory.weight()
    }

    /// Whether `extra` more pounds fit under the carry limit.
    pub fn can_carry(&self, extra: f64) -> bool {
        self.weight() + extra <= self.max_weight
    }

    /// Take ownership of an item. Bottle caps become caps, everything else
    /// goes into the inventory. Weight is not checked here.
    pub fn acquire(&mut self, item: Item) -> Acquired {
        if item.is_bottle_cap() {
            self.caps += 1;
            Acquired::Caps
        } else {
            Acquired::Stored(self.inventory.add(item))
        }
    }

    /// Remove one unit of an inventory entry, clearing any equipment slot
    /// that pointed at it once the entry is gone.
    pub fn remove_one(&mut self, id: ItemId) -> Option<Item> {
        let item = self.inventory.remove_one(id)?;
        if !self.inventory.contains(id) {
            self.unequip(id);
        }
        Some(item)
    }

    /// Put an inventory entry into the matching slot. Returns false for
    /// items that are neither weapon nor armor.
    pub fn equip(&mut self, id: ItemId) -> bool {
        match self.inventory.get(id).map(|s| &s.item.kind) {
            Some(ItemKind::Weapon { .. }) => self.equipped.weapon = Some(id),
            Some(ItemKind::Armor { .. }) => self.equipped.armor = Some(id),
            _ => return false,
        }
        true
    }

    fn unequip(&mut self, id: ItemId) {
        if self.equipped.weapon == Some(id) {
            self.equipped.weapon = None;
        }
        if self.equipped.armor == Some(id) {
            self.equipped.armor = None;
        }
    }

    /// Whether the entry sits in either slot.
    pub fn is_equipped(&self, id: ItemId) -> bool {
        self.equipped.weapon == Some(id) || self.equipped.armor == Some(id)
    }

    /// The equipped weapon's entry.
    pub fn weapon(&self) -> Option<&Stack> {
        self.equipped.weapon.and_then(|id| self.inventory.get(id))
    }

    /// The equipped armor's entry.
    pub fn armor(&self) -> Option<&Stack> {
        self.equipped.armor.and_then(|id| self.inventory.get(id))
    }

    /// Base damage of the equipped weapon, or the unarmed default.
    pub fn weapon_damage(&self) -> u32 {
        match self.weapon().map(|s| &s.item.kind) {
            Some(ItemKind::Weapon { damage }) => *damage,
            _ => UNARMED_DAMAGE,
        }
    }

    /// Experience needed for the next level.
    pub fn experience_to_level(&self) -> u32 {
        self.level * 100
    }

    /// Add experience and check the level threshold once. Returns the new
    /// level when the grant caused a level-up.
    pub fn gain_experience(&mut self, amount: u32) -> Option<u32> {
        self.experience = self.experience.saturating_add(amount);
        if self.experience >= self.experience_to_level() {
            self.level += 1;
            self.experience = 0;
            self.max_hp += 10;
            self.hp = self.max_hp;
            self.max_ap += 5;
            self.ap = self.max_ap;
            Some(self.level)
        } else {
            None
        }
    }

    /// Restore hit points up to the maximum. Returns the amount restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        let amount = i32::try_from(amount).unwrap_or(i32::MAX);
        self.hp = self.hp.saturating_add(amount).min(self.max_hp).max(before);
        (self.hp - before).unsigned_abs()
    }

    /// Apply a signed radiation change, clamped to `0..=max_rads`.
    pub fn adjust_rads(&mut self, delta: i32) -> u32 {
        self.rads = self.rads.saturating_add_signed(delta).min(self.max_rads);
        self.rads
    }

    /// Subtract damage from hit points.
    pub fn take_damage(&mut self, amount: u32) {
        let amount = i32::try_from(amount).unwrap_or(i32::MAX);
        self.hp = self.hp.saturating_sub(amount);
    }

    /// Whether hit points have dropped to zero or below.
    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }

    /// Record a conversation partner. Returns false if already recorded.
    pub fn record_talk(&mut self, npc: &str) -> bool {
        self.talked_to.insert(npc.to_string())
    }

    /// Whether the player has talked to this NPC.
    pub fn has_talked_to(&self, npc: &str) -> bool {
        self.talked_to.contains(npc)
    }

    /// Repair inventory drift after a load: credit lingering bottle caps,
    /// merge split stacks and drop equipment references that no longer
    /// resolve.
    pub fn consolidate(&mut self) -> Consolidation {
        let report = self.inventory.consolidate();
        self.caps = self.caps.saturating_add(report.caps);
        for slot in [&mut self.equipped.weapon, &mut self.equipped.armor] {
            if slot.is_some_and(|id| !self.inventory.contains(id)) {
                *slot = None;
            }
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wc_core::{Effect, Skill, SpecialStat};

    fn stimpak() -> Item {
        Item::new(
            "Stimpak",
            ItemKind::Consumable {
                effect: Some(Effect::Heal { value: 25 }),
            },
            0.5,
        )
    }

    #[test]
    fn defaults() {
        let player = Player::new("Vault Dweller");
        assert_eq!(player.level, 1);
        assert_eq!(player.hp, 100);
        assert_eq!(player.max_weight, 150.0);
        assert_eq!(player.special.get(SpecialStat::Luck), 5);
        assert_eq!(player.skills.get(Skill::Lockpick), 0);
        assert_eq!(player.weapon_damage(), UNARMED_DAMAGE);
    }

    #[test]
    fn bottle_caps_become_caps() {
        let mut player = Player::new("p");
        assert_eq!(player.acquire(Item::bottle_cap()), Acquired::Caps);
        assert_eq!(player.caps, 1);
        assert!(player.inventory.is_empty());
    }

    #[test]
    fn equip_keeps_item_in_inventory() {
        let mut player = Player::new("p");
        let Acquired::Stored(id) =
            player.acquire(Item::new("10mm Pistol", ItemKind::Weapon { damage: 15 }, 3.0))
        else {
            panic!("pistol should be stored");
        };
        assert!(player.equip(id));
        assert!(player.inventory.contains(id));
        assert!(player.is_equipped(id));
        assert_eq!(player.weapon_damage(), 15);
    }

    #[test]
    fn equip_rejects_other_kinds() {
        let mut player = Player::new("p");
        let Acquired::Stored(id) = player.acquire(stimpak()) else {
            panic!("stimpak should be stored");
        };
        assert!(!player.equip(id));
        assert_eq!(player.equipped, Equipped::default());
    }

    #[test]
    fn removing_last_unit_clears_slot() {
        let mut player = Player::new("p");
        let Acquired::Stored(id) =
            player.acquire(Item::new("Vault 101 Jumpsuit", ItemKind::Armor { defense: 5 }, 2.0))
        else {
            panic!("armor should be stored");
        };
        player.equip(id);
        player.remove_one(id);
        assert!(player.armor().is_none());
        assert_eq!(player.equipped.armor, None);
    }

    #[test]
    fn single_level_up_per_grant() {
        let mut player = Player::new("p");
        player.hp = 40;
        assert_eq!(player.gain_experience(99), None);
        assert_eq!(player.gain_experience(500), Some(2));
        assert_eq!(player.experience, 0);
        assert_eq!(player.max_hp, 110);
        assert_eq!(player.hp, 110);
        assert_eq!(player.max_ap, 105);
        assert_eq!(player.ap, 105);
    }

    #[test]
    fn heal_caps_at_max() {
        let mut player = Player::new("p");
        player.hp = 90;
        assert_eq!(player.heal(25), 10);
        assert_eq!(player.hp, 100);
    }

    #[test]
    fn rads_clamp_both_ways() {
        let mut player = Player::new("p");
        assert_eq!(player.adjust_rads(-25), 0);
        assert_eq!(player.adjust_rads(60), 60);
        assert_eq!(player.adjust_rads(60), 100);
    }

    #[test]
    fn damage_and_death() {
        let mut player = Player::new("p");
        player.take_damage(99);
        assert!(!player.is_dead());
        player.take_damage(3);
        assert!(player.is_dead());
        assert_eq!(player.hp, -2);
    }

    #[test]
    fn consolidate_drops_dangling_slots() {
        let mut player = Player::new("p");
        player.equipped.weapon = Some(ItemId::new());
        player.consolidate();
        assert_eq!(player.equipped.weapon, None);
    }

    #[test]
    fn talked_to_is_a_set() {
        let mut player = Player::new("p");
        assert!(player.record_talk("Lucas Simms"));
        assert!(!player.record_talk("Lucas Simms"));
        assert!(player.has_talked_to("Lucas Simms"));
    }
}
