//! Inventory stacks, weight accounting and post-load consolidation.

use serde::{Deserialize, Serialize};
use wc_core::{Item, ItemId};

/// One inventory entry: a single item, or several identical stackable units.
///
/// The stack takes its identity from the first unit it was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stack {
    /// The unit item.
    #[serde(flatten)]
    pub item: Item,
    /// Units held; always at least 1.
    #[serde(default = "one")]
    pub count: u32,
}

fn one() -> u32 {
    1
}

impl Stack {
    /// A stack of one.
    pub fn single(item: Item) -> Self {
        Self { item, count: 1 }
    }

    /// Stable identity of this entry.
    pub fn id(&self) -> ItemId {
        self.item.id
    }

    /// Unit weight times count.
    pub fn weight(&self) -> f64 {
        self.item.weight * f64::from(self.count)
    }
}

/// The player's inventory: an ordered list of stacks.
///
/// Bottle caps never reach this type; the player converts them into the caps
/// counter first. Carried weight is derived from the stacks, so it always
/// equals the sum of unit weight times count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    stacks: Vec<Stack>,
}

/// Result of [`Inventory::consolidate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Consolidation {
    /// Bottle caps pulled out of the inventory, to be credited as caps.
    pub caps: u32,
    /// Stacks merged into an earlier stack of the same item.
    pub merged: usize,
}

impl Inventory {
    /// An empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit. Stackable items merge into an existing stack of the
    /// same name and type; everything else gets its own entry. Returns the
    /// id of the entry that now holds the unit.
    pub fn add(&mut self, item: Item) -> ItemId {
        if item.is_stackable() {
            if let Some(stack) = self.stacks.iter_mut().find(|s| s.item.stacks_with(&item)) {
                stack.count += 1;
                return stack.id();
            }
        }
        let id = item.id;
        self.stacks.push(Stack::single(item));
        id
    }

    /// Remove one unit from an entry, pruning the entry when it empties.
    /// Returns a copy of the removed unit.
    pub fn remove_one(&mut self, id: ItemId) -> Option<Item> {
        let pos = self.stacks.iter().position(|s| s.id() == id)?;
        if self.stacks[pos].count > 1 {
            self.stacks[pos].count -= 1;
            Some(self.stacks[pos].item.instantiate())
        } else {
            Some(self.stacks.remove(pos).item)
        }
    }

    /// First entry whose name contains `needle`, ignoring case.
    pub fn find(&self, needle: &str) -> Option<&Stack> {
        self.stacks.iter().find(|s| s.item.matches(needle))
    }

    /// Entry by id.
    pub fn get(&self, id: ItemId) -> Option<&Stack> {
        self.stacks.iter().find(|s| s.id() == id)
    }

    /// Whether an entry with this id exists.
    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Total carried weight.
    pub fn weight(&self) -> f64 {
        self.stacks.iter().map(Stack::weight).sum()
    }

    /// Entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Stack> {
        self.stacks.iter()
    }

    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    /// Repair stacking drift after loading a save.
    ///
    /// Bottle caps are removed and reported for crediting, stackable entries
    /// of the same item merge into the first one, zero counts read as one,
    /// and a non-stackable entry with a count above one is split into
    /// separate entries.
    pub fn consolidate(&mut self) -> Consolidation {
        let mut report = Consolidation::default();
        let mut result: Vec<Stack> = Vec::with_capacity(self.stacks.len());

        for mut stack in self.stacks.drain(..) {
            let count = stack.count.max(1);

            if stack.item.is_bottle_cap() {
                report.caps += count;
                continue;
            }

            if stack.item.is_stackable() {
                if let Some(existing) = result.iter_mut().find(|s| s.item.stacks_with(&stack.item)) {
                    existing.count += count;
                    report.merged += 1;
                } else {
                    stack.count = count;
                    result.push(stack);
                }
            } else {
                let copies: Vec<Stack> = (1..count)
                    .map(|_| Stack::single(stack.item.instantiate()))
                    .collect();
                stack.count = 1;
                result.push(stack);
                result.extend(copies);
            }
        }

        self.stacks = result;
        report
    }
}
