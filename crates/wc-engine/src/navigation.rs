//! Looking, moving, taking, examining and using items.

use std::mem;

use tracing::{debug, info};
use wc_core::{Effect, Exit, ItemId, ItemKind, Requirement};

use crate::error::{EngineError, EngineResult};
use crate::narration::{Severity, UiRefresh};
use crate::parser::suggest_name;
use crate::player::Acquired;
use crate::session::GameSession;
use crate::status::fmt_weight;

impl GameSession {
    /// `look`, `look <direction>` or `look <thing>`.
    pub(crate) fn look(&mut self, target: Option<&str>) -> EngineResult<()> {
        let Some(target) = target else {
            return self.describe_location();
        };

        let here = self.current()?;
        if let Some(exit) = here.find_exit(target).cloned() {
            return self.look_toward(&exit);
        }

        // Items, then NPCs, then enemies
        let found = if let Some(item) = here.find_item(target) {
            Some((item.name.clone(), item.description.clone()))
        } else if let Some(npc) = here.find_npc(target) {
            Some((npc.name.clone(), npc.description.clone()))
        } else {
            here.find_enemy(target)
                .map(|e| (e.name.clone(), e.description.clone()))
        };

        let Some((name, description)) = found else {
            return Err(self.not_here(target));
        };
        if description.is_empty() {
            self.say(
                Severity::Normal,
                format!("You see nothing special about {name}."),
            );
        } else {
            self.say(Severity::Normal, description);
        }
        Ok(())
    }

    /// Full description of the current location.
    pub(crate) fn describe_location(&mut self) -> EngineResult<()> {
        let here = self.current()?;
        let mut lines = vec![
            (Severity::Highlight, here.name.clone()),
            (Severity::Normal, here.description.clone()),
        ];
        if !here.exits.is_empty() {
            let dirs: Vec<&str> = here.exits.iter().map(|e| e.direction.as_str()).collect();
            lines.push((Severity::Info, format!("Exits: {}", dirs.join(", "))));
        }
        if !here.items.is_empty() {
            let names: Vec<&str> = here.items.iter().map(|i| i.name.as_str()).collect();
            lines.push((Severity::Info, format!("Items: {}", names.join(", "))));
        }
        if !here.npcs.is_empty() {
            let names: Vec<&str> = here.npcs.iter().map(|n| n.name.as_str()).collect();
            lines.push((Severity::Info, format!("People: {}", names.join(", "))));
        }
        if !here.enemies.is_empty() {
            let names: Vec<&str> = here.enemies.iter().map(|e| e.name.as_str()).collect();
            lines.push((Severity::Error, format!("Enemies: {}", names.join(", "))));
        }

        for (severity, text) in lines {
            self.say(severity, text);
        }
        self.touch(UiRefresh::Location);
        Ok(())
    }

    /// Peek through an exit without moving: short description and counts only.
    fn look_toward(&mut self, exit: &Exit) -> EngineResult<()> {
        let there = self
            .world
            .location(&exit.destination)
            .ok_or_else(|| EngineError::LocationNotFound(exit.destination.clone()))?;

        let mut lines = vec![
            (Severity::Normal, format!("Looking {}, you see:", exit.direction)),
            (Severity::Normal, there.short_description.clone()),
        ];
        if !there.enemies.is_empty() {
            lines.push((
                Severity::Error,
                format!("You can see {} enemy(ies) in the distance.", there.enemies.len()),
            ));
        }
        if !there.npcs.is_empty() {
            lines.push((
                Severity::Info,
                format!("You can see {} person(s) there.", there.npcs.len()),
            ));
        }
        if !there.items.is_empty() {
            lines.push((Severity::Info, "You notice some items scattered about.".to_string()));
        }

        for (severity, text) in lines {
            self.say(severity, text);
        }
        Ok(())
    }

    pub(crate) fn go(&mut self, direction: Option<&str>) -> EngineResult<()> {
        let direction = direction.ok_or(EngineError::MissingArgument("Go where?"))?;
        let exit = self
            .current()?
            .find_exit(direction)
            .cloned()
            .ok_or_else(|| EngineError::NoExit(direction.to_string()))?;

        if let Some(requirement) = &exit.requirement {
            if !self.requirement_met(requirement) {
                debug!(direction = %exit.direction, ?requirement, "exit blocked");
                return Err(EngineError::Blocked(exit.blocked_message.clone().unwrap_or_else(
                    || format!("You can't go {} right now.", exit.direction),
                )));
            }
        }
        if !self.world.contains_location(&exit.destination) {
            return Err(EngineError::LocationNotFound(exit.destination));
        }

        info!(from = %self.location, to = %exit.destination, "moving");
        self.visited.insert(exit.destination.clone());
        self.location = exit.destination;
        self.say(Severity::Normal, format!("You go {}.", exit.direction));
        self.touch(UiRefresh::Quests);
        self.describe_location()
    }

    /// Evaluate an exit requirement against the player.
    pub(crate) fn requirement_met(&self, requirement: &Requirement) -> bool {
        match requirement {
            Requirement::Item { item } => self.player.inventory.find(item).is_some(),
            Requirement::Skill { skill, value } => self.player.skills.get(*skill) >= *value,
            Requirement::Special { stat, value } => self.player.special.get(*stat) >= *value,
            Requirement::Quest { quest } => self.quests.is_completed(quest),
            Requirement::Unknown => true,
        }
    }

    pub(crate) fn take(&mut self, name: Option<&str>) -> EngineResult<()> {
        let name = name.ok_or(EngineError::MissingArgument("Take what?"))?;
        let Some(item) = self.current()?.find_item(name) else {
            return Err(self.not_here(name));
        };
        let (id, item_name, weight, is_cap) =
            (item.id, item.name.clone(), item.weight, item.is_bottle_cap());

        if !is_cap && !self.player.can_carry(weight) {
            return Err(EngineError::TooHeavy(item_name));
        }
        let Some(item) = self.current_mut()?.remove_item(id) else {
            return Err(self.not_here(name));
        };
        match self.player.acquire(item) {
            Acquired::Caps => self.say(Severity::Success, "You collect a bottle cap (1 cap)"),
            Acquired::Stored(_) => self.say(Severity::Success, format!("You take the {item_name}.")),
        }
        self.touch(UiRefresh::Inventory);
        self.touch(UiRefresh::Location);
        Ok(())
    }

    /// Take everything that fits. Caps are always collected.
    pub(crate) fn take_all(&mut self) -> EngineResult<()> {
        if self.current()?.items.is_empty() {
            self.say(Severity::Info, "There are no items here to take.");
            return Ok(());
        }

        let items = mem::take(&mut self.current_mut()?.items);
        let mut caps = 0u32;
        let mut taken = Vec::new();
        let mut left = Vec::new();
        for item in items {
            if item.is_bottle_cap() {
                self.player.acquire(item);
                caps += 1;
            } else if self.player.can_carry(item.weight) {
                taken.push(item.name.clone());
                self.player.acquire(item);
            } else {
                left.push(item);
            }
        }
        let skipped: Vec<String> = left.iter().map(|i| i.name.clone()).collect();
        self.current_mut()?.items = left;

        if caps > 0 {
            self.say(
                Severity::Success,
                format!("You collect {caps} bottle cap(s) ({caps} caps)"),
            );
        }
        if !taken.is_empty() {
            self.say(Severity::Success, format!("You take: {}", taken.join(", ")));
        }
        if !skipped.is_empty() {
            self.say(
                Severity::Error,
                format!("You can't carry: {} (too heavy)", skipped.join(", ")),
            );
        }
        if caps > 0 || !taken.is_empty() {
            self.touch(UiRefresh::Inventory);
            self.touch(UiRefresh::Location);
        }
        Ok(())
    }

    /// Inspect an item carried or lying here.
    pub(crate) fn examine(&mut self, name: Option<&str>) -> EngineResult<()> {
        let name = name.ok_or(EngineError::MissingArgument("Examine what?"))?;
        let (item, count, equipped) = match self.player.inventory.find(name) {
            Some(stack) => (
                stack.item.clone(),
                stack.count,
                self.player.is_equipped(stack.id()),
            ),
            None => {
                let item = self
                    .current()?
                    .find_item(name)
                    .cloned()
                    .ok_or_else(|| EngineError::NotFound(name.to_string()))?;
                (item, 1, false)
            }
        };

        let mut lines = vec![(Severity::Highlight, format!("Examining {}:", item.name))];
        if !item.description.is_empty() {
            lines.push((Severity::Normal, item.description.clone()));
        }
        lines.push((Severity::Info, format!("Type: {}", item.item_type())));
        match &item.kind {
            ItemKind::Weapon { damage } => lines.push((Severity::Info, format!("Damage: {damage}"))),
            ItemKind::Armor { defense } => {
                lines.push((Severity::Info, format!("Defense: {defense}")));
            }
            ItemKind::Consumable { effect } => {
                let text = effect.as_ref().map_or_else(|| "None".to_string(), Effect::describe);
                lines.push((Severity::Info, format!("Effect: {text}")));
            }
            _ => {}
        }
        lines.push((Severity::Info, format!("Weight: {} lbs", fmt_weight(item.weight))));
        if count > 1 {
            lines.push((Severity::Info, format!("Quantity: {count}")));
        }
        if equipped {
            let slot = match item.kind {
                ItemKind::Armor { .. } => "Armor",
                _ => "Weapon",
            };
            lines.push((Severity::Success, format!("Status: Equipped ({slot})")));
        }

        for (severity, text) in lines {
            self.say(severity, text);
        }
        Ok(())
    }

    /// `use <item>` outside combat.
    pub(crate) fn use_item(&mut self, name: Option<&str>) -> EngineResult<()> {
        let name = name.ok_or(EngineError::MissingArgument("Use what?"))?;
        let stack = self
            .player
            .inventory
            .find(name)
            .ok_or_else(|| EngineError::NotCarrying(name.to_string()))?;
        let (id, item) = (stack.id(), stack.item.clone());

        match &item.kind {
            ItemKind::Weapon { .. } | ItemKind::Armor { .. } => {
                self.player.equip(id);
                info!(item = %item.name, "equipped");
                self.say(Severity::Success, format!("You equip {}.", item.name));
                self.touch(UiRefresh::Inventory);
                self.touch(UiRefresh::Vitals);
                Ok(())
            }
            ItemKind::Consumable { effect } => {
                self.use_consumable(id, &item.name, effect.as_ref());
                Ok(())
            }
            ItemKind::Key => {
                self.say(
                    Severity::Normal,
                    format!("You use {}, but there is nothing to unlock here.", item.name),
                );
                Ok(())
            }
            _ => Err(EngineError::CannotUse(item.name)),
        }
    }

    /// Consume one unit and apply its effect. Items without an effect are
    /// kept.
    pub(crate) fn use_consumable(&mut self, id: ItemId, name: &str, effect: Option<&Effect>) {
        let Some(effect) = effect else {
            self.say(Severity::Info, format!("You use {name}, but nothing happens."));
            return;
        };
        self.player.remove_one(id);
        self.say(Severity::Normal, format!("You use {name}."));
        self.apply_effect(effect);
        self.touch(UiRefresh::Inventory);
    }

    /// `NotHere` with the closest name present at this location.
    pub(crate) fn not_here(&self, name: &str) -> EngineError {
        let suggestion = self.current().ok().and_then(|here| {
            let names = here
                .items
                .iter()
                .map(|i| i.name.as_str())
                .chain(here.npcs.iter().map(|n| n.name.as_str()))
                .chain(here.enemies.iter().map(|e| e.name.as_str()));
            suggest_name(name, names)
        });
        EngineError::NotHere {
            name: name.to_string(),
            suggestion,
        }
    }
}
