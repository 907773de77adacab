//! Turn-based combat against a single enemy.

use rand::Rng;
use rand::rngs::StdRng;
use tracing::{debug, info};
use wc_core::{EnemyId, ItemKind};

use crate::error::{EngineError, EngineResult};
use crate::narration::{Severity, UiRefresh};
use crate::parser::Command;
use crate::player::Player;
use crate::session::GameSession;

/// The fight in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Encounter {
    pub enemy: EnemyId,
    pub name: String,
}

/// Damage for one player attack: weapon (or unarmed) base, strength and luck
/// bonuses, plus a roll in `0..5`.
pub fn player_damage(player: &Player, rng: &mut StdRng) -> u32 {
    player.weapon_damage()
        + player.special.strength / 2
        + player.special.luck / 3
        + rng.random_range(0..5)
}

/// Damage for one enemy retaliation: base plus a roll in `0..3`.
pub fn enemy_damage(base: u32, rng: &mut StdRng) -> u32 {
    base + rng.random_range(0..3)
}

/// State of the enemy after a hit.
struct Struck {
    name: String,
    hp: i32,
    max_hp: i32,
    damage: u32,
}

impl GameSession {
    /// Enter combat with an enemy at the current location.
    pub(crate) fn start_combat(&mut self, target: Option<&str>) -> EngineResult<()> {
        let target = target.ok_or(EngineError::MissingArgument("Attack what?"))?;
        let Some(enemy) = self.current()?.find_enemy(target) else {
            return Err(self.not_here(target));
        };
        let (id, name, hp, max_hp) = (enemy.id, enemy.name.clone(), enemy.hp, enemy.max_hp);

        self.player.encounters += 1;
        info!(enemy = %name, encounter = self.player.encounters, "combat started");
        self.combat = Some(Encounter {
            enemy: id,
            name: name.clone(),
        });
        self.say(
            Severity::Error,
            format!("Combat started! You are fighting {name}!"),
        );
        self.say(Severity::Info, format!("{name}: {hp}/{max_hp} HP"));
        self.say(
            Severity::Info,
            "Type \"attack\" to fight or \"flee\" to run away.",
        );
        self.touch(UiRefresh::Quests);
        Ok(())
    }

    /// Every command while a fight is running comes through here.
    pub(crate) fn dispatch_combat(&mut self, command: Command) -> EngineResult<()> {
        match command {
            Command::Attack { .. } => self.attack_round(),
            Command::Flee => {
                self.flee();
                Ok(())
            }
            Command::Use { item } => self.use_in_combat(item.as_deref()),
            _ => Err(EngineError::CombatOnly),
        }
    }

    /// One exchange: the player strikes, and the enemy answers unless it
    /// fell.
    fn attack_round(&mut self) -> EngineResult<()> {
        let Some(encounter) = self.combat.clone() else {
            return Err(EngineError::NotInCombat);
        };
        let dealt = player_damage(&self.player, &mut self.rng);

        let struck = self.current_mut()?.enemy_mut(encounter.enemy).map(|enemy| {
            enemy.hp = enemy.hp.saturating_sub(i32::try_from(dealt).unwrap_or(i32::MAX));
            Struck {
                name: enemy.name.clone(),
                hp: enemy.hp,
                max_hp: enemy.max_hp,
                damage: enemy.damage,
            }
        });
        let Some(struck) = struck else {
            debug!(enemy = %encounter.enemy, "enemy vanished mid-fight");
            self.combat = None;
            return Err(EngineError::NotInCombat);
        };

        self.say(
            Severity::Normal,
            format!("You attack {} for {dealt} damage!", struck.name),
        );
        if struck.hp <= 0 {
            self.victory(encounter.enemy);
            return Ok(());
        }
        self.say(
            Severity::Info,
            format!("{}: {}/{} HP", struck.name, struck.hp, struck.max_hp),
        );

        let taken = enemy_damage(struck.damage, &mut self.rng);
        self.player.take_damage(taken);
        self.say(
            Severity::Error,
            format!("{} attacks you for {taken} damage!", struck.name),
        );
        self.touch(UiRefresh::Vitals);
        if self.player.is_dead() {
            self.game_over();
        }
        Ok(())
    }

    /// The enemy fell: reward, drop loot, leave combat.
    fn victory(&mut self, id: EnemyId) {
        self.combat = None;
        let Ok(here) = self.current_mut() else {
            return;
        };
        let Some(mut enemy) = here.remove_enemy(id) else {
            return;
        };
        let loot = std::mem::take(&mut enemy.loot);
        let dropped = !loot.is_empty();
        here.items.extend(loot);

        info!(enemy = %enemy.name, "combat won");
        self.say(Severity::Success, format!("You defeated {}!", enemy.name));
        self.grant_experience(enemy.experience);
        if dropped {
            self.say(Severity::Info, format!("{} dropped some items!", enemy.name));
        }
        self.touch(UiRefresh::Location);
    }

    fn flee(&mut self) {
        if let Some(encounter) = self.combat.take() {
            info!(enemy = %encounter.name, "fled combat");
        }
        self.say(Severity::Info, "You flee from combat!");
    }

    /// Only consumables work mid-fight. Using one costs the turn but draws
    /// no retaliation.
    fn use_in_combat(&mut self, name: Option<&str>) -> EngineResult<()> {
        let name = name.ok_or(EngineError::MissingArgument("Use what?"))?;
        let stack = self
            .player
            .inventory
            .find(name)
            .ok_or_else(|| EngineError::NotCarrying(name.to_string()))?;
        let (id, item) = (stack.id(), stack.item.clone());
        match &item.kind {
            ItemKind::Consumable { effect } => {
                self.use_consumable(id, &item.name, effect.as_ref());
                Ok(())
            }
            _ => Err(EngineError::CannotUseInCombat(item.name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use wc_core::{Item, Special};

    use super::*;
    use crate::narration::SessionState;
    use crate::testing::{new_session, run};

    #[test]
    fn damage_bounds_unarmed_zero_stats() {
        let mut player = Player::new("p");
        player.special = Special::uniform(0);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let d = player_damage(&player, &mut rng);
            assert!((5..=9).contains(&d), "damage {d} out of range");
        }
    }

    #[test]
    fn damage_includes_weapon_and_stats() {
        let mut player = Player::new("p");
        let id = player.inventory.add(Item::new("Knife", ItemKind::Weapon { damage: 10 }, 1.0));
        player.equip(id);
        // strength 5 -> +2, luck 5 -> +1
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..200 {
            let d = player_damage(&player, &mut rng);
            assert!((13..=17).contains(&d));
        }
    }

    #[test]
    fn enemy_damage_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            assert!((3..=5).contains(&enemy_damage(3, &mut rng)));
        }
    }

    #[test]
    fn attack_starts_combat() {
        let mut session = new_session();
        let outcome = run(&mut session, "attack rat");
        assert!(outcome.mentions("Combat started! You are fighting Rat!"));
        assert!(outcome.mentions("Rat: 15/15 HP"));
        assert!(session.in_combat());
        assert_eq!(session.player().encounters, 1);
        assert_eq!(session.player().hp, 100);
    }

    #[test]
    fn attack_missing_enemy() {
        let mut session = new_session();
        assert!(run(&mut session, "attack dragon").mentions("You don't see dragon here."));
        assert!(!session.in_combat());
        assert_eq!(session.player().encounters, 0);
    }

    #[test]
    fn unarmed_fight_ends_in_bounded_hits() {
        let mut session = new_session();
        session.player.special = Special::uniform(0);
        run(&mut session, "attack rat");
        let mut hits = 0;
        while session.in_combat() {
            let hp_before = session.player().hp;
            let outcome = run(&mut session, "attack");
            hits += 1;
            if session.in_combat() {
                let lost = hp_before - session.player().hp;
                assert!((3..=5).contains(&lost), "retaliation {lost}");
            } else {
                assert_eq!(session.player().hp, hp_before);
                assert!(outcome.mentions("You defeated Rat!"));
            }
            assert!(hits <= 3);
        }
        assert!(hits >= 2);
    }

    #[test]
    fn victory_drops_loot_and_rewards() {
        let mut session = new_session();
        session.player.special = Special::uniform(10);
        run(&mut session, "attack rat");
        let mut outcome = run(&mut session, "attack");
        while session.in_combat() {
            outcome = run(&mut session, "attack");
        }
        assert!(outcome.mentions("You gain 10 experience points!"));
        assert!(outcome.mentions("Rat dropped some items!"));
        assert_eq!(session.player().experience, 10);
        let here = session.current().unwrap();
        assert!(here.find_enemy("rat").is_none());
        assert!(here.find_item("rat tail").is_some());
    }

    #[test]
    fn flee_ends_without_rewards() {
        let mut session = new_session();
        run(&mut session, "attack rat");
        let outcome = run(&mut session, "run");
        assert_eq!(outcome.text(), "You flee from combat!");
        assert!(!session.in_combat());
        assert_eq!(session.player().experience, 0);
        assert!(session.current().unwrap().find_enemy("rat").is_some());
    }

    #[test]
    fn other_verbs_rejected_in_combat() {
        let mut session = new_session();
        run(&mut session, "attack rat");
        let before = session.player().clone();
        let outcome = run(&mut session, "go up");
        assert_eq!(
            outcome.text(),
            "In combat! Use \"attack\", \"flee\", or \"use [item]\"."
        );
        assert!(session.in_combat());
        assert_eq!(session.player(), &before);
        assert_eq!(session.location_id().as_str(), "cellar");
    }

    #[test]
    fn only_consumables_in_combat() {
        let mut session = new_session();
        run(&mut session, "take knife");
        run(&mut session, "take stimpak");
        run(&mut session, "attack rat");
        assert_eq!(
            run(&mut session, "use knife").text(),
            "You can't use Rusty Knife in combat."
        );
        session.player.hp = 60;
        let outcome = run(&mut session, "use stimpak");
        assert!(outcome.mentions("You restore 25 HP."));
        assert!(!outcome.mentions("attacks you"));
        assert_eq!(session.player().hp, 85);
        assert!(session.in_combat());
    }

    #[test]
    fn death_is_game_over() {
        let mut session = new_session();
        run(&mut session, "go up");
        run(&mut session, "attack brute");
        let mut outcome = run(&mut session, "attack");
        while session.in_combat() {
            outcome = run(&mut session, "attack");
        }
        assert!(outcome.mentions("You have died in the wasteland..."));
        assert_eq!(outcome.state, SessionState::GameOver);
        assert!(session.player().is_dead());

        let outcome = run(&mut session, "look");
        assert!(outcome.mentions("Type 'load' to restore your last save"));
        let outcome = run(&mut session, "restart");
        assert_eq!(outcome.state, SessionState::Playing);
        assert_eq!(session.player().hp, 100);
    }
}
