//! Effect application and reward grants.

use tracing::info;
use wc_core::Effect;

use crate::narration::{Severity, UiRefresh};
use crate::player::Acquired;
use crate::session::GameSession;

impl GameSession {
    /// Apply one effect to the player or quest log.
    ///
    /// Every variant is handled here; new effect kinds fail to compile until
    /// they are.
    pub(crate) fn apply_effect(&mut self, effect: &Effect) {
        match effect {
            Effect::Heal { value } => {
                let restored = self.player.heal(*value);
                self.say(Severity::Success, format!("You restore {restored} HP."));
                self.touch(UiRefresh::Vitals);
            }
            Effect::Radiation { value } => {
                let rads = self.player.adjust_rads(*value);
                let text = if *value > 0 {
                    format!("You absorb {value} rads. Radiation: {rads}/{}", self.player.max_rads)
                } else {
                    format!(
                        "Radiation reduced by {}. Radiation: {rads}/{}",
                        value.unsigned_abs(),
                        self.player.max_rads
                    )
                };
                let severity = if *value > 0 { Severity::Error } else { Severity::Success };
                self.say(severity, text);
                self.touch(UiRefresh::Vitals);
            }
            Effect::Stat { stat, delta } => {
                let now = self.player.special.adjust(*stat, *delta);
                self.say(
                    Severity::Success,
                    format!("Your {stat} is now {now}."),
                );
                self.touch(UiRefresh::Vitals);
            }
            Effect::GiveItem { item } => {
                let item = item.instantiate();
                let name = item.name.clone();
                match self.player.acquire(item) {
                    Acquired::Caps => self.say(Severity::Success, "You receive a bottle cap."),
                    Acquired::Stored(_) => {
                        self.say(Severity::Success, format!("You receive {name}."));
                    }
                }
                self.touch(UiRefresh::Inventory);
            }
            Effect::GiveCaps { amount } => self.grant_caps(*amount),
            Effect::CompleteQuest { quest } => self.complete_quest(quest),
            Effect::OfferQuest { quest } => self.offer_quest(quest),
        }
    }

    /// Award experience, levelling up at most once.
    pub(crate) fn grant_experience(&mut self, amount: u32) {
        self.say(
            Severity::Success,
            format!("You gain {amount} experience points!"),
        );
        if let Some(level) = self.player.gain_experience(amount) {
            info!(level, "level up");
            self.say(Severity::Highlight, format!("Level up! You are now level {level}!"));
            self.say(
                Severity::Success,
                "Your health and action points have increased!",
            );
        }
        self.touch(UiRefresh::Vitals);
    }

    pub(crate) fn grant_caps(&mut self, amount: u32) {
        self.player.caps = self.player.caps.saturating_add(amount);
        self.say(Severity::Success, format!("You receive {amount} caps."));
        self.touch(UiRefresh::Inventory);
    }
}
