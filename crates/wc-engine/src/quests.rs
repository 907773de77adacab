//! Quest tracking: active and completed sets, derived objectives, rewards.

use std::collections::BTreeSet;

use tracing::{debug, info};
use wc_core::{LocationId, ObjectiveKind, QuestId};

use crate::narration::{Severity, UiRefresh};
use crate::player::Player;
use crate::session::GameSession;

/// The player's quest journal.
///
/// A quest moves undiscovered → active → completed and never back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestLog {
    active: Vec<QuestId>,
    completed: Vec<QuestId>,
}

impl QuestLog {
    /// An empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a journal from persisted lists, dropping duplicates and any
    /// active entry that is already completed.
    pub fn from_parts(active: Vec<QuestId>, completed: Vec<QuestId>) -> Self {
        let mut log = Self::new();
        for id in completed {
            if !log.completed.contains(&id) {
                log.completed.push(id);
            }
        }
        for id in active {
            log.offer(id);
        }
        log
    }

    /// Activate a quest. Returns false if it is already active or completed.
    pub fn offer(&mut self, id: QuestId) -> bool {
        if self.is_active(&id) || self.is_completed(&id) {
            return false;
        }
        self.active.push(id);
        true
    }

    /// Move an active quest to completed. Returns false if it was not active.
    pub fn complete(&mut self, id: &QuestId) -> bool {
        let Some(pos) = self.active.iter().position(|q| q == id) else {
            return false;
        };
        let id = self.active.remove(pos);
        self.completed.push(id);
        true
    }

    pub fn is_active(&self, id: &QuestId) -> bool {
        self.active.contains(id)
    }

    pub fn is_completed(&self, id: &QuestId) -> bool {
        self.completed.contains(id)
    }

    /// Active quests in the order they were offered.
    pub fn active(&self) -> &[QuestId] {
        &self.active
    }

    /// Completed quests in completion order.
    pub fn completed(&self) -> &[QuestId] {
        &self.completed
    }
}

/// Evaluate an objective against observable state.
pub fn objective_met(
    kind: &ObjectiveKind,
    player: &Player,
    visited: &BTreeSet<LocationId>,
    log: &QuestLog,
) -> bool {
    match kind {
        ObjectiveKind::VisitLocation { location } => visited.contains(location),
        ObjectiveKind::TalkTo { npc } => player.has_talked_to(npc),
        ObjectiveKind::EncounterCount { count } => player.encounters >= *count,
        ObjectiveKind::QuestCompleted { quest } => log.is_completed(quest),
    }
}

impl GameSession {
    /// Activate a quest and narrate it. Unknown, active and completed quests
    /// are ignored.
    pub(crate) fn offer_quest(&mut self, id: &QuestId) {
        let Some(quest) = self.world.quest(id).cloned() else {
            debug!(quest = %id, "offer of undefined quest ignored");
            return;
        };
        if !self.quests.offer(id.clone()) {
            return;
        }
        info!(quest = %id, "quest started");
        self.say(Severity::Highlight, format!("New quest: {}", quest.name));
        if !quest.description.is_empty() {
            self.say(Severity::Info, quest.description);
        }
        for objective in quest.objectives {
            self.say(Severity::Info, format!("  - {}", objective.description));
        }
        self.touch(UiRefresh::Quests);
    }

    /// Complete an active quest and grant its reward. Anything not active is
    /// ignored, which keeps completion monotonic.
    pub(crate) fn complete_quest(&mut self, id: &QuestId) {
        if !self.quests.complete(id) {
            debug!(quest = %id, "completion of inactive quest ignored");
            return;
        }
        let (name, reward) = match self.world.quest(id) {
            Some(q) => (q.name.clone(), q.reward),
            None => (id.to_string(), Default::default()),
        };
        info!(quest = %id, "quest completed");
        self.say(Severity::Success, format!("Quest completed: {name}"));
        self.touch(UiRefresh::Quests);
        if reward.experience > 0 {
            self.grant_experience(reward.experience);
        }
        if reward.caps > 0 {
            self.grant_caps(reward.caps);
        }
    }

    /// Narrate the journal with derived objective marks.
    pub(crate) fn show_quests(&mut self) {
        let mut lines = Vec::new();
        if self.quests.active().is_empty() {
            lines.push((Severity::Info, "No active quests.".to_string()));
        } else {
            lines.push((Severity::Highlight, "Active Quests:".to_string()));
            for id in self.quests.active() {
                let Some(quest) = self.world.quest(id) else {
                    continue;
                };
                lines.push((Severity::Normal, quest.name.clone()));
                for objective in &quest.objectives {
                    let done = objective_met(&objective.kind, &self.player, &self.visited, &self.quests);
                    let mark = if done { "x" } else { " " };
                    lines.push((Severity::Info, format!("  [{mark}] {}", objective.description)));
                }
            }
        }
        if !self.quests.completed().is_empty() {
            lines.push((Severity::Highlight, "Completed Quests:".to_string()));
            for id in self.quests.completed() {
                let name = self
                    .world
                    .quest(id)
                    .map_or_else(|| id.to_string(), |q| q.name.clone());
                lines.push((Severity::Success, format!("  {name}")));
            }
        }
        for (severity, text) in lines {
            self.say(severity, text);
        }
    }
}
