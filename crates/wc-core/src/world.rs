use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::actor::DialogueOption;
use crate::effect::Effect;
use crate::error::{CoreError, CoreResult};
use crate::id::{LocationId, QuestId};
use crate::item::{Item, ItemKind};
use crate::location::Location;
use crate::quest::{ObjectiveKind, Quest};
use crate::requirement::Requirement;

/// Metadata about the world itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldMeta {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Where a new game begins.
    pub start: LocationId,
}

impl WorldMeta {
    pub fn new(name: impl Into<String>, start: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            start: LocationId::new(start),
        }
    }
}

/// On-disk shape of a content document.
#[derive(Deserialize)]
struct WorldDocument {
    meta: WorldMeta,
    #[serde(default)]
    locations: Vec<Location>,
    #[serde(default)]
    quests: Vec<Quest>,
}

/// A content problem found by [`World::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// An exit points at a location that is not defined.
    DanglingExit {
        from: LocationId,
        direction: String,
        to: LocationId,
    },
    /// A quest id is referenced but never defined.
    UnknownQuest { context: String, quest: QuestId },
    /// An objective names a location that is not defined.
    UnknownObjectiveLocation { quest: QuestId, location: LocationId },
    /// Two quests share an id.
    DuplicateQuest(QuestId),
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DanglingExit {
                from,
                direction,
                to,
            } => write!(f, "exit \"{direction}\" of \"{from}\" leads to undefined location \"{to}\""),
            Self::UnknownQuest { context, quest } => {
                write!(f, "{context} references undefined quest \"{quest}\"")
            }
            Self::UnknownObjectiveLocation { quest, location } => write!(
                f,
                "objective of quest \"{quest}\" names undefined location \"{location}\""
            ),
            Self::DuplicateQuest(id) => write!(f, "duplicate quest id \"{id}\""),
        }
    }
}

/// The world model. Owns every location (and through them every placed
/// item, NPC and enemy) plus the quest table.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub meta: WorldMeta,
    locations: Vec<Location>,
    quests: Vec<Quest>,

    // Index
    by_id: HashMap<LocationId, usize>,
}

impl World {
    /// Build a world, rejecting duplicate location ids and a missing start.
    pub fn new(meta: WorldMeta, locations: Vec<Location>, quests: Vec<Quest>) -> CoreResult<Self> {
        let mut by_id = HashMap::with_capacity(locations.len());
        for (idx, loc) in locations.iter().enumerate() {
            if by_id.insert(loc.id.clone(), idx).is_some() {
                return Err(CoreError::DuplicateLocation(loc.id.clone()));
            }
        }
        if !by_id.contains_key(&meta.start) {
            return Err(CoreError::UnknownStart(meta.start.clone()));
        }
        Ok(Self {
            meta,
            locations,
            quests,
            by_id,
        })
    }

    /// Parse a JSON content document.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let doc: WorldDocument = serde_json::from_str(json)?;
        Self::new(doc.meta, doc.locations, doc.quests)
    }

    /// The start location id.
    pub fn start(&self) -> &LocationId {
        &self.meta.start
    }

    /// Look up a location.
    pub fn location(&self, id: &LocationId) -> Option<&Location> {
        self.by_id.get(id).map(|&idx| &self.locations[idx])
    }

    /// Mutable location lookup.
    pub fn location_mut(&mut self, id: &LocationId) -> Option<&mut Location> {
        self.by_id.get(id).map(|&idx| &mut self.locations[idx])
    }

    /// Look up a location, failing if absent.
    pub fn get_location(&self, id: &LocationId) -> CoreResult<&Location> {
        self.location(id)
            .ok_or_else(|| CoreError::LocationNotFound(id.clone()))
    }

    /// Whether a location id is defined.
    pub fn contains_location(&self, id: &LocationId) -> bool {
        self.by_id.contains_key(id)
    }

    /// All locations in declaration order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    /// Look up a quest definition.
    pub fn quest(&self, id: &QuestId) -> Option<&Quest> {
        self.quests.iter().find(|q| &q.id == id)
    }

    /// All quest definitions.
    pub fn quests(&self) -> impl Iterator<Item = &Quest> {
        self.quests.iter()
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Check cross references. The engine tolerates every issue reported
    /// here; they are content bugs, surfaced to authors.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        let mut seen = HashSet::new();
        for quest in &self.quests {
            if !seen.insert(&quest.id) {
                issues.push(ValidationIssue::DuplicateQuest(quest.id.clone()));
            }
            for objective in &quest.objectives {
                match &objective.kind {
                    ObjectiveKind::VisitLocation { location } if !self.contains_location(location) => {
                        issues.push(ValidationIssue::UnknownObjectiveLocation {
                            quest: quest.id.clone(),
                            location: location.clone(),
                        });
                    }
                    ObjectiveKind::QuestCompleted { quest: other } => {
                        self.check_quest(&mut issues, format!("quest \"{}\"", quest.id), other);
                    }
                    _ => {}
                }
            }
        }

        for loc in &self.locations {
            for exit in &loc.exits {
                if !self.contains_location(&exit.destination) {
                    issues.push(ValidationIssue::DanglingExit {
                        from: loc.id.clone(),
                        direction: exit.direction.clone(),
                        to: exit.destination.clone(),
                    });
                }
                if let Some(Requirement::Quest { quest }) = &exit.requirement {
                    let context = format!("exit \"{}\" of \"{}\"", exit.direction, loc.id);
                    self.check_quest(&mut issues, context, quest);
                }
            }
            for item in &loc.items {
                self.check_item(&mut issues, item);
            }
            for enemy in &loc.enemies {
                for item in &enemy.loot {
                    self.check_item(&mut issues, item);
                }
            }
            for npc in &loc.npcs {
                if let Some(quest) = &npc.quest {
                    self.check_quest(&mut issues, format!("NPC \"{}\"", npc.name), quest);
                }
                let context = format!("dialogue of \"{}\"", npc.name);
                self.check_options(&mut issues, &context, &npc.options);
            }
        }

        issues
    }

    fn check_options(
        &self,
        issues: &mut Vec<ValidationIssue>,
        context: &str,
        options: &[DialogueOption],
    ) {
        for option in options {
            if let Some(effect) = &option.effect {
                self.check_effect(issues, context, effect);
            }
            self.check_options(issues, context, &option.follow_ups);
        }
    }

    fn check_item(&self, issues: &mut Vec<ValidationIssue>, item: &Item) {
        if let ItemKind::Consumable {
            effect: Some(effect),
        } = &item.kind
        {
            self.check_effect(issues, &format!("item \"{}\"", item.name), effect);
        }
    }

    fn check_effect(&self, issues: &mut Vec<ValidationIssue>, context: &str, effect: &Effect) {
        match effect {
            Effect::CompleteQuest { quest } | Effect::OfferQuest { quest } => {
                self.check_quest(issues, context.to_string(), quest);
            }
            Effect::GiveItem { item } => self.check_item(issues, item),
            _ => {}
        }
    }

    fn check_quest(&self, issues: &mut Vec<ValidationIssue>, context: String, quest: &QuestId) {
        if self.quest(quest).is_none() {
            issues.push(ValidationIssue::UnknownQuest {
                context,
                quest: quest.clone(),
            });
        }
    }
}
