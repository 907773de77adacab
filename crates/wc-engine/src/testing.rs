//! Shared fixtures for unit tests.

use wc_core::{
    DialogueOption, Effect, Enemy, Exit, Item, ItemKind, Location, LocationId, Npc, Objective, ObjectiveKind,
    Quest, QuestId, Requirement, SpecialStat, World, WorldMeta,
};

use crate::config::EngineConfig;
use crate::narration::Outcome;
use crate::save::MemoryStore;
use crate::session::GameSession;

/// A small world: a cellar with a bit of everything, a yard with a brute
/// that cannot be beaten, and two gated rooms.
pub(crate) fn test_world() -> World {
    let stimpak = Item::new(
        "Stimpak",
        ItemKind::Consumable {
            effect: Some(Effect::Heal { value: 25 }),
        },
        0.5,
    );
    let knife = Item::new("Rusty Knife", ItemKind::Weapon { damage: 7 }, 2.0)
        .with_description("More rust than blade.");

    let cellar = Location::new("cellar", "Cellar", "A damp cellar under a ruined house.", "A dark cellar.")
        .with_exit(Exit::new("up", "yard"))
        .with_exit(
            Exit::new("down", "vault")
                .with_requirement(Requirement::Item {
                    item: "Lamp".to_string(),
                })
                .with_blocked_message("It's too dark to go down there without a light."),
        )
        .with_item(stimpak)
        .with_item(Item::bottle_cap())
        .with_item(knife)
        .with_item(Item::new("Anvil", ItemKind::Tool, 200.0))
        .with_item(Item::new("Empty Can", ItemKind::Consumable { effect: None }, 0.5))
        .with_item(Item::new("Lamp", ItemKind::Tool, 1.0))
        .with_npc(
            Npc::new("Old Sam", "Watch yourself down here.")
                .with_description("A wiry old scavenger.")
                .with_option(
                    DialogueOption::new("Any work for me?", "Find me something useful in the yard.")
                        .with_effect(Effect::OfferQuest {
                            quest: QuestId::new("scavenger"),
                        })
                        .with_follow_up(
                            DialogueOption::new("I'm done.", "Good work. Here's your cut.")
                                .with_effect(Effect::CompleteQuest {
                                    quest: QuestId::new("scavenger"),
                                }),
                        ),
                )
                .with_option(
                    DialogueOption::new("Spare some caps?", "Here, take a few.")
                        .with_effect(Effect::GiveCaps { amount: 5 }),
                ),
        )
        .with_enemy(
            Enemy::new("Rat", 15, 3, 10)
                .with_description("A rat the size of a dog.")
                .with_loot(Item::new("Rat Tail", ItemKind::Tool, 0.1)),
        );

    let yard = Location::new("yard", "Yard", "Weeds push through cracked paving.", "An overgrown yard.")
        .with_exit(Exit::new("down", "cellar"))
        .with_exit(Exit::new("gate", "road").with_requirement(Requirement::Special {
            stat: SpecialStat::Strength,
            value: 8,
        }))
        .with_npc(Npc::new("Guard", "Move along.").with_quest(QuestId::new("scavenger")))
        .with_enemy(Enemy::new("Brute", 500, 40, 1000));

    let vault = Location::new("vault", "Vault", "Rows of empty lockers.", "A sealed vault.")
        .with_exit(Exit::new("up", "cellar"));
    let road = Location::new("road", "Road", "A cracked highway.", "A long road.")
        .with_exit(Exit::new("gate", "yard"));

    let scavenger = Quest::new("scavenger", "Scavenger")
        .with_description("Find something useful for Old Sam.")
        .with_objective(Objective::new(
            "Start in the cellar",
            ObjectiveKind::VisitLocation {
                location: LocationId::new("cellar"),
            },
        ))
        .with_objective(Objective::new(
            "Reach the yard",
            ObjectiveKind::VisitLocation {
                location: LocationId::new("yard"),
            },
        ))
        .with_reward(40, 25);

    let mut meta = WorldMeta::new("Test Cellar", "cellar");
    meta.description = "A cellar, a yard and little else.".to_string();
    match World::new(meta, vec![cellar, yard, vault, road], vec![scavenger]) {
        Ok(world) => world,
        Err(err) => panic!("test world is invalid: {err}"),
    }
}

/// A seeded session over [`test_world`] with in-memory saves.
pub(crate) fn new_session() -> GameSession {
    GameSession::new(
        test_world(),
        EngineConfig::default().with_seed(7),
        MemoryStore::new(),
    )
}

/// Process one line and return what it produced.
pub(crate) fn run(session: &mut GameSession, input: &str) -> Outcome {
    session.process(input)
}
