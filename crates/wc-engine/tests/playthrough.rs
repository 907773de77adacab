//! End-to-end play through the bundled Capital Wasteland content.

use wc_core::content::capital_wasteland;
use wc_core::{LocationId, QuestId};
use wc_engine::{EngineConfig, GameSession, MemoryStore, Outcome, SessionState};

fn session() -> GameSession {
    let world = capital_wasteland().expect("bundled world loads");
    GameSession::new(world, EngineConfig::default().with_seed(42), MemoryStore::new())
}

fn fight(session: &mut GameSession, enemy: &str) -> Outcome {
    let mut outcome = session.process(&format!("attack {enemy}"));
    for _ in 0..20 {
        if !session.in_combat() {
            break;
        }
        outcome = session.process("attack");
    }
    assert!(!session.in_combat(), "fight with {enemy} did not end");
    outcome
}

#[test]
fn opening_scene() {
    let mut session = session();
    let outcome = session.start();
    assert!(outcome.mentions("Welcome to the Capital Wasteland, Vault Dweller!"));
    assert!(outcome.mentions("Vault 101"));
    assert!(outcome.mentions("Exits: north, south"));
}

#[test]
fn first_steps_and_survival_guide() {
    let mut session = session();
    session.start();
    let first = QuestId::new("firstSteps");
    let survival = QuestId::new("wastelandSurvival");

    // Amata hands out the first quest and a stimpak
    let outcome = session.process("talk amata");
    assert!(outcome.mentions("New quest: First Steps"));
    assert!(session.process("2").mentions("You receive Stimpak."));
    session.process("bye");

    let outcome = session.process("take all");
    assert!(outcome.mentions("You take: Vault 101 Jumpsuit, Stimpak"));
    assert_eq!(session.player().inventory.find("stimpak").unwrap().count, 2);
    assert!(session.process("use jumpsuit").mentions("You equip Vault 101 Jumpsuit."));

    session.process("go south");
    session.process("take bat");
    session.process("use bat");
    assert_eq!(session.player().weapon_damage(), 8);

    for dir in ["north", "north", "north"] {
        session.process(&format!("go {dir}"));
    }
    assert_eq!(session.location_id().as_str(), "wasteland");
    session.process("take cap");
    assert_eq!(session.player().caps, 1);

    let outcome = fight(&mut session, "radroach");
    assert!(outcome.mentions("You defeated Radroach!"));
    assert_eq!(session.player().encounters, 1);

    session.process("go north");
    session.process("talk lucas");
    let outcome = session.process("1");
    assert!(outcome.mentions("Quest completed: First Steps"));
    assert!(session.quests().is_completed(&first));
    assert_eq!(session.player().caps, 101);
    assert_eq!(session.player().experience, 60);

    session.process("talk moira");
    assert!(session.process("1").mentions("New quest: Wasteland Survival Guide"));
    session.process("bye");
    assert!(session.process("save").mentions("Game saved successfully!"));

    let journal = session.process("quests");
    assert!(journal.mentions("[x] Survive a fight with a wasteland creature"));
    assert!(journal.mentions("[ ] Explore a pre-war basement"));
    assert!(journal.mentions("[x] Set out on your first steps"));

    // The basement needs a light
    session.process("go south");
    session.process("go west");
    assert!(session.process("go down").has_error());
    session.process("take flashlight");
    session.process("go down");
    assert_eq!(session.location_id().as_str(), "basement");
    session.process("go up");
    session.process("go east");
    session.process("go north");

    session.process("talk moira");
    session.process("1");
    let outcome = session.process("1");
    assert!(outcome.mentions("Quest completed: Wasteland Survival Guide"));
    assert!(outcome.mentions("Level up! You are now level 2!"));
    assert_eq!(session.player().level, 2);
    assert_eq!(session.player().caps, 251);
    assert!(session.quests().active().is_empty());

    // Loading rewinds to the save in Megaton
    let outcome = session.process("load");
    assert!(outcome.mentions("Game loaded successfully!"));
    assert_eq!(session.player().level, 1);
    assert_eq!(session.player().caps, 101);
    assert!(session.quests().is_active(&survival));
    assert!(!session.visited().contains(&LocationId::new("basement")));
    assert_eq!(session.location_id().as_str(), "megaton");
}

#[test]
fn armed_raider_fight_stays_in_bounds() {
    let mut session = session();
    for input in ["go north", "go north", "go east"] {
        session.process(input);
    }
    assert_eq!(session.location_id().as_str(), "raidercamp");
    session.process("take pistol");
    session.process("use pistol");

    let outcome = fight(&mut session, "raider");
    assert!(outcome.mentions("You defeated Raider!"));
    // Two pistol shots at most, so one retaliation of 8..=10 at most
    assert!(session.player().hp >= 80);
    assert_eq!(session.state(), SessionState::Playing);
}

#[test]
fn quit_ends_session() {
    let mut session = session();
    let outcome = session.process("quit");
    assert!(outcome.mentions("Thanks for playing Fallout: Wasteland Chronicles!"));
    assert_eq!(outcome.state, SessionState::Ended);
    assert!(session.process("help").is_silent());
}
