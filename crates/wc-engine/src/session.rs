//! Game session: the context object every command handler runs against.

use std::collections::BTreeSet;
use std::mem;

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};
use wc_core::{Location, LocationId, World};

use crate::clock::GameClock;
use crate::combat::Encounter;
use crate::config::EngineConfig;
use crate::dialogue::Conversation;
use crate::error::{EngineError, EngineResult, SaveError};
use crate::narration::{Narration, Outcome, SessionState, Severity, UiRefresh};
use crate::parser::{Command, parse_command, suggest_verb};
use crate::player::Player;
use crate::quests::QuestLog;
use crate::save::{SaveGame, SaveStore};

/// One continuous game between start and quit.
///
/// Owns the world, the player and every sub-state machine. Commands are
/// processed one at a time to completion; a rejected command leaves the
/// state exactly as it was.
pub struct GameSession {
    /// Copy of the world as loaded, for restarts.
    pristine: World,
    pub(crate) world: World,
    pub(crate) player: Player,
    pub(crate) location: LocationId,
    pub(crate) visited: BTreeSet<LocationId>,
    pub(crate) quests: QuestLog,
    pub(crate) combat: Option<Encounter>,
    pub(crate) dialogue: Option<Conversation>,
    pub(crate) clock: GameClock,
    pub(crate) state: SessionState,
    pub(crate) rng: StdRng,
    config: EngineConfig,
    store: Box<dyn SaveStore + Send>,

    // Output buffer, drained after each command
    output: Vec<Narration>,
    refresh: BTreeSet<UiRefresh>,
}

impl GameSession {
    /// Create a session at the world's start location.
    pub fn new(world: World, config: EngineConfig, store: impl SaveStore + Send + 'static) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let start = world.start().clone();
        Self {
            pristine: world.clone(),
            world,
            player: Player::new(config.player_name.clone()),
            visited: BTreeSet::from([start.clone()]),
            location: start,
            quests: QuestLog::new(),
            combat: None,
            dialogue: None,
            clock: GameClock::default(),
            state: SessionState::Playing,
            rng,
            config,
            store: Box::new(store),
            output: Vec::new(),
            refresh: BTreeSet::new(),
        }
    }

    /// Narrate the opening and the first location.
    pub fn start(&mut self) -> Outcome {
        self.introduce();
        self.drain()
    }

    /// Process one line of player input.
    ///
    /// Combat takes every command while it runs; an open conversation gets
    /// first look at the input; everything else goes to the exploration
    /// handlers. Blank input produces no narration.
    pub fn process(&mut self, input: &str) -> Outcome {
        if self.state == SessionState::Ended {
            return self.drain();
        }
        let Some(command) = parse_command(input) else {
            return self.drain();
        };
        debug!(?command, "processing command");

        let result = if self.state == SessionState::GameOver {
            self.dispatch_game_over(command)
        } else if self.combat.is_some() {
            self.dispatch_combat(command)
        } else if self.dialogue.is_some() {
            self.dispatch_dialogue(command)
        } else {
            self.dispatch(command)
        };

        if let Err(err) = result {
            debug!(error = %err, "command rejected");
            self.say(Severity::Error, err.to_string());
        }
        self.drain()
    }

    /// Advance the play clock by one second. Gameplay state is untouched.
    pub fn tick(&mut self) {
        if self.state == SessionState::Playing {
            self.clock.advance();
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The player's current location id.
    pub fn location_id(&self) -> &LocationId {
        &self.location
    }

    /// Every location the player has entered.
    pub fn visited(&self) -> &BTreeSet<LocationId> {
        &self.visited
    }

    pub fn quests(&self) -> &QuestLog {
        &self.quests
    }

    pub fn clock(&self) -> GameClock {
        self.clock
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Whether a fight is running.
    pub fn in_combat(&self) -> bool {
        self.combat.is_some()
    }

    /// Whether a conversation is open.
    pub fn in_dialogue(&self) -> bool {
        self.dialogue.is_some()
    }

    /// The exploration verb table.
    pub(crate) fn dispatch(&mut self, command: Command) -> EngineResult<()> {
        match command {
            Command::Look { target } => self.look(target.as_deref()),
            Command::Examine { target } => self.examine(target.as_deref()),
            Command::Go { direction } => self.go(direction.as_deref()),
            Command::Take { item } => self.take(item.as_deref()),
            Command::TakeAll => self.take_all(),
            Command::Use { item } => self.use_item(item.as_deref()),
            Command::Talk { npc } => self.talk(npc.as_deref()),
            Command::Attack { target } => self.start_combat(target.as_deref()),
            Command::Flee => Err(EngineError::NotInCombat),
            Command::Inventory => {
                self.show_inventory();
                Ok(())
            }
            Command::Stats => {
                self.show_stats();
                Ok(())
            }
            Command::Quests => {
                self.show_quests();
                Ok(())
            }
            Command::Help => {
                self.show_help();
                Ok(())
            }
            Command::Save => self.save(),
            Command::Load => self.load(),
            Command::Quit => {
                self.quit();
                Ok(())
            }
            Command::Restart => {
                self.restart();
                Ok(())
            }
            Command::EndConversation => Err(EngineError::NotInConversation),
            Command::Choose(n) => Err(EngineError::UnknownCommand {
                verb: n.to_string(),
                suggestion: None,
            }),
            Command::Unknown { verb } => Err(EngineError::UnknownCommand {
                suggestion: suggest_verb(&verb).map(str::to_string),
                verb,
            }),
        }
    }

    fn dispatch_game_over(&mut self, command: Command) -> EngineResult<()> {
        match command {
            Command::Load => self.load(),
            Command::Restart => {
                self.restart();
                Ok(())
            }
            Command::Quit => {
                self.quit();
                Ok(())
            }
            _ => Err(EngineError::GameOver),
        }
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    fn introduce(&mut self) {
        self.say(
            Severity::Highlight,
            format!(
                "Welcome to the {}, {}!",
                self.world.meta.name, self.player.name
            ),
        );
        if !self.world.meta.description.is_empty() {
            self.say(Severity::Info, self.world.meta.description.clone());
        }
        self.say(
            Severity::Info,
            "Use your wits, skills, and whatever you can find to survive.",
        );
        self.say(Severity::Info, "Type \"help\" for available commands.");
        self.refresh_all();
        if let Err(err) = self.describe_location() {
            self.say(Severity::Error, err.to_string());
        }
    }

    /// Throw everything away and begin again from the pristine world.
    pub(crate) fn restart(&mut self) {
        info!("restarting session");
        let start = self.pristine.start().clone();
        self.world = self.pristine.clone();
        self.player = Player::new(self.config.player_name.clone());
        self.visited = BTreeSet::from([start.clone()]);
        self.location = start;
        self.quests = QuestLog::new();
        self.combat = None;
        self.dialogue = None;
        self.clock = GameClock::default();
        self.state = SessionState::Playing;
        self.introduce();
    }

    pub(crate) fn quit(&mut self) {
        self.say(
            Severity::Highlight,
            "Thanks for playing Fallout: Wasteland Chronicles!",
        );
        if self.config.autosave_on_quit && self.state == SessionState::Playing {
            match self.write_save() {
                Ok(()) => self.say(Severity::Info, "Your progress has been saved automatically."),
                Err(err) => self.say(Severity::Error, err.to_string()),
            }
        }
        self.combat = None;
        self.dialogue = None;
        self.state = SessionState::Ended;
        info!("session ended");
    }

    /// Terminal transition on player death.
    pub(crate) fn game_over(&mut self) {
        info!(level = self.player.level, "player died");
        self.state = SessionState::GameOver;
        self.combat = None;
        self.dialogue = None;
        self.say(Severity::Error, "You have died in the wasteland...");
        self.say(
            Severity::Info,
            format!(
                "Level: {} | Caps: {} | Quests completed: {} | Time: {}",
                self.player.level,
                self.player.caps,
                self.quests.completed().len(),
                self.clock
            ),
        );
        self.say(
            Severity::Info,
            "Type \"load\" to restore your last save, \"restart\" to begin again, or \"quit\" to leave.",
        );
        self.touch(UiRefresh::Vitals);
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    /// Capture the persisted part of the session.
    pub fn snapshot(&self) -> SaveGame {
        SaveGame {
            player: self.player.clone(),
            current_location: self.location.clone(),
            visited_locations: self.visited.iter().cloned().collect(),
            active_quests: self.quests.active().to_vec(),
            completed_quests: self.quests.completed().to_vec(),
            game_time: self.clock.seconds(),
            saved_at: Some(Utc::now()),
        }
    }

    fn write_save(&mut self) -> Result<(), SaveError> {
        let blob = self.snapshot().to_json()?;
        self.store.write(&self.config.save_key, &blob)?;
        info!(key = %self.config.save_key, "game saved");
        Ok(())
    }

    pub(crate) fn save(&mut self) -> EngineResult<()> {
        self.write_save()?;
        self.say(Severity::Success, "Game saved successfully!");
        Ok(())
    }

    /// Replace session state with the stored save. Any failure leaves the
    /// session untouched.
    pub(crate) fn load(&mut self) -> EngineResult<()> {
        let blob = self
            .store
            .read(&self.config.save_key)?
            .ok_or(SaveError::NotFound)?;
        let save = SaveGame::from_json(&blob)?;
        if !self.world.contains_location(&save.current_location) {
            return Err(SaveError::UnknownLocation(save.current_location).into());
        }
        self.restore(save);
        info!(key = %self.config.save_key, "game loaded");
        self.say(Severity::Success, "Game loaded successfully!");
        self.refresh_all();
        self.describe_location()
    }

    fn restore(&mut self, save: SaveGame) {
        self.player = save.player;
        let report = self.player.consolidate();
        if report.caps > 0 || report.merged > 0 {
            debug!(caps = report.caps, merged = report.merged, "inventory consolidated");
        }
        self.visited = save.visited_locations.into_iter().collect();
        self.visited.insert(save.current_location.clone());
        self.location = save.current_location;
        self.quests = QuestLog::from_parts(save.active_quests, save.completed_quests);
        self.clock = GameClock::starting_at(save.game_time);
        self.combat = None;
        self.dialogue = None;
        self.state = SessionState::Playing;
    }

    // -----------------------------------------------------------------------
    // Output and lookup helpers
    // -----------------------------------------------------------------------

    pub(crate) fn say(&mut self, severity: Severity, text: impl Into<String>) {
        self.output.push(Narration::new(text, severity));
    }

    pub(crate) fn touch(&mut self, area: UiRefresh) {
        self.refresh.insert(area);
    }

    fn refresh_all(&mut self) {
        self.refresh.extend([
            UiRefresh::Vitals,
            UiRefresh::Inventory,
            UiRefresh::Location,
            UiRefresh::Quests,
        ]);
    }

    /// Take everything narrated since the last drain.
    pub(crate) fn drain(&mut self) -> Outcome {
        Outcome {
            narration: mem::take(&mut self.output),
            refresh: mem::take(&mut self.refresh).into_iter().collect(),
            state: self.state,
        }
    }

    pub(crate) fn current(&self) -> EngineResult<&Location> {
        self.world
            .location(&self.location)
            .ok_or_else(|| EngineError::LocationNotFound(self.location.clone()))
    }

    pub(crate) fn current_mut(&mut self) -> EngineResult<&mut Location> {
        let id = &self.location;
        self.world
            .location_mut(id)
            .ok_or_else(|| EngineError::LocationNotFound(id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::save::MemoryStore;
    use crate::testing::{new_session, run, test_world};

    #[test]
    fn start_narrates_location() {
        let mut session = new_session();
        let outcome = session.start();
        assert!(outcome.mentions("Welcome to the Test Cellar, Vault Dweller!"));
        assert!(outcome.mentions("A damp cellar"));
        assert!(outcome.refresh.contains(&UiRefresh::Location));
        assert_eq!(outcome.state, SessionState::Playing);
    }

    #[test]
    fn empty_input_is_silent() {
        let mut session = new_session();
        assert!(run(&mut session, "").is_silent());
        assert!(run(&mut session, "    ").is_silent());
    }

    #[test]
    fn unknown_command_changes_nothing() {
        let mut session = new_session();
        let before = session.snapshot();
        let outcome = run(&mut session, "dance");
        assert_eq!(
            outcome.text(),
            "Unknown command: dance. Type 'help' for available commands."
        );
        assert!(outcome.has_error());
        let after = session.snapshot();
        assert_eq!(before.player, after.player);
        assert_eq!(before.current_location, after.current_location);
    }

    #[test]
    fn unknown_command_suggests_verb() {
        let mut session = new_session();
        let outcome = run(&mut session, "inventroy");
        assert!(outcome.mentions("Did you mean \"inventory\"?"));
    }

    #[test]
    fn flee_outside_combat() {
        let mut session = new_session();
        assert_eq!(run(&mut session, "flee").text(), "You are not in combat.");
    }

    #[test]
    fn number_outside_dialogue_is_unknown() {
        let mut session = new_session();
        assert!(run(&mut session, "2").mentions("Unknown command: 2."));
    }

    #[test]
    fn save_then_load_round_trip() {
        let mut session = new_session();
        run(&mut session, "take stimpak");
        run(&mut session, "take knife");
        run(&mut session, "use knife");
        run(&mut session, "take cap");
        run(&mut session, "go up");
        assert!(run(&mut session, "save").mentions("Game saved successfully!"));
        let saved = session.snapshot();

        run(&mut session, "go down");
        run(&mut session, "use stimpak");
        let outcome = run(&mut session, "load");
        assert!(outcome.mentions("Game loaded successfully!"));

        assert_eq!(session.location_id().as_str(), "yard");
        assert_eq!(session.player().level, saved.player.level);
        assert_eq!(session.player().caps, 1);
        assert_eq!(session.player().inventory, saved.player.inventory);
        let weapon = session.player().weapon().unwrap();
        assert_eq!(weapon.item.name, "Rusty Knife");
        assert!(session.visited().contains(&LocationId::new("yard")));
    }

    #[test]
    fn load_without_save() {
        let mut session = new_session();
        assert_eq!(run(&mut session, "load").text(), "No save file found.");
    }

    #[test]
    fn malformed_save_leaves_state() {
        let store = MemoryStore::with_blob("wasteland-save", "{ not json");
        let mut session = GameSession::new(test_world(), EngineConfig::default().with_seed(1), store);
        run(&mut session, "take stimpak");
        let before = session.player().clone();
        let outcome = run(&mut session, "load");
        assert_eq!(outcome.text(), "Error loading save file.");
        assert_eq!(session.player(), &before);
    }

    #[test]
    fn load_consolidates_inventory() {
        let mut session = new_session();
        let mut save = session.snapshot();
        let cap = wc_core::Item::bottle_cap();
        save.player.inventory.add(cap.clone());
        save.player.inventory.add(cap.instantiate());
        save.current_location = LocationId::new("yard");
        save.active_quests.clear();
        let blob = save.to_json().unwrap();

        let store = MemoryStore::with_blob("wasteland-save", blob);
        let mut session = GameSession::new(test_world(), EngineConfig::default(), store);
        run(&mut session, "load");
        assert_eq!(session.player().caps, 2);
        assert!(session.player().inventory.is_empty());
        assert_eq!(session.location_id().as_str(), "yard");
    }

    #[test]
    fn load_rejects_unknown_location() {
        let mut session = new_session();
        let mut save = session.snapshot();
        save.current_location = LocationId::new("atlantis");
        let store = MemoryStore::with_blob("wasteland-save", save.to_json().unwrap());
        session = GameSession::new(test_world(), EngineConfig::default(), store);
        let outcome = run(&mut session, "load");
        assert!(outcome.mentions("unknown location \"atlantis\""));
        assert_eq!(session.location_id().as_str(), "cellar");
    }

    #[test]
    fn quit_autosaves_and_ends() {
        let mut session = new_session();
        let outcome = run(&mut session, "quit");
        assert!(outcome.mentions("Your progress has been saved automatically."));
        assert_eq!(outcome.state, SessionState::Ended);
        assert!(run(&mut session, "look").is_silent());
    }

    #[test]
    fn quit_without_autosave() {
        let mut session = GameSession::new(
            test_world(),
            EngineConfig::default().with_autosave_on_quit(false),
            MemoryStore::new(),
        );
        let outcome = run(&mut session, "exit");
        assert!(!outcome.mentions("saved"));
        assert_eq!(session.state(), SessionState::Ended);
    }

    #[test]
    fn tick_advances_clock_only() {
        let mut session = new_session();
        let before = session.player().clone();
        session.tick();
        session.tick();
        assert_eq!(session.clock().seconds(), 2);
        assert_eq!(session.player(), &before);
    }

    #[test]
    fn restart_rebuilds_world() {
        let mut session = new_session();
        run(&mut session, "take stimpak");
        run(&mut session, "go up");
        let outcome = run(&mut session, "restart");
        assert!(outcome.mentions("Welcome to the Test Cellar"));
        assert_eq!(session.location_id().as_str(), "cellar");
        assert!(session.player().inventory.is_empty());
        assert!(session.current().unwrap().find_item("stimpak").is_some());
    }
}
