//! Command parsing for player input.

/// A parsed player command.
///
/// Arguments are kept as typed; a missing argument is reported by the
/// handler, which knows the right prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Look around, toward an exit, or at something here.
    Look {
        /// Optional target.
        target: Option<String>,
    },
    /// Inspect an item's stats.
    Examine {
        /// The item name.
        target: Option<String>,
    },
    /// Move through an exit.
    Go {
        /// The direction.
        direction: Option<String>,
    },
    /// Take one item.
    Take {
        /// The item name.
        item: Option<String>,
    },
    /// Take everything here.
    TakeAll,
    /// Use, equip or consume an item.
    Use {
        /// The item name.
        item: Option<String>,
    },
    /// Start a conversation.
    Talk {
        /// The NPC name.
        npc: Option<String>,
    },
    /// Start or continue a fight.
    Attack {
        /// The enemy name; ignored once combat is running.
        target: Option<String>,
    },
    /// Run from combat.
    Flee,
    /// List inventory.
    Inventory,
    /// Show the character sheet.
    Stats,
    /// Show the quest journal.
    Quests,
    /// Show help.
    Help,
    /// Save the game.
    Save,
    /// Load the saved game.
    Load,
    /// Quit the game.
    Quit,
    /// Start over from the beginning.
    Restart,
    /// End the current conversation.
    EndConversation,
    /// Pick a numbered dialogue option (1-based).
    Choose(usize),
    /// Unrecognized verb.
    Unknown {
        /// The verb as typed.
        verb: String,
    },
}

/// Verb synonyms for command parsing.
const LOOK_VERBS: &[&str] = &["look", "l"];
const EXAMINE_VERBS: &[&str] = &["examine", "ex", "inspect"];
const GO_VERBS: &[&str] = &["go", "move", "walk"];
const TAKE_VERBS: &[&str] = &["take", "get", "pick"];
const USE_VERBS: &[&str] = &["use"];
const TALK_VERBS: &[&str] = &["talk", "speak"];
const ATTACK_VERBS: &[&str] = &["attack", "fight"];
const FLEE_VERBS: &[&str] = &["flee", "run"];
const INVENTORY_VERBS: &[&str] = &["inventory", "inv", "i"];
const STATS_VERBS: &[&str] = &["stats", "character"];
const QUEST_VERBS: &[&str] = &["quests", "journal"];
const HELP_VERBS: &[&str] = &["help", "h"];
const SAVE_VERBS: &[&str] = &["save"];
const LOAD_VERBS: &[&str] = &["load"];
const QUIT_VERBS: &[&str] = &["quit", "exit"];
const RESTART_VERBS: &[&str] = &["restart"];
const END_VERBS: &[&str] = &["bye", "goodbye", "end"];

/// Every verb group, used for suggestions.
pub(crate) const VERB_TABLE: &[&[&str]] = &[
    LOOK_VERBS,
    EXAMINE_VERBS,
    GO_VERBS,
    TAKE_VERBS,
    USE_VERBS,
    TALK_VERBS,
    ATTACK_VERBS,
    FLEE_VERBS,
    INVENTORY_VERBS,
    STATS_VERBS,
    QUEST_VERBS,
    HELP_VERBS,
    SAVE_VERBS,
    LOAD_VERBS,
    QUIT_VERBS,
    RESTART_VERBS,
    END_VERBS,
];

/// Parse a player input line. Returns `None` for blank input.
pub fn parse_command(input: &str) -> Option<Command> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let words: Vec<&str> = input.split_whitespace().collect();
    let verb = words[0].to_lowercase();
    let rest = words.get(1..).unwrap_or(&[]);

    // Bare number selects a dialogue option
    if words.len() == 1 {
        if let Ok(n) = verb.parse::<usize>() {
            return Some(Command::Choose(n));
        }
    }

    let verb = verb.as_str();
    let command = if LOOK_VERBS.contains(&verb) {
        Command::Look {
            target: argument(rest, &["at"]),
        }
    } else if EXAMINE_VERBS.contains(&verb) {
        Command::Examine {
            target: argument(rest, &[]),
        }
    } else if GO_VERBS.contains(&verb) {
        Command::Go {
            direction: argument(rest, &["to"]),
        }
    } else if TAKE_VERBS.contains(&verb) {
        parse_take(rest)
    } else if USE_VERBS.contains(&verb) {
        Command::Use {
            item: argument(rest, &[]),
        }
    } else if TALK_VERBS.contains(&verb) {
        Command::Talk {
            npc: argument(rest, &["to", "with"]),
        }
    } else if ATTACK_VERBS.contains(&verb) {
        Command::Attack {
            target: argument(rest, &[]),
        }
    } else if FLEE_VERBS.contains(&verb) {
        Command::Flee
    } else if INVENTORY_VERBS.contains(&verb) {
        Command::Inventory
    } else if STATS_VERBS.contains(&verb) {
        Command::Stats
    } else if QUEST_VERBS.contains(&verb) {
        Command::Quests
    } else if HELP_VERBS.contains(&verb) {
        Command::Help
    } else if SAVE_VERBS.contains(&verb) {
        Command::Save
    } else if LOAD_VERBS.contains(&verb) {
        Command::Load
    } else if QUIT_VERBS.contains(&verb) {
        Command::Quit
    } else if RESTART_VERBS.contains(&verb) {
        Command::Restart
    } else if END_VERBS.contains(&verb) {
        Command::EndConversation
    } else {
        Command::Unknown {
            verb: words[0].to_string(),
        }
    };
    Some(command)
}

fn parse_take(rest: &[&str]) -> Command {
    // "pick up" reads the same as "take"
    match argument(rest, &["up"]) {
        Some(item) if item.eq_ignore_ascii_case("all") => Command::TakeAll,
        item => Command::Take { item },
    }
}

/// Join the remaining words, skipping one leading filler word.
fn argument(rest: &[&str], fillers: &[&str]) -> Option<String> {
    let words = match rest.first() {
        Some(first) if fillers.iter().any(|f| first.eq_ignore_ascii_case(f)) => &rest[1..],
        _ => rest,
    };
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}
