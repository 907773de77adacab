//! Inventory listing, the character sheet and help.

use wc_core::SpecialStat;

use crate::inventory::Stack;
use crate::narration::Severity;
use crate::session::GameSession;

/// Verb reference shown by `help`.
const HELP: &[(&str, &str)] = &[
    ("look / l [target]", "Look around, toward an exit, or at something"),
    ("examine / ex / inspect <item>", "Inspect an item"),
    ("go / move / walk <direction>", "Move in a direction"),
    ("take / get / pick up <item|all>", "Pick up an item, or everything here"),
    ("use <item>", "Use, equip or consume an item"),
    ("talk / speak <npc>", "Talk to someone"),
    ("bye / goodbye / end", "End a conversation"),
    ("attack / fight <enemy>", "Start or continue a fight"),
    ("flee / run", "Run from combat"),
    ("inventory / inv / i", "List what you carry"),
    ("stats / character", "Show your character"),
    ("quests / journal", "Show your quests"),
    ("save", "Save the game"),
    ("load", "Load the saved game"),
    ("restart", "Start over"),
    ("quit / exit", "Quit the game"),
    ("help / h", "Show this help"),
];

/// Format a weight in pounds, dropping a trailing `.0`.
pub fn fmt_weight(pounds: f64) -> String {
    let text = format!("{pounds:.1}");
    match text.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => text,
    }
}

impl GameSession {
    pub(crate) fn show_inventory(&mut self) {
        if self.player.inventory.is_empty() {
            self.say(Severity::Info, "Your inventory is empty.");
        } else {
            let lines: Vec<String> = self
                .player
                .inventory
                .iter()
                .enumerate()
                .map(|(i, stack)| {
                    let count = if stack.count > 1 {
                        format!(" (x{})", stack.count)
                    } else {
                        String::new()
                    };
                    let marker = if self.player.is_equipped(stack.id()) {
                        " [equipped]"
                    } else {
                        ""
                    };
                    format!(
                        "{}. {}{count} ({} lbs){marker}",
                        i + 1,
                        stack.item.name,
                        fmt_weight(stack.weight())
                    )
                })
                .collect();
            self.say(Severity::Highlight, "Inventory:");
            for line in lines {
                self.say(Severity::Normal, line);
            }
        }
        let summary = format!(
            "Caps: {} | Weight: {}/{} lbs",
            self.player.caps,
            fmt_weight(self.player.weight()),
            fmt_weight(self.player.max_weight)
        );
        self.say(Severity::Info, summary);
    }

    pub(crate) fn show_stats(&mut self) {
        let p = &self.player;
        let slot = |stack: Option<&Stack>| {
            stack.map_or_else(|| "None".to_string(), |s| s.item.name.clone())
        };
        let mut lines = vec![
            (Severity::Highlight, "Character Stats:".to_string()),
            (Severity::Normal, format!("Name: {}", p.name)),
            (
                Severity::Normal,
                format!("Level: {} (XP: {}/{})", p.level, p.experience, p.experience_to_level()),
            ),
            (Severity::Normal, format!("HP: {}/{}", p.hp, p.max_hp)),
            (Severity::Normal, format!("AP: {}/{}", p.ap, p.max_ap)),
            (Severity::Normal, format!("Radiation: {}/{}", p.rads, p.max_rads)),
            (Severity::Normal, format!("Caps: {}", p.caps)),
            (
                Severity::Normal,
                format!(
                    "Weight: {}/{} lbs",
                    fmt_weight(p.weight()),
                    fmt_weight(p.max_weight)
                ),
            ),
            (Severity::Normal, format!("Weapon: {}", slot(p.weapon()))),
            (Severity::Normal, format!("Armor: {}", slot(p.armor()))),
            (Severity::Info, format!("Time played: {}", self.clock)),
            (Severity::Highlight, "S.P.E.C.I.A.L.:".to_string()),
        ];
        for stat in SpecialStat::ALL {
            lines.push((
                Severity::Normal,
                format!("{}: {}", stat.name().to_uppercase(), p.special.get(stat)),
            ));
        }
        for (severity, text) in lines {
            self.say(severity, text);
        }
    }

    pub(crate) fn show_help(&mut self) {
        self.say(Severity::Highlight, "Available Commands:");
        for (usage, what) in HELP {
            self.say(Severity::Info, format!("  {usage:<34} {what}"));
        }
    }
}
