//! Narration events and UI refresh signals emitted to the presentation layer.

use std::fmt;

/// How a narration line should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Plain text.
    Normal,
    /// Secondary information (exits, hints, stat lines).
    Info,
    /// Something went the player's way.
    Success,
    /// A rejected command or something hostile.
    Error,
    /// Headings and spoken lines.
    Highlight,
}

/// One line of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narration {
    /// The text to show.
    pub text: String,
    /// Presentation hint.
    pub severity: Severity,
}

impl Narration {
    /// Create a narration line.
    pub fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            text: text.into(),
            severity,
        }
    }
}

impl fmt::Display for Narration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A part of the display that changed during a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UiRefresh {
    /// HP, AP, radiation, level, experience or S.P.E.C.I.A.L.
    Vitals,
    /// Inventory entries, equipped slots, caps or weight.
    Inventory,
    /// Current location or its contents.
    Location,
    /// Active or completed quests.
    Quests,
}

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Accepting commands.
    #[default]
    Playing,
    /// The player died; only load, restart and quit are accepted.
    GameOver,
    /// The player quit. No further input is processed.
    Ended,
}

/// Everything one command produced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Outcome {
    /// Narration in emission order.
    pub narration: Vec<Narration>,
    /// Display areas to redraw, deduplicated.
    pub refresh: Vec<UiRefresh>,
    /// Session state after the command.
    pub state: SessionState,
}

impl Outcome {
    /// All narration joined with newlines.
    pub fn text(&self) -> String {
        self.narration
            .iter()
            .map(|n| n.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Whether any line contains `needle`.
    pub fn mentions(&self, needle: &str) -> bool {
        self.narration.iter().any(|n| n.text.contains(needle))
    }

    /// Whether any line was narrated at error severity.
    pub fn has_error(&self) -> bool {
        self.narration.iter().any(|n| n.severity == Severity::Error)
    }

    /// Whether nothing was narrated.
    pub fn is_silent(&self) -> bool {
        self.narration.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_helpers() {
        let outcome = Outcome {
            narration: vec![
                Narration::new("You take the Stimpak.", Severity::Success),
                Narration::new("Heavy.", Severity::Error),
            ],
            refresh: vec![UiRefresh::Inventory],
            state: SessionState::Playing,
        };
        assert_eq!(outcome.text(), "You take the Stimpak.\nHeavy.");
        assert!(outcome.mentions("Stimpak"));
        assert!(outcome.has_error());
        assert!(!outcome.is_silent());
        assert!(Outcome::default().is_silent());
    }
}
