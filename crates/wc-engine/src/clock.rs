use std::fmt;

/// Elapsed play time in whole seconds.
///
/// Advanced by the host's background tick; it never influences gameplay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameClock {
    seconds: u64,
}

impl GameClock {
    /// A clock resumed at the given number of seconds.
    pub fn starting_at(seconds: u64) -> Self {
        Self { seconds }
    }

    /// Advance by one second. Returns the new total.
    pub fn advance(&mut self) -> u64 {
        self.seconds = self.seconds.saturating_add(1);
        self.seconds
    }

    /// Total elapsed seconds.
    pub fn seconds(&self) -> u64 {
        self.seconds
    }
}

impl fmt::Display for GameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_time(self.seconds))
    }
}

/// Format seconds as `m:ss`.
pub fn format_time(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
