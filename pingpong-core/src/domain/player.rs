use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Points on a player's counter
pub type Score = u32;

/// Which side of the table a player occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    pub fn index(self) -> usize {
        match self {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
        }
    }

    /// 1-based number shown to users
    pub fn number(self) -> u8 {
        match self {
            PlayerSlot::One => 1,
            PlayerSlot::Two => 2,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            PlayerSlot::One => PlayerSlot::Two,
            PlayerSlot::Two => PlayerSlot::One,
        }
    }

    /// Name a player starts with before anyone edits it
    pub fn default_name(self) -> String {
        format!("Player {}", self.number())
    }
}

impl fmt::Display for PlayerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("Unknown player '{0}', expected 1 or 2")]
pub struct ParsePlayerSlotError(pub String);

impl FromStr for PlayerSlot {
    type Err = ParsePlayerSlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(PlayerSlot::One),
            "2" => Ok(PlayerSlot::Two),
            other => Err(ParsePlayerSlotError(other.to_string())),
        }
    }
}

/// A player at the table: display name and current score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Free text, may be empty
    name: String,
    score: Score,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_score(name, 0)
    }

    pub fn with_score(name: impl Into<String>, score: Score) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Add a point. There is no upper bound, only overflow protection.
    pub fn increment_score(&mut self) -> Score {
        self.score = self.score.saturating_add(1);
        self.score
    }

    /// Take a point away, never going below zero
    pub fn decrement_score(&mut self) -> Score {
        self.score = self.score.saturating_sub(1);
        self.score
    }

    pub fn reset_score(&mut self) {
        self.score = 0;
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}
