use crate::domain::{ClockState, PlayerSlot, Score};
use serde::{Deserialize, Serialize};

/// Events emitted by the event loop after a command is handled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ScoreboardEvent {
    /// A player's score moved
    ScoreChanged { player: PlayerSlot, score: Score },

    /// The name editor opened for a player
    NameEditStarted { player: PlayerSlot },

    /// The uncommitted draft changed
    NameDraftChanged { player: PlayerSlot, draft: String },

    /// A name was committed or replaced directly
    NameChanged { player: PlayerSlot, name: String },

    /// The draft was thrown away
    NameEditCancelled { player: PlayerSlot },

    ClockToggled { state: ClockState },

    ClockTicked { elapsed_secs: u64 },

    ClockDisplayReset,

    /// Scores and clock back to zero, clock stopped
    MatchReset,

    /// A command made this player the winner
    WinnerDeclared {
        player: PlayerSlot,
        scores: (Score, Score),
    },

    /// The command was accepted but changed nothing
    CommandIgnored { command: String, reason: String },
}

impl ScoreboardEvent {
    pub fn is_ignored(&self) -> bool {
        matches!(self, ScoreboardEvent::CommandIgnored { .. })
    }
}
