use crate::domain::PlayerSlot;

/// Commands that can be executed on the scoreboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreboardCommand {
    /// Add a point
    IncrementScore { player: PlayerSlot },

    /// Take a point away (clamped at zero)
    DecrementScore { player: PlayerSlot },

    /// Open the name editor for a player
    BeginNameEdit { player: PlayerSlot },

    /// Open the editor, or commit and close it if already open for this player
    ToggleNameEditing { player: PlayerSlot },

    /// Replace a name (updates the draft while that player is being edited)
    SetName { player: PlayerSlot, name: String },

    /// Commit the open draft (Enter / focus lost)
    FinishNameEdit,

    /// Discard the open draft
    CancelNameEdit,

    /// Start ↔ stop the match clock
    ToggleClock,

    /// One second of match time from the host timer
    Tick,

    /// Zero the clock, leave it running or stopped
    ResetClockDisplay,

    /// Zero scores and clock, stop the clock
    ResetMatch,
}

impl ScoreboardCommand {
    /// Short name for logs and `CommandIgnored` events
    pub fn name(&self) -> &'static str {
        match self {
            ScoreboardCommand::IncrementScore { .. } => "IncrementScore",
            ScoreboardCommand::DecrementScore { .. } => "DecrementScore",
            ScoreboardCommand::BeginNameEdit { .. } => "BeginNameEdit",
            ScoreboardCommand::ToggleNameEditing { .. } => "ToggleNameEditing",
            ScoreboardCommand::SetName { .. } => "SetName",
            ScoreboardCommand::FinishNameEdit => "FinishNameEdit",
            ScoreboardCommand::CancelNameEdit => "CancelNameEdit",
            ScoreboardCommand::ToggleClock => "ToggleClock",
            ScoreboardCommand::Tick => "Tick",
            ScoreboardCommand::ResetClockDisplay => "ResetClockDisplay",
            ScoreboardCommand::ResetMatch => "ResetMatch",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_clone() {
        let cmd = ScoreboardCommand::SetName {
            player: PlayerSlot::One,
            name: "Alice".to_string(),
        };

        let cloned = cmd.clone();
        assert_eq!(cmd, cloned);
    }

    #[test]
    fn test_command_debug() {
        let cmd = ScoreboardCommand::IncrementScore {
            player: PlayerSlot::Two,
        };

        let debug = format!("{:?}", cmd);
        assert!(debug.contains("IncrementScore"));
        assert!(debug.contains("Two"));
    }

    #[test]
    fn test_command_name() {
        assert_eq!(ScoreboardCommand::Tick.name(), "Tick");
        assert_eq!(
            ScoreboardCommand::DecrementScore {
                player: PlayerSlot::One
            }
            .name(),
            "DecrementScore"
        );
    }
}
