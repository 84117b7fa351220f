use cucumber::World;
use pingpong_core::{
    PlayerSlot, Scoreboard, ScoreboardCommand, ScoreboardConfig, ScoreboardEvent,
    ScoreboardEventLoop,
};

#[derive(Debug, World, Default)]
pub struct ScoreboardWorld {
    /// Scoreboard event loop (the system under test)
    pub event_loop: ScoreboardEventLoop,

    /// Last command executed (for debugging)
    pub last_command: Option<ScoreboardCommand>,

    /// Events emitted by the last command
    pub last_events: Vec<ScoreboardEvent>,

    /// Every event emitted in this scenario
    pub history: Vec<ScoreboardEvent>,
}

impl ScoreboardWorld {
    /// Replace the board with one built from `config`
    pub fn start_with(&mut self, config: &ScoreboardConfig) {
        self.event_loop = ScoreboardEventLoop::new(config);
        self.last_command = None;
        self.last_events.clear();
        self.history.clear();
    }

    /// Execute a command and store the resulting events
    pub fn execute(&mut self, command: ScoreboardCommand) -> &[ScoreboardEvent] {
        self.last_command = Some(command.clone());
        self.last_events = self.event_loop.handle_command(command);
        self.history.extend(self.last_events.iter().cloned());
        &self.last_events
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        self.event_loop.scoreboard()
    }

    /// Check if the last command changed nothing
    pub fn last_command_ignored(&self) -> bool {
        self.last_events.iter().any(ScoreboardEvent::is_ignored)
    }

    /// Winners announced so far, in order
    pub fn declared_winners(&self) -> Vec<PlayerSlot> {
        self.history
            .iter()
            .filter_map(|event| match event {
                ScoreboardEvent::WinnerDeclared { player, .. } => Some(*player),
                _ => None,
            })
            .collect()
    }
}

/// Map the player number used in feature files to a slot
pub fn slot(number: u8) -> PlayerSlot {
    number
        .to_string()
        .parse()
        .unwrap_or_else(|e| panic!("{}", e))
}
