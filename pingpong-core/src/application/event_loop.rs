use crate::application::{ScoreboardCommand, ScoreboardEvent};
use crate::config::ScoreboardConfig;
use crate::domain::{PlayerSlot, Scoreboard};

/// Scoreboard event loop that applies commands and emits events
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreboardEventLoop {
    scoreboard: Scoreboard,
}

impl ScoreboardEventLoop {
    pub fn new(config: &ScoreboardConfig) -> Self {
        Self::from_scoreboard(Scoreboard::new(config))
    }

    pub fn from_scoreboard(scoreboard: Scoreboard) -> Self {
        Self { scoreboard }
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Apply a single command and return the resulting events.
    ///
    /// Never fails: a command that changes nothing yields `CommandIgnored`.
    /// A `WinnerDeclared` follows whenever the derived winner changes to a player.
    pub fn handle_command(&mut self, command: ScoreboardCommand) -> Vec<ScoreboardEvent> {
        tracing::debug!(command = command.name(), "Handling scoreboard command");

        let winner_before = self.scoreboard.winner();

        let mut events = match command {
            ScoreboardCommand::IncrementScore { player } => self.handle_increment(player),
            ScoreboardCommand::DecrementScore { player } => self.handle_decrement(player),
            ScoreboardCommand::BeginNameEdit { player } => self.handle_begin_name_edit(player),
            ScoreboardCommand::ToggleNameEditing { player } => {
                self.handle_toggle_name_editing(player)
            }
            ScoreboardCommand::SetName { player, name } => self.handle_set_name(player, name),
            ScoreboardCommand::FinishNameEdit => self.handle_finish_name_edit(),
            ScoreboardCommand::CancelNameEdit => self.handle_cancel_name_edit(),
            ScoreboardCommand::ToggleClock => self.handle_toggle_clock(),
            ScoreboardCommand::Tick => self.handle_tick(),
            ScoreboardCommand::ResetClockDisplay => self.handle_reset_clock_display(),
            ScoreboardCommand::ResetMatch => self.handle_reset_match(),
        };

        let winner_after = self.scoreboard.winner();
        if winner_after != winner_before {
            if let Some(player) = winner_after {
                let scores = self.scoreboard.scores();
                tracing::info!(
                    "🏆 {} wins {}-{}",
                    self.scoreboard.player(player).name(),
                    scores.0,
                    scores.1
                );
                events.push(ScoreboardEvent::WinnerDeclared { player, scores });
            }
        }

        events
    }

    fn ignored(command: &str, reason: &str) -> Vec<ScoreboardEvent> {
        tracing::debug!(command, reason, "Command ignored");
        vec![ScoreboardEvent::CommandIgnored {
            command: command.to_string(),
            reason: reason.to_string(),
        }]
    }

    fn handle_increment(&mut self, player: PlayerSlot) -> Vec<ScoreboardEvent> {
        let score = self.scoreboard.increment_score(player);
        vec![ScoreboardEvent::ScoreChanged { player, score }]
    }

    fn handle_decrement(&mut self, player: PlayerSlot) -> Vec<ScoreboardEvent> {
        if self.scoreboard.score(player) == 0 {
            return Self::ignored("DecrementScore", "Score is already zero");
        }
        let score = self.scoreboard.decrement_score(player);
        vec![ScoreboardEvent::ScoreChanged { player, score }]
    }

    fn handle_begin_name_edit(&mut self, player: PlayerSlot) -> Vec<ScoreboardEvent> {
        if self.scoreboard.is_editing(player) {
            return Self::ignored("BeginNameEdit", "Name is already being edited");
        }

        let mut events = Vec::new();
        if let Some((committed, name)) = self.scoreboard.begin_name_edit(player) {
            events.push(ScoreboardEvent::NameChanged {
                player: committed,
                name,
            });
        }
        events.push(ScoreboardEvent::NameEditStarted { player });
        events
    }

    fn handle_toggle_name_editing(&mut self, player: PlayerSlot) -> Vec<ScoreboardEvent> {
        if self.scoreboard.is_editing(player) {
            self.handle_finish_name_edit()
        } else {
            self.handle_begin_name_edit(player)
        }
    }

    fn handle_set_name(&mut self, player: PlayerSlot, name: String) -> Vec<ScoreboardEvent> {
        let drafting = self.scoreboard.is_editing(player);
        self.scoreboard.set_name(player, name.clone());

        if drafting {
            vec![ScoreboardEvent::NameDraftChanged {
                player,
                draft: name,
            }]
        } else {
            vec![ScoreboardEvent::NameChanged { player, name }]
        }
    }

    fn handle_finish_name_edit(&mut self) -> Vec<ScoreboardEvent> {
        match self.scoreboard.finish_name_edit() {
            Some((player, name)) => vec![ScoreboardEvent::NameChanged { player, name }],
            None => Self::ignored("FinishNameEdit", "No name is being edited"),
        }
    }

    fn handle_cancel_name_edit(&mut self) -> Vec<ScoreboardEvent> {
        match self.scoreboard.cancel_name_edit() {
            Some(player) => vec![ScoreboardEvent::NameEditCancelled { player }],
            None => Self::ignored("CancelNameEdit", "No name is being edited"),
        }
    }

    fn handle_toggle_clock(&mut self) -> Vec<ScoreboardEvent> {
        let state = self.scoreboard.toggle_clock();
        tracing::debug!(%state, "Match clock toggled");
        vec![ScoreboardEvent::ClockToggled { state }]
    }

    fn handle_tick(&mut self) -> Vec<ScoreboardEvent> {
        if !self.scoreboard.tick_clock() {
            return Self::ignored("Tick", "Clock is stopped");
        }
        vec![ScoreboardEvent::ClockTicked {
            elapsed_secs: self.scoreboard.clock().elapsed_secs(),
        }]
    }

    fn handle_reset_clock_display(&mut self) -> Vec<ScoreboardEvent> {
        self.scoreboard.reset_clock_display();
        vec![ScoreboardEvent::ClockDisplayReset]
    }

    fn handle_reset_match(&mut self) -> Vec<ScoreboardEvent> {
        self.scoreboard.reset_match();
        tracing::info!("🔄 New game");
        vec![ScoreboardEvent::MatchReset]
    }
}

impl Default for ScoreboardEventLoop {
    fn default() -> Self {
        Self::new(&ScoreboardConfig::default())
    }
}
