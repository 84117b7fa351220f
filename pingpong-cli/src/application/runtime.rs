use pingpong_core::{
    Scoreboard, ScoreboardCommand, ScoreboardConfig, ScoreboardEvent, ScoreboardEventLoop,
};

/// Drives the scoreboard event loop for the terminal front ends
pub struct ScoreboardRuntime {
    event_loop: ScoreboardEventLoop,
}

impl ScoreboardRuntime {
    pub fn new(config: &ScoreboardConfig) -> Self {
        Self {
            event_loop: ScoreboardEventLoop::new(config),
        }
    }

    /// Apply a command and return the resulting events
    pub fn submit(&mut self, cmd: ScoreboardCommand) -> Vec<ScoreboardEvent> {
        let events = self.event_loop.handle_command(cmd);
        for event in &events {
            match event {
                ScoreboardEvent::WinnerDeclared { player, scores } => {
                    tracing::info!("🏆 {} wins {} - {}", player, scores.0, scores.1);
                }
                ScoreboardEvent::CommandIgnored { command, reason } => {
                    tracing::debug!("Ignored {}: {}", command, reason);
                }
                ScoreboardEvent::ClockTicked { .. } => {}
                other => tracing::debug!("📤 {:?}", other),
            }
        }

        events
    }

    /// Deliver one second of match time
    pub fn tick(&mut self) -> Vec<ScoreboardEvent> {
        self.submit(ScoreboardCommand::Tick)
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        self.event_loop.scoreboard()
    }
}
