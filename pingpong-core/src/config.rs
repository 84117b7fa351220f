use crate::domain::{PlayerSlot, Score};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const ENV_PLAYER_ONE: &str = "PINGPONG_PLAYER_ONE";
const ENV_PLAYER_TWO: &str = "PINGPONG_PLAYER_TWO";
const ENV_TICK_MS: &str = "PINGPONG_TICK_MS";

/// Starting state of a scoreboard and the clock period its host should use
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreboardConfig {
    pub player_one_name: String,
    pub player_two_name: String,
    /// `(player one, player two)` on mount
    pub initial_scores: (Score, Score),
    pub tick_interval_ms: u64,
}

impl ScoreboardConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Both scores at zero instead of the demo state
    pub fn fresh() -> Self {
        Self {
            initial_scores: (0, 0),
            ..Default::default()
        }
    }

    /// Defaults overlaid with `PINGPONG_*` environment variables.
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(name) = std::env::var(ENV_PLAYER_ONE) {
            config.player_one_name = name;
        }
        if let Ok(name) = std::env::var(ENV_PLAYER_TWO) {
            config.player_two_name = name;
        }
        match std::env::var(ENV_TICK_MS).map(|v| v.parse::<u64>()) {
            Ok(Ok(ms)) if ms > 0 => config.tick_interval_ms = ms,
            Ok(_) => tracing::warn!("Ignoring invalid {}", ENV_TICK_MS),
            Err(_) => {}
        }

        config
    }

    pub fn with_names(mut self, player_one: impl Into<String>, player_two: impl Into<String>) -> Self {
        self.player_one_name = player_one.into();
        self.player_two_name = player_two.into();
        self
    }

    pub fn with_initial_scores(mut self, player_one: Score, player_two: Score) -> Self {
        self.initial_scores = (player_one, player_two);
        self
    }

    /// Whole milliseconds, at least 1. Saturates at `u64::MAX`.
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval_ms = u64::try_from(interval.as_millis())
            .unwrap_or(u64::MAX)
            .max(1);
        self
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Default for ScoreboardConfig {
    fn default() -> Self {
        Self {
            player_one_name: PlayerSlot::One.default_name(),
            player_two_name: PlayerSlot::Two.default_name(),
            initial_scores: (9, 11),
            tick_interval_ms: 1000,
        }
    }
}
