use crate::infrastructure::{CliError, Result};
use clap::Args;
use pingpong_core::ScoreboardConfig;
use std::time::Duration;

/// Scoreboard options shared by `pingpong-cli play` and `pingpong-tui`
#[derive(Debug, Clone, Default, Args)]
pub struct ScoreboardArgs {
    /// Name of the left player
    #[arg(long)]
    pub player_one: Option<String>,

    /// Name of the right player
    #[arg(long)]
    pub player_two: Option<String>,

    /// Start from 0 - 0 instead of the demo scores
    #[arg(long)]
    pub fresh: bool,

    /// Length of one clock second in milliseconds
    #[arg(long)]
    pub tick_ms: Option<u64>,
}

impl ScoreboardArgs {
    /// Layer the arguments over the environment configuration
    pub fn into_config(self) -> Result<ScoreboardConfig> {
        self.apply(ScoreboardConfig::from_env())
    }

    fn apply(self, mut config: ScoreboardConfig) -> Result<ScoreboardConfig> {
        if let Some(name) = self.player_one {
            config.player_one_name = name;
        }
        if let Some(name) = self.player_two {
            config.player_two_name = name;
        }
        if self.fresh {
            config = config.with_initial_scores(0, 0);
        }
        match self.tick_ms {
            Some(0) => {
                return Err(CliError::InvalidConfig(
                    "--tick-ms must be at least 1".to_string(),
                ));
            }
            Some(ms) => config = config.with_tick_interval(Duration::from_millis(ms)),
            None => {}
        }

        Ok(config)
    }
}
