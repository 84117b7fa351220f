mod scoreboard_provider;

pub use scoreboard_provider::{ScoreboardProvider, ScoreboardProviderProps, ScoreboardState};
