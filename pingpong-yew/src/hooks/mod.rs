mod use_clock_interval;
mod use_scoreboard;
mod use_winner;

pub use use_clock_interval::use_clock_interval;
pub use use_scoreboard::{ScoreboardContext, use_scoreboard};
pub use use_winner::use_winner;
