pub mod application;
pub mod infrastructure;

pub use application::{LineInput, ScoreboardArgs, ScoreboardRuntime, parse_line, status_text};
pub use infrastructure::{CliError, ClockTicker, LogConfig, Result};

#[cfg(feature = "tui")]
pub mod presentation;
