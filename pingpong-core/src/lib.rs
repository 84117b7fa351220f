//! # Ping-Pong Scoreboard Core
//!
//! Scoreboard state for a single table-tennis match: players, match clock,
//! winner derivation, and the command/event loop presentation layers drive.

pub mod application;
pub mod config;
pub mod domain;
pub mod labels;

pub use application::{ScoreboardCommand, ScoreboardEvent, ScoreboardEventLoop};
pub use config::ScoreboardConfig;
pub use domain::{
    ClockState, MatchClock, ParsePlayerSlotError, Player, PlayerSlot, Score, Scoreboard,
    WIN_THRESHOLD, compute_winner, format_time,
};
