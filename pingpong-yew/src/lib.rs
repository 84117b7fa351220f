//! # Ping-Pong Scoreboard Yew Components
//!
//! Web front end for the scoreboard core.

pub mod app;
pub mod components;
pub mod hooks;
pub mod pages;
pub mod providers;

// Re-exports for convenience
pub use app::{App, AppProps};
pub use components::{ControlBar, PlayerPanel, ScoreSummary, TimerHeader, WinnerOverlay};
pub use hooks::{ScoreboardContext, use_clock_interval, use_scoreboard, use_winner};
pub use pages::ScoreboardScreen;
pub use providers::{ScoreboardProvider, ScoreboardProviderProps, ScoreboardState};
