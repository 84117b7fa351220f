//! UI components for the scoreboard

mod control_bar;
mod player_panel;
mod score_summary;
mod timer_header;
mod winner_overlay;

pub use control_bar::ControlBar;
pub use player_panel::PlayerPanel;
pub use score_summary::ScoreSummary;
pub use timer_header::TimerHeader;
pub use winner_overlay::WinnerOverlay;
