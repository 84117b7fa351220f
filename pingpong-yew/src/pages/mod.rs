mod scoreboard_screen;

pub use scoreboard_screen::ScoreboardScreen;
