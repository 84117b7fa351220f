//! Presentation strings. These are fixed Uzbek labels, not translations.

use crate::domain::Score;

pub const NEW_GAME: &str = "Yangi o'yin";
pub const START_NEW_GAME: &str = "Yangi o'yin boshlash";
pub const SETTINGS: &str = "Sozlamalar";
pub const WINNER: &str = "G'olib";
pub const RESULT: &str = "Natija";

pub fn winner_headline(name: &str) -> String {
    format!("{}: {}!", WINNER, name)
}

pub fn result_line(player_one: Score, player_two: Score) -> String {
    format!("{}: {} - {}", RESULT, player_one, player_two)
}
