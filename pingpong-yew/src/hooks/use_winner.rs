use pingpong_core::PlayerSlot;
use yew::prelude::*;

use super::use_scoreboard;

/// Hook to read the derived winner (convenience wrapper)
///
/// Returns `None` while no player has won.
#[hook]
pub fn use_winner() -> Option<PlayerSlot> {
    let scoreboard = use_scoreboard();
    scoreboard.scoreboard.winner()
}
