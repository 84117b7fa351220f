use super::player::{PlayerSlot, Score};

/// Points a player needs before a winner can be declared
pub const WIN_THRESHOLD: Score = 11;

/// Derive the winner from raw scores.
///
/// Once either score reaches [`WIN_THRESHOLD`] the strictly higher score wins.
/// No two-point margin is required, and a tie at or above the threshold has
/// no winner.
pub fn compute_winner(player_one: Score, player_two: Score) -> Option<PlayerSlot> {
    if player_one < WIN_THRESHOLD && player_two < WIN_THRESHOLD {
        return None;
    }

    match player_one.cmp(&player_two) {
        std::cmp::Ordering::Greater => Some(PlayerSlot::One),
        std::cmp::Ordering::Less => Some(PlayerSlot::Two),
        std::cmp::Ordering::Equal => None,
    }
}
