use crate::config::ScoreboardConfig;
use crate::domain::{MatchClock, Player, PlayerSlot, Score, compute_winner};
use serde::{Deserialize, Serialize};

/// A name being edited but not yet committed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameEdit {
    player: PlayerSlot,
    draft: String,
}

impl NameEdit {
    pub fn player(&self) -> PlayerSlot {
        self.player
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }
}

/// Scoreboard aggregate root: both players, the match clock and the open name edit.
///
/// The winner is never stored. [`Scoreboard::winner`] derives it from the
/// scores on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    players: [Player; 2],
    clock: MatchClock,
    /// At most one player's name is edited at a time
    #[serde(default)]
    editing: Option<NameEdit>,
}

impl Scoreboard {
    pub fn new(config: &ScoreboardConfig) -> Self {
        let (score_one, score_two) = config.initial_scores;
        Self {
            players: [
                Player::with_score(config.player_one_name.clone(), score_one),
                Player::with_score(config.player_two_name.clone(), score_two),
            ],
            clock: MatchClock::new(),
            editing: None,
        }
    }

    // Queries

    pub fn player(&self, slot: PlayerSlot) -> &Player {
        &self.players[slot.index()]
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn score(&self, slot: PlayerSlot) -> Score {
        self.player(slot).score()
    }

    /// `(player one, player two)`
    pub fn scores(&self) -> (Score, Score) {
        (self.score(PlayerSlot::One), self.score(PlayerSlot::Two))
    }

    pub fn clock(&self) -> &MatchClock {
        &self.clock
    }

    pub fn winner(&self) -> Option<PlayerSlot> {
        let (one, two) = self.scores();
        compute_winner(one, two)
    }

    pub fn name_edit(&self) -> Option<&NameEdit> {
        self.editing.as_ref()
    }

    pub fn editing(&self) -> Option<PlayerSlot> {
        self.editing.as_ref().map(NameEdit::player)
    }

    pub fn is_editing(&self, slot: PlayerSlot) -> bool {
        self.editing() == Some(slot)
    }

    /// Name to show for a player: the draft while it is being edited
    pub fn display_name(&self, slot: PlayerSlot) -> &str {
        match &self.editing {
            Some(edit) if edit.player == slot => &edit.draft,
            _ => self.player(slot).name(),
        }
    }

    // Scores

    pub fn increment_score(&mut self, slot: PlayerSlot) -> Score {
        self.players[slot.index()].increment_score()
    }

    pub fn decrement_score(&mut self, slot: PlayerSlot) -> Score {
        self.players[slot.index()].decrement_score()
    }

    // Names

    /// Start editing `slot`, committing any other open edit first.
    /// Returns the edit that was committed, if any.
    pub fn begin_name_edit(&mut self, slot: PlayerSlot) -> Option<(PlayerSlot, String)> {
        if self.is_editing(slot) {
            return None;
        }
        let committed = self.finish_name_edit();
        self.editing = Some(NameEdit {
            player: slot,
            draft: self.player(slot).name().to_string(),
        });
        committed
    }

    /// Leave edit mode for `slot` if it is open, otherwise start editing it.
    /// Returns the player being edited afterwards.
    pub fn toggle_name_editing(&mut self, slot: PlayerSlot) -> Option<PlayerSlot> {
        if self.is_editing(slot) {
            self.finish_name_edit();
        } else {
            self.begin_name_edit(slot);
        }
        self.editing()
    }

    /// Replace a player's name. While that player is being edited the text
    /// only updates the draft; otherwise the name changes immediately.
    pub fn set_name(&mut self, slot: PlayerSlot, text: impl Into<String>) {
        match &mut self.editing {
            Some(edit) if edit.player == slot => edit.draft = text.into(),
            _ => self.players[slot.index()].rename(text),
        }
    }

    /// Commit the open draft. Returns the player and committed name.
    pub fn finish_name_edit(&mut self) -> Option<(PlayerSlot, String)> {
        let edit = self.editing.take()?;
        self.players[edit.player.index()].rename(edit.draft.clone());
        Some((edit.player, edit.draft))
    }

    /// Drop the open draft, keeping the previous name
    pub fn cancel_name_edit(&mut self) -> Option<PlayerSlot> {
        self.editing.take().map(|edit| edit.player)
    }

    // Clock

    pub fn toggle_clock(&mut self) -> crate::domain::ClockState {
        self.clock.toggle()
    }

    pub fn tick_clock(&mut self) -> bool {
        self.clock.tick()
    }

    pub fn reset_clock_display(&mut self) {
        self.clock.reset_display();
    }

    // Match

    /// Zero both scores and the clock, stop the clock, keep the names
    pub fn reset_match(&mut self) {
        for player in &mut self.players {
            player.reset_score();
        }
        self.clock.reset();
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new(&ScoreboardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ClockState;

    fn fresh() -> Scoreboard {
        Scoreboard::new(&ScoreboardConfig::fresh())
    }

    #[test]
    fn test_default_is_demo_state() {
        let board = Scoreboard::default();

        assert_eq!(board.scores(), (9, 11));
        assert_eq!(board.player(PlayerSlot::One).name(), "Player 1");
        assert_eq!(board.player(PlayerSlot::Two).name(), "Player 2");
        assert_eq!(board.clock().elapsed_secs(), 0);
        assert_eq!(board.clock().state(), ClockState::Stopped);
        assert_eq!(board.editing(), None);
        // Demo scores already have a winner
        assert_eq!(board.winner(), Some(PlayerSlot::Two));
    }

    #[test]
    fn test_scores_are_independent() {
        let mut board = fresh();
        board.increment_score(PlayerSlot::One);
        board.increment_score(PlayerSlot::One);
        board.increment_score(PlayerSlot::Two);

        assert_eq!(board.scores(), (2, 1));
    }

    #[test]
    fn test_decrement_at_zero_stays_zero() {
        let mut board = fresh();
        assert_eq!(board.decrement_score(PlayerSlot::Two), 0);
        assert_eq!(board.scores(), (0, 0));
    }

    #[test]
    fn test_winner_is_recomputed_on_read() {
        let mut board = Scoreboard::new(&ScoreboardConfig::fresh().with_initial_scores(10, 10));
        assert_eq!(board.winner(), None);

        board.increment_score(PlayerSlot::One);
        assert_eq!(board.winner(), Some(PlayerSlot::One));

        board.increment_score(PlayerSlot::Two);
        assert_eq!(board.winner(), None);

        board.decrement_score(PlayerSlot::One);
        assert_eq!(board.winner(), Some(PlayerSlot::Two));
    }

    #[test]
    fn test_reset_match_preserves_names() {
        let mut board = Scoreboard::default();
        board.set_name(PlayerSlot::One, "Alice");
        board.set_name(PlayerSlot::Two, "Bob");
        board.toggle_clock();
        board.tick_clock();

        board.reset_match();

        assert_eq!(board.scores(), (0, 0));
        assert_eq!(board.clock().elapsed_secs(), 0);
        assert!(!board.clock().is_running());
        assert_eq!(board.player(PlayerSlot::One).name(), "Alice");
        assert_eq!(board.player(PlayerSlot::Two).name(), "Bob");
    }

    #[test]
    fn test_set_name_without_edit_applies_immediately() {
        let mut board = fresh();
        board.set_name(PlayerSlot::Two, "Bob");
        assert_eq!(board.player(PlayerSlot::Two).name(), "Bob");
    }

    #[test]
    fn test_draft_is_committed_on_finish() {
        let mut board = fresh();
        board.begin_name_edit(PlayerSlot::One);
        board.set_name(PlayerSlot::One, "Ali");

        assert_eq!(board.display_name(PlayerSlot::One), "Ali");
        assert_eq!(board.player(PlayerSlot::One).name(), "Player 1");

        let committed = board.finish_name_edit();

        assert_eq!(committed, Some((PlayerSlot::One, "Ali".to_string())));
        assert_eq!(board.player(PlayerSlot::One).name(), "Ali");
        assert_eq!(board.editing(), None);
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut board = fresh();
        board.begin_name_edit(PlayerSlot::Two);
        board.set_name(PlayerSlot::Two, "Nobody");

        assert_eq!(board.cancel_name_edit(), Some(PlayerSlot::Two));
        assert_eq!(board.player(PlayerSlot::Two).name(), "Player 2");
    }

    #[test]
    fn test_only_one_name_edited_at_a_time() {
        let mut board = fresh();
        board.begin_name_edit(PlayerSlot::One);
        board.set_name(PlayerSlot::One, "Alice");

        let committed = board.begin_name_edit(PlayerSlot::Two);

        assert_eq!(committed, Some((PlayerSlot::One, "Alice".to_string())));
        assert_eq!(board.editing(), Some(PlayerSlot::Two));
        assert!(!board.is_editing(PlayerSlot::One));
        assert_eq!(board.display_name(PlayerSlot::Two), "Player 2");
    }

    #[test]
    fn test_set_name_for_other_player_while_editing() {
        let mut board = fresh();
        board.begin_name_edit(PlayerSlot::One);
        board.set_name(PlayerSlot::Two, "Bob");

        assert_eq!(board.player(PlayerSlot::Two).name(), "Bob");
        assert_eq!(board.editing(), Some(PlayerSlot::One));
    }

    #[test]
    fn test_toggle_name_editing() {
        let mut board = fresh();

        assert_eq!(board.toggle_name_editing(PlayerSlot::One), Some(PlayerSlot::One));
        board.set_name(PlayerSlot::One, "");
        assert_eq!(board.toggle_name_editing(PlayerSlot::One), None);
        assert_eq!(board.player(PlayerSlot::One).name(), "");

        board.toggle_name_editing(PlayerSlot::One);
        assert_eq!(board.toggle_name_editing(PlayerSlot::Two), Some(PlayerSlot::Two));
    }

    #[test]
    fn test_clock_not_stopped_by_win() {
        let mut board = Scoreboard::default();
        assert!(board.winner().is_some());

        board.toggle_clock();
        assert!(board.tick_clock());
        assert_eq!(board.clock().elapsed_secs(), 1);
    }

    #[test]
    fn test_scoreboard_serialization() {
        let mut board = Scoreboard::default();
        board.begin_name_edit(PlayerSlot::One);

        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Scoreboard = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, board);
    }
}
