use pingpong_core::{PlayerSlot, Scoreboard, labels};

/// Plain-text rendering of the board for the `status` command
pub fn status_text(board: &Scoreboard) -> String {
    let clock = board.clock();
    let (one, two) = board.scores();

    let mut lines = vec![
        format!("⏱ {} ({})", clock.formatted(), clock.state()),
        format!(
            "{} {} : {} {}",
            board.display_name(PlayerSlot::One),
            one,
            two,
            board.display_name(PlayerSlot::Two)
        ),
    ];

    if let Some(edit) = board.name_edit() {
        lines.push(format!("✏ editing {} \"{}\"", edit.player(), edit.draft()));
    }

    if let Some(winner) = board.winner() {
        lines.push(labels::winner_headline(board.player(winner).name()));
        lines.push(labels::result_line(one, two));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pingpong_core::ScoreboardConfig;

    #[test]
    fn test_fresh_board_status() {
        let board = Scoreboard::new(&ScoreboardConfig::fresh());
        let text = status_text(&board);

        assert!(text.contains("00:00:00"));
        assert!(text.contains("Player 1 0 : 0 Player 2"));
        assert!(!text.contains(labels::WINNER));
    }

    #[test]
    fn test_status_shows_winner() {
        let board = Scoreboard::new(&ScoreboardConfig::default());
        let text = status_text(&board);

        assert!(text.contains("G'olib: Player 2!"));
        assert!(text.contains("Natija: 9 - 11"));
    }

    #[test]
    fn test_status_shows_open_draft() {
        let mut board = Scoreboard::new(&ScoreboardConfig::fresh());
        board.begin_name_edit(PlayerSlot::Two);
        board.set_name(PlayerSlot::Two, "Bob");

        let text = status_text(&board);
        assert!(text.contains("editing Player 2 \"Bob\""));
    }
}
