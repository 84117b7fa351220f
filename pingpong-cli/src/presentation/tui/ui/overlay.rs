use super::centered_rect;
use crate::presentation::tui::app::App;
use pingpong_core::labels;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

pub fn render_winner_overlay(f: &mut Frame, area: Rect, app: &App) {
    let board = &app.scoreboard;
    let Some(winner) = board.winner() else {
        return;
    };
    let (one, two) = board.scores();

    let text = vec![
        Line::from("👑"),
        Line::from(Span::styled(
            labels::winner_headline(board.player(winner).name()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(labels::result_line(one, two)),
        Line::from(""),
        Line::from(vec![
            Span::styled("[n / Enter] ", Style::default().fg(Color::Yellow)),
            Span::raw(labels::START_NEW_GAME),
        ]),
    ];

    let popup = centered_rect(44, 7, area);
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}
