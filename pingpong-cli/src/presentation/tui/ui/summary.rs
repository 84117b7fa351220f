use crate::presentation::tui::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

pub fn render_summary(f: &mut Frame, area: Rect, app: &App) {
    let (one, two) = app.scoreboard.scores();

    let text = vec![
        Line::from(""),
        Line::from(""),
        Line::from(format!("{} : {}", one, two)).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(paragraph, area);
}
