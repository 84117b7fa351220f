use super::centered_rect;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

const SHORTCUTS: &[(&str, &str)] = &[
    ("←/→ Tab", "Focus player"),
    ("↑ / +", "Add a point"),
    ("↓ / -", "Remove a point"),
    ("e", "Rename (Enter saves, Esc cancels)"),
    ("Space / p", "Start or stop the clock"),
    ("t", "Reset the clock display"),
    ("n", "New game"),
    ("?", "Toggle this help"),
    ("q / Esc", "Quit"),
];

pub fn render_help(f: &mut Frame, area: Rect) {
    let mut text = vec![
        Line::from(Span::styled(
            "Scoreboard:",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    text.extend(SHORTCUTS.iter().map(|(keys, action)| {
        Line::from(vec![
            Span::styled(format!("  {:<10}", keys), Style::default().fg(Color::Yellow)),
            Span::raw(format!("  {}", action)),
        ])
    }));

    let popup = centered_rect(56, text.len() as u16 + 2, area);
    let paragraph = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Keyboard Shortcuts"),
    );

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}
