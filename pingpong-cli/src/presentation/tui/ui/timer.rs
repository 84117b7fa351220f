use crate::presentation::tui::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render_timer(f: &mut Frame, area: Rect, app: &App) {
    let clock = app.scoreboard.clock();

    let (state, state_style) = if clock.is_running() {
        ("▶ running", Style::default().fg(Color::Green))
    } else {
        ("⏸ stopped", Style::default().fg(Color::DarkGray))
    };

    let line = Line::from(vec![
        Span::styled(
            clock.formatted(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(state, state_style),
    ]);

    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("🏓 Ping Pong"));

    f.render_widget(paragraph, area);
}
