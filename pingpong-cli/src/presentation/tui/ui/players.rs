use crate::presentation::tui::app::App;
use pingpong_core::PlayerSlot;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

fn accent(slot: PlayerSlot) -> Color {
    match slot {
        PlayerSlot::One => Color::Cyan,
        PlayerSlot::Two => Color::Magenta,
    }
}

pub fn render_player(f: &mut Frame, area: Rect, app: &App, slot: PlayerSlot) {
    let board = &app.scoreboard;
    let focused = app.focus == slot;
    let editing = board.is_editing(slot);

    let mut name = vec![Span::styled(
        board.display_name(slot).to_string(),
        Style::default().fg(accent(slot)).add_modifier(Modifier::BOLD),
    )];
    if editing {
        name.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
    }
    if board.winner() == Some(slot) {
        name.insert(0, Span::raw("👑 "));
    }

    let hint = if editing {
        "Enter: save | Esc: cancel"
    } else if focused {
        "↓ -1   ↑ +1   e: rename"
    } else {
        ""
    };

    let text = vec![
        Line::from(name),
        Line::from(""),
        Line::from(Span::styled(
            board.score(slot).to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(hint, Style::default().fg(Color::Gray))),
    ];

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(slot.to_string());
    if focused {
        block = block
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(Color::Yellow));
    }

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(block);

    f.render_widget(paragraph, area);
}
