use super::app::App;
use pingpong_core::PlayerSlot;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

mod controls;
mod help;
mod overlay;
mod players;
mod summary;
mod timer;

/// Main render function - header, table, control bar, then popups
pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Timer
            Constraint::Min(7),    // Table
            Constraint::Length(3), // Controls
        ])
        .split(f.area());

    timer::render_timer(f, chunks[0], app);
    render_table(f, chunks[1], app);
    controls::render_controls(f, chunks[2], app);

    if app.scoreboard.winner().is_some() {
        overlay::render_winner_overlay(f, f.area(), app);
    }
    if app.show_help {
        help::render_help(f, f.area());
    }
}

fn render_table(f: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(20),
            Constraint::Percentage(40),
        ])
        .split(area);

    players::render_player(f, columns[0], app, PlayerSlot::One);
    summary::render_summary(f, columns[1], app);
    players::render_player(f, columns[2], app, PlayerSlot::Two);
}

/// Centered popup area of a fixed size, clamped to `area`
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    popup
}
