use crossterm::event::KeyCode;
use pingpong_core::{PlayerSlot, Scoreboard, ScoreboardCommand, labels};

/// User actions (pure presentation events)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Dispatch(ScoreboardCommand),
    Quit,
}

/// Pure presentation state; the scoreboard is a read-only snapshot
pub struct App {
    pub scoreboard: Scoreboard,
    pub focus: PlayerSlot,
    pub show_help: bool,
    pub should_quit: bool,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(scoreboard: Scoreboard) -> Self {
        Self {
            scoreboard,
            focus: PlayerSlot::One,
            show_help: false,
            should_quit: false,
            status_message: None,
        }
    }

    /// Refresh the snapshot after the runtime processed commands
    pub fn update(&mut self, scoreboard: &Scoreboard) {
        self.scoreboard = scoreboard.clone();
    }

    /// Handle keyboard input → returns UserAction if applicable
    pub fn handle_key(&mut self, key: KeyCode) -> Option<UserAction> {
        self.status_message = None;

        if let Some(edit) = self.scoreboard.name_edit() {
            let player = edit.player();
            let mut draft = edit.draft().to_string();
            return match key {
                KeyCode::Enter => Some(UserAction::Dispatch(ScoreboardCommand::FinishNameEdit)),
                KeyCode::Esc => Some(UserAction::Dispatch(ScoreboardCommand::CancelNameEdit)),
                KeyCode::Backspace => {
                    draft.pop()?;
                    Some(Self::set_draft(player, draft))
                }
                KeyCode::Char(c) => {
                    draft.push(c);
                    Some(Self::set_draft(player, draft))
                }
                _ => None,
            };
        }

        if self.show_help {
            return match key {
                KeyCode::Char('q') => self.quit(),
                KeyCode::Char('?') | KeyCode::Esc | KeyCode::Enter => {
                    self.show_help = false;
                    None
                }
                _ => None,
            };
        }

        // The winner overlay blocks the board until a new game starts
        if self.scoreboard.winner().is_some() {
            return match key {
                KeyCode::Char('n') | KeyCode::Enter => {
                    Some(UserAction::Dispatch(ScoreboardCommand::ResetMatch))
                }
                KeyCode::Char('q') => self.quit(),
                KeyCode::Char('?') => {
                    self.show_help = true;
                    None
                }
                _ => None,
            };
        }

        let focus = self.focus;
        let command = match key {
            KeyCode::Char('q') | KeyCode::Esc => return self.quit(),
            KeyCode::Left => {
                self.focus = PlayerSlot::One;
                return None;
            }
            KeyCode::Right => {
                self.focus = PlayerSlot::Two;
                return None;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = focus.opponent();
                return None;
            }
            KeyCode::Char('?') => {
                self.show_help = true;
                return None;
            }
            KeyCode::Char('s') => {
                self.status_message = Some(format!("{}: not available yet", labels::SETTINGS));
                return None;
            }
            KeyCode::Up | KeyCode::Char('+') => ScoreboardCommand::IncrementScore { player: focus },
            KeyCode::Down | KeyCode::Char('-') => {
                ScoreboardCommand::DecrementScore { player: focus }
            }
            KeyCode::Char('e') => ScoreboardCommand::BeginNameEdit { player: focus },
            KeyCode::Char(' ') | KeyCode::Char('p') => ScoreboardCommand::ToggleClock,
            KeyCode::Char('t') => ScoreboardCommand::ResetClockDisplay,
            KeyCode::Char('n') => ScoreboardCommand::ResetMatch,
            _ => return None,
        };

        Some(UserAction::Dispatch(command))
    }

    fn set_draft(player: PlayerSlot, draft: String) -> UserAction {
        UserAction::Dispatch(ScoreboardCommand::SetName {
            player,
            name: draft,
        })
    }

    fn quit(&mut self) -> Option<UserAction> {
        self.should_quit = true;
        Some(UserAction::Quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pingpong_core::{ScoreboardConfig, ScoreboardEventLoop};

    fn fresh_app() -> App {
        App::new(Scoreboard::new(&ScoreboardConfig::fresh()))
    }

    /// Feed a key through the app and apply the resulting command
    fn press(app: &mut App, event_loop: &mut ScoreboardEventLoop, key: KeyCode) {
        if let Some(UserAction::Dispatch(cmd)) = app.handle_key(key) {
            event_loop.handle_command(cmd);
            app.update(event_loop.scoreboard());
        }
    }

    #[test]
    fn test_arrows_score_focused_player() {
        let mut app = fresh_app();
        let mut event_loop = ScoreboardEventLoop::new(&ScoreboardConfig::fresh());

        press(&mut app, &mut event_loop, KeyCode::Up);
        press(&mut app, &mut event_loop, KeyCode::Right);
        press(&mut app, &mut event_loop, KeyCode::Char('+'));
        press(&mut app, &mut event_loop, KeyCode::Char('+'));
        press(&mut app, &mut event_loop, KeyCode::Down);

        assert_eq!(app.focus, PlayerSlot::Two);
        assert_eq!(app.scoreboard.scores(), (1, 1));
    }

    #[test]
    fn test_tab_switches_focus() {
        let mut app = fresh_app();
        assert_eq!(app.handle_key(KeyCode::Tab), None);
        assert_eq!(app.focus, PlayerSlot::Two);
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.focus, PlayerSlot::One);
    }

    #[test]
    fn test_clock_keys() {
        let mut app = fresh_app();
        assert_eq!(
            app.handle_key(KeyCode::Char(' ')),
            Some(UserAction::Dispatch(ScoreboardCommand::ToggleClock))
        );
        assert_eq!(
            app.handle_key(KeyCode::Char('t')),
            Some(UserAction::Dispatch(ScoreboardCommand::ResetClockDisplay))
        );
    }

    #[test]
    fn test_name_editing_keys() {
        let mut app = fresh_app();
        let mut event_loop = ScoreboardEventLoop::new(&ScoreboardConfig::fresh());

        press(&mut app, &mut event_loop, KeyCode::Char('e'));
        assert!(app.scoreboard.is_editing(PlayerSlot::One));

        // Letters go to the draft instead of triggering shortcuts
        press(&mut app, &mut event_loop, KeyCode::Backspace);
        press(&mut app, &mut event_loop, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.scoreboard.display_name(PlayerSlot::One), "Player q");

        press(&mut app, &mut event_loop, KeyCode::Enter);
        assert_eq!(app.scoreboard.editing(), None);
        assert_eq!(app.scoreboard.player(PlayerSlot::One).name(), "Player q");
    }

    #[test]
    fn test_escape_discards_draft() {
        let mut app = fresh_app();
        let mut event_loop = ScoreboardEventLoop::new(&ScoreboardConfig::fresh());

        press(&mut app, &mut event_loop, KeyCode::Char('e'));
        press(&mut app, &mut event_loop, KeyCode::Char('!'));
        press(&mut app, &mut event_loop, KeyCode::Esc);

        assert!(!app.should_quit);
        assert_eq!(app.scoreboard.player(PlayerSlot::One).name(), "Player 1");
    }

    #[test]
    fn test_overlay_only_accepts_new_game() {
        let mut app = App::new(Scoreboard::new(&ScoreboardConfig::default()));

        assert_eq!(app.handle_key(KeyCode::Up), None);
        assert_eq!(app.handle_key(KeyCode::Char('e')), None);
        assert_eq!(
            app.handle_key(KeyCode::Enter),
            Some(UserAction::Dispatch(ScoreboardCommand::ResetMatch))
        );
    }

    #[test]
    fn test_help_and_settings() {
        let mut app = fresh_app();

        app.handle_key(KeyCode::Char('?'));
        assert!(app.show_help);
        assert_eq!(app.handle_key(KeyCode::Up), None);
        app.handle_key(KeyCode::Esc);
        assert!(!app.show_help);
        assert!(!app.should_quit);

        assert_eq!(app.handle_key(KeyCode::Char('s')), None);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_quit() {
        let mut app = fresh_app();
        assert_eq!(app.handle_key(KeyCode::Char('q')), Some(UserAction::Quit));
        assert!(app.should_quit);
    }
}
