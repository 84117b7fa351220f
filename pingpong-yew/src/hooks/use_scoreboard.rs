use pingpong_core::{Scoreboard, ScoreboardCommand};
use std::rc::Rc;
use yew::prelude::*;

/// Scoreboard state accessible via hook
#[derive(Clone)]
pub struct ScoreboardContext {
    pub scoreboard: Scoreboard,

    /// Send commands to the provider's reducer
    pub send_command: Rc<dyn Fn(ScoreboardCommand)>,
}

impl ScoreboardContext {
    pub fn send(&self, cmd: ScoreboardCommand) {
        (self.send_command)(cmd);
    }

    /// Callback that sends `cmd` whenever it fires, ignoring the event payload
    pub fn command_callback<E: 'static>(&self, cmd: ScoreboardCommand) -> Callback<E> {
        let send_command = self.send_command.clone();
        Callback::from(move |_: E| send_command(cmd.clone()))
    }
}

impl PartialEq for ScoreboardContext {
    fn eq(&self, other: &Self) -> bool {
        self.scoreboard == other.scoreboard
    }
}

/// Hook to access scoreboard state
///
/// # Example
///
/// ```rust,ignore
/// use pingpong_yew::use_scoreboard;
/// use pingpong_core::{PlayerSlot, ScoreboardCommand};
///
/// let scoreboard = use_scoreboard();
///
/// scoreboard.send(ScoreboardCommand::IncrementScore {
///     player: PlayerSlot::One,
/// });
/// ```
#[hook]
pub fn use_scoreboard() -> ScoreboardContext {
    use_context::<ScoreboardContext>()
        .expect("use_scoreboard must be used within a ScoreboardProvider")
}
