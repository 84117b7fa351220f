mod commands;
mod event_loop;
mod events;

pub use commands::ScoreboardCommand;
pub use event_loop::ScoreboardEventLoop;
pub use events::ScoreboardEvent;
