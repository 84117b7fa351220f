pub mod command_parser;
pub mod options;
pub mod runtime;
pub mod status;

pub use command_parser::{LineInput, parse_line};
pub use options::ScoreboardArgs;
pub use runtime::ScoreboardRuntime;
pub use status::status_text;
