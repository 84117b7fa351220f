pub mod clock;
pub mod outcome;
pub mod player;
pub mod scoreboard;

pub use clock::{ClockState, MatchClock, format_time};
pub use outcome::{WIN_THRESHOLD, compute_winner};
pub use player::{ParsePlayerSlotError, Player, PlayerSlot, Score};
pub use scoreboard::{NameEdit, Scoreboard};
