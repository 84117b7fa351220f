pub mod clock_ticker;
pub mod error;
pub mod observability;

pub use clock_ticker::ClockTicker;
pub use error::{CliError, Result};
pub use observability::LogConfig;
