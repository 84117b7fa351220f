use serde::{Deserialize, Serialize};
use std::fmt;

/// Match clock state machine: `Stopped` ↔ `Running`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClockState {
    #[default]
    Stopped,
    Running,
}

impl ClockState {
    pub fn toggled(self) -> Self {
        match self {
            ClockState::Stopped => ClockState::Running,
            ClockState::Running => ClockState::Stopped,
        }
    }
}

impl fmt::Display for ClockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockState::Stopped => write!(f, "Stopped"),
            ClockState::Running => write!(f, "Running"),
        }
    }
}

/// Elapsed match time in whole seconds.
///
/// The clock does not own a timer. The host delivers one [`MatchClock::tick`]
/// per second while [`MatchClock::is_running`] is true; ticks delivered while
/// stopped are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchClock {
    elapsed_secs: u64,
    state: ClockState,
}

impl MatchClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == ClockState::Running
    }

    /// Flip between running and stopped, returning the new state
    pub fn toggle(&mut self) -> ClockState {
        self.state = self.state.toggled();
        self.state
    }

    /// Advance by one second. Returns `false` if the clock is stopped.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.elapsed_secs = self.elapsed_secs.saturating_add(1);
        true
    }

    /// Zero the display without touching the running state
    pub fn reset_display(&mut self) {
        self.elapsed_secs = 0;
    }

    /// Zero and stop
    pub fn reset(&mut self) {
        self.elapsed_secs = 0;
        self.state = ClockState::Stopped;
    }

    pub fn formatted(&self) -> String {
        format_time(self.elapsed_secs)
    }
}

/// Render seconds as zero-padded `HH:MM:SS`. Hours keep growing past 99.
pub fn format_time(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}
