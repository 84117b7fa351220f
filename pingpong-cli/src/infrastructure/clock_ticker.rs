use std::future;
use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

/// Host timer for the match clock.
///
/// Only armed while the clock runs. Disarming drops the interval, so a
/// pending tick can never be delivered after the clock is stopped.
pub struct ClockTicker {
    period: Duration,
    interval: Option<Interval>,
}

impl ClockTicker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            interval: None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.interval.is_some()
    }

    /// Start ticking; the first tick fires one full period from now
    pub fn arm(&mut self) {
        let mut interval = interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Burst);
        self.interval = Some(interval);
        tracing::debug!("Clock ticker armed ({:?})", self.period);
    }

    pub fn disarm(&mut self) {
        if self.interval.take().is_some() {
            tracing::debug!("Clock ticker disarmed");
        }
    }

    /// Match the ticker to the clock state. Already armed tickers keep
    /// their phase.
    pub fn sync(&mut self, running: bool) {
        match (running, self.is_armed()) {
            (true, false) => self.arm(),
            (false, true) => self.disarm(),
            _ => {}
        }
    }

    /// Wait for the next tick. Never resolves while disarmed.
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => future::pending::<()>().await,
        }
    }
}
