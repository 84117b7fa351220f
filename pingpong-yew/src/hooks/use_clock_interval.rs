use gloo_timers::callback::Interval;
use yew::prelude::*;

/// Emit `on_tick` every `period_ms` while `running` is true.
///
/// The interval lives inside an effect keyed on `(running, period_ms)`.
/// Its cleanup drops the interval when the clock stops, when the period
/// changes and when the component unmounts, so no tick is emitted after any
/// of those. `on_tick` is captured when the interval starts.
#[hook]
pub fn use_clock_interval(running: bool, period_ms: u64, on_tick: Callback<()>) {
    use_effect_with((running, period_ms), move |&(running, period_ms)| {
        let interval = running.then(|| {
            tracing::debug!("⏱️ Clock interval started ({}ms)", period_ms);
            let millis = u32::try_from(period_ms).unwrap_or(u32::MAX);
            Interval::new(millis, move || on_tick.emit(()))
        });

        move || {
            if let Some(interval) = interval {
                drop(interval);
                tracing::debug!("⏹️ Clock interval cancelled");
            }
        }
    });
}
