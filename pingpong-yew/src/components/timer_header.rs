use pingpong_core::format_time;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TimerHeaderProps {
    pub elapsed_secs: u64,
    #[prop_or_default]
    pub running: bool,
    pub on_toggle: Callback<MouseEvent>,
    pub on_reset: Callback<MouseEvent>,
}

fn toggle_icon(running: bool) -> &'static str {
    if running { "⏸" } else { "▶" }
}

/// Match clock: play/pause, `HH:MM:SS`, reset time
#[function_component(TimerHeader)]
pub fn timer_header(props: &TimerHeaderProps) -> Html {
    html! {
        <header class="pingpong-timer">
            <button
                class="pingpong-timer__toggle"
                onclick={props.on_toggle.clone()}
                title={if props.running { "Pause" } else { "Start" }}
            >
                {toggle_icon(props.running)}
            </button>
            <span class="pingpong-timer__time">{format_time(props.elapsed_secs)}</span>
            <button
                class="pingpong-timer__reset"
                onclick={props.on_reset.clone()}
                title="Reset time"
            >
                {"↺"}
            </button>
        </header>
    }
}
