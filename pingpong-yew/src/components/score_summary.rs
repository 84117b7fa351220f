use pingpong_core::Score;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ScoreSummaryProps {
    pub player_one: Score,
    pub player_two: Score,
}

/// Centre column: both scores stacked
#[function_component(ScoreSummary)]
pub fn score_summary(props: &ScoreSummaryProps) -> Html {
    html! {
        <div class="pingpong-summary">
            <div class="pingpong-summary__score pingpong-summary__score--one">{props.player_one}</div>
            <div class="pingpong-summary__separator">{"-"}</div>
            <div class="pingpong-summary__score pingpong-summary__score--two">{props.player_two}</div>
        </div>
    }
}
