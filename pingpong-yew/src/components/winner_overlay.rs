use pingpong_core::{Score, labels};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WinnerOverlayProps {
    pub winner_name: AttrValue,
    pub player_one: Score,
    pub player_two: Score,
    pub on_new_game: Callback<MouseEvent>,
}

/// Full-viewport backdrop that sits above the board and swallows clicks
const BACKDROP_STYLE: &str = "position:fixed;inset:0;z-index:1000;\
    display:flex;align-items:center;justify-content:center;\
    background:rgba(0,0,0,0.6);";

const CARD_STYLE: &str = "background:#fff;border-radius:12px;padding:2rem;text-align:center;";

/// Blocking modal shown while a winner exists
#[function_component(WinnerOverlay)]
pub fn winner_overlay(props: &WinnerOverlayProps) -> Html {
    html! {
        <div class="pingpong-overlay" style={BACKDROP_STYLE}>
            <div
                class="pingpong-overlay__card"
                style={CARD_STYLE}
                role="dialog"
                aria-modal="true"
            >
                <div class="pingpong-overlay__crown">{"👑"}</div>
                <h2 class="pingpong-overlay__title">
                    {labels::winner_headline(&props.winner_name)}
                </h2>
                <p class="pingpong-overlay__result">
                    {labels::result_line(props.player_one, props.player_two)}
                </p>
                <button class="pingpong-btn" onclick={props.on_new_game.clone()}>
                    {labels::START_NEW_GAME}
                </button>
            </div>
        </div>
    }
}
