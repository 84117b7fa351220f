use pingpong_core::labels;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ControlBarProps {
    pub on_new_game: Callback<MouseEvent>,
}

/// Bottom bar: new game and the (inert) settings button
#[function_component(ControlBar)]
pub fn control_bar(props: &ControlBarProps) -> Html {
    html! {
        <footer class="pingpong-controls">
            <button class="pingpong-btn pingpong-btn--outline" onclick={props.on_new_game.clone()}>
                {"⟳ "}{labels::NEW_GAME}
            </button>
            // Settings has no behaviour yet
            <button class="pingpong-btn pingpong-btn--outline" type="button">
                {"⚙ "}{labels::SETTINGS}
            </button>
        </footer>
    }
}
