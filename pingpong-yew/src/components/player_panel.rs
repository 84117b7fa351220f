use pingpong_core::{PlayerSlot, Score};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PlayerPanelProps {
    pub slot: PlayerSlot,
    /// Committed name, or the draft while editing
    pub name: AttrValue,
    pub score: Score,
    #[prop_or_default]
    pub editing: bool,
    #[prop_or_default]
    pub is_winner: bool,
    pub on_increment: Callback<MouseEvent>,
    pub on_decrement: Callback<MouseEvent>,
    pub on_begin_edit: Callback<MouseEvent>,
    pub on_name_input: Callback<String>,
    pub on_finish_edit: Callback<()>,
    pub on_cancel_edit: Callback<()>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NameEditKey {
    Commit,
    Cancel,
}

fn name_edit_key(key: &str) -> Option<NameEditKey> {
    match key {
        "Enter" => Some(NameEditKey::Commit),
        "Escape" => Some(NameEditKey::Cancel),
        _ => None,
    }
}

fn panel_modifier(slot: PlayerSlot) -> &'static str {
    match slot {
        PlayerSlot::One => "pingpong-player--one",
        PlayerSlot::Two => "pingpong-player--two",
    }
}

/// One side of the table: editable name, large score, -/+ buttons
#[function_component(PlayerPanel)]
pub fn player_panel(props: &PlayerPanelProps) -> Html {
    let input_ref = use_node_ref();

    {
        let input_ref = input_ref.clone();
        use_effect_with(props.editing, move |editing| {
            if *editing {
                if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                    let _ = input.focus();
                }
            }
            || ()
        });
    }

    let name_view = if props.editing {
        let oninput = {
            let on_name_input = props.on_name_input.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                on_name_input.emit(input.value());
            })
        };

        let onkeydown = {
            let on_finish_edit = props.on_finish_edit.clone();
            let on_cancel_edit = props.on_cancel_edit.clone();
            Callback::from(move |e: KeyboardEvent| match name_edit_key(&e.key()) {
                Some(NameEditKey::Commit) => on_finish_edit.emit(()),
                Some(NameEditKey::Cancel) => on_cancel_edit.emit(()),
                None => {}
            })
        };

        let onblur = props.on_finish_edit.reform(|_: FocusEvent| ());

        html! {
            <input
                ref={input_ref}
                class="pingpong-player__name-input"
                value={props.name.clone()}
                {oninput}
                {onkeydown}
                {onblur}
            />
        }
    } else {
        html! {
            <h2
                class="pingpong-player__name"
                onclick={props.on_begin_edit.clone()}
                title="Click to edit"
            >
                {&*props.name}
            </h2>
        }
    };

    html! {
        <section class={classes!("pingpong-player", panel_modifier(props.slot))}>
            {if props.is_winner {
                html! { <span class="pingpong-player__crown">{"👑"}</span> }
            } else {
                html! {}
            }}

            {name_view}

            <div class="pingpong-player__score">{props.score}</div>

            <div class="pingpong-player__buttons">
                <button
                    class="pingpong-player__button"
                    onclick={props.on_decrement.clone()}
                    title="-1"
                >
                    {"−"}
                </button>
                <button
                    class="pingpong-player__button"
                    onclick={props.on_increment.clone()}
                    title="+1"
                >
                    {"+"}
                </button>
            </div>
        </section>
    }
}
