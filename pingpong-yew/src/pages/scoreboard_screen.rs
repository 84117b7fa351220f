use crate::components::{ControlBar, PlayerPanel, ScoreSummary, TimerHeader, WinnerOverlay};
use crate::hooks::{ScoreboardContext, use_scoreboard, use_winner};
use pingpong_core::{PlayerSlot, ScoreboardCommand};
use yew::prelude::*;

/// Board callback for `cmd`, or a no-op while `locked`
fn board_callback<E: 'static>(
    ctx: &ScoreboardContext,
    cmd: ScoreboardCommand,
    locked: bool,
) -> Callback<E> {
    if locked {
        Callback::noop()
    } else {
        ctx.command_callback(cmd)
    }
}

/// `locked` is set while the winner overlay is up: the board stays visible
/// but does not react until a new game starts.
fn render_player_panel(ctx: &ScoreboardContext, slot: PlayerSlot, locked: bool) -> Html {
    let board = &ctx.scoreboard;

    let on_increment = board_callback::<MouseEvent>(
        ctx,
        ScoreboardCommand::IncrementScore { player: slot },
        locked,
    );
    let on_decrement = board_callback::<MouseEvent>(
        ctx,
        ScoreboardCommand::DecrementScore { player: slot },
        locked,
    );
    let on_begin_edit = board_callback::<MouseEvent>(
        ctx,
        ScoreboardCommand::BeginNameEdit { player: slot },
        locked,
    );
    let on_finish_edit = ctx.command_callback::<()>(ScoreboardCommand::FinishNameEdit);
    let on_cancel_edit = ctx.command_callback::<()>(ScoreboardCommand::CancelNameEdit);

    let on_name_input = {
        let ctx = ctx.clone();
        Callback::from(move |name: String| {
            ctx.send(ScoreboardCommand::SetName { player: slot, name });
        })
    };

    html! {
        <PlayerPanel
            {slot}
            name={AttrValue::from(board.display_name(slot).to_string())}
            score={board.score(slot)}
            editing={board.is_editing(slot)}
            is_winner={board.winner() == Some(slot)}
            {on_increment}
            {on_decrement}
            {on_begin_edit}
            {on_name_input}
            {on_finish_edit}
            {on_cancel_edit}
        />
    }
}

#[function_component(ScoreboardScreen)]
pub fn scoreboard_screen() -> Html {
    let ctx = use_scoreboard();
    let winner = use_winner();
    let board = &ctx.scoreboard;
    let (player_one, player_two) = board.scores();
    let locked = winner.is_some();

    html! {
        <div class="pingpong-scoreboard">
            <TimerHeader
                elapsed_secs={board.clock().elapsed_secs()}
                running={board.clock().is_running()}
                on_toggle={board_callback::<MouseEvent>(&ctx, ScoreboardCommand::ToggleClock, locked)}
                on_reset={board_callback::<MouseEvent>(&ctx, ScoreboardCommand::ResetClockDisplay, locked)}
            />

            <main
                class="pingpong-scoreboard__table"
                aria-hidden={if locked { "true" } else { "false" }}
            >
                {render_player_panel(&ctx, PlayerSlot::One, locked)}
                <ScoreSummary {player_one} {player_two} />
                {render_player_panel(&ctx, PlayerSlot::Two, locked)}
            </main>

            <ControlBar on_new_game={ctx.command_callback::<MouseEvent>(ScoreboardCommand::ResetMatch)} />

            {match winner {
                Some(winner) => html! {
                    <WinnerOverlay
                        winner_name={AttrValue::from(board.player(winner).name().to_string())}
                        {player_one}
                        {player_two}
                        on_new_game={ctx.command_callback::<MouseEvent>(ScoreboardCommand::ResetMatch)}
                    />
                },
                None => html! {},
            }}
        </div>
    }
}
