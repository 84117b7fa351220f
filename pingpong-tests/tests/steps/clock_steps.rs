use cucumber::{then, when};
use pingpong_core::{ClockState, ScoreboardCommand};
use pingpong_tests::ScoreboardWorld;

#[when("the clock is toggled")]
async fn clock_toggled(world: &mut ScoreboardWorld) {
    world.execute(ScoreboardCommand::ToggleClock);
}

#[when(regex = r"^(\d+) seconds? pass(?:es)?$")]
async fn seconds_pass(world: &mut ScoreboardWorld, seconds: u32) {
    for _ in 0..seconds {
        world.execute(ScoreboardCommand::Tick);
    }
}

#[when("the clock display is reset")]
async fn clock_display_reset(world: &mut ScoreboardWorld) {
    world.execute(ScoreboardCommand::ResetClockDisplay);
}

#[then(expr = "the clock shows {string}")]
async fn clock_shows(world: &mut ScoreboardWorld, expected: String) {
    assert_eq!(world.scoreboard().clock().formatted(), expected);
}

#[then(regex = r"^the clock is (running|stopped)$")]
async fn clock_state(world: &mut ScoreboardWorld, state: String) {
    let expected = match state.as_str() {
        "running" => ClockState::Running,
        _ => ClockState::Stopped,
    };
    assert_eq!(world.scoreboard().clock().state(), expected);
}
