use cucumber::{given, then, when};
use pingpong_core::{ScoreboardCommand, ScoreboardConfig};
use pingpong_tests::{ScoreboardWorld, slot};

// ===== Given Steps =====

#[given("a fresh scoreboard")]
async fn fresh_scoreboard(world: &mut ScoreboardWorld) {
    world.start_with(&ScoreboardConfig::fresh());
}

#[given("the default scoreboard")]
async fn default_scoreboard(world: &mut ScoreboardWorld) {
    world.start_with(&ScoreboardConfig::default());
}

#[given(expr = "the score is {int} - {int}")]
async fn score_is(world: &mut ScoreboardWorld, one: u32, two: u32) {
    world.start_with(&ScoreboardConfig::fresh().with_initial_scores(one, two));
}

// ===== When Steps =====

#[when(regex = r"^player (\d) scores (\d+) points?$")]
async fn player_scores(world: &mut ScoreboardWorld, player: u8, points: u32) {
    for _ in 0..points {
        world.execute(ScoreboardCommand::IncrementScore {
            player: slot(player),
        });
    }
}

#[when(regex = r"^player (\d) loses (\d+) points?$")]
async fn player_loses(world: &mut ScoreboardWorld, player: u8, points: u32) {
    for _ in 0..points {
        world.execute(ScoreboardCommand::DecrementScore {
            player: slot(player),
        });
    }
}

#[when("a new game is started")]
async fn new_game(world: &mut ScoreboardWorld) {
    world.execute(ScoreboardCommand::ResetMatch);
}

// ===== Then Steps =====

#[then(expr = "the board shows {int} - {int}")]
async fn board_shows(world: &mut ScoreboardWorld, one: u32, two: u32) {
    assert_eq!(world.scoreboard().scores(), (one, two));
}

#[then("the last command was ignored")]
async fn last_command_ignored(world: &mut ScoreboardWorld) {
    assert!(
        world.last_command_ignored(),
        "expected {:?} to be ignored, got {:?}",
        world.last_command,
        world.last_events
    );
}
