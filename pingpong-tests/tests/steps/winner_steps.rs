use cucumber::then;
use pingpong_tests::{ScoreboardWorld, slot};

#[then(expr = "player {int} is the winner")]
async fn player_is_winner(world: &mut ScoreboardWorld, player: u8) {
    assert_eq!(world.scoreboard().winner(), Some(slot(player)));
}

#[then("there is no winner")]
async fn no_winner(world: &mut ScoreboardWorld) {
    assert_eq!(world.scoreboard().winner(), None);
}

#[then(expr = "the winner is {string}")]
async fn winner_is(world: &mut ScoreboardWorld, expected: String) {
    let winner = world
        .scoreboard()
        .winner()
        .map(|player| world.scoreboard().player(player).name().to_string())
        .unwrap_or_else(|| "nobody".to_string());
    assert_eq!(winner, expected);
}

#[then(expr = "player {int} was declared the winner")]
async fn player_was_declared(world: &mut ScoreboardWorld, player: u8) {
    assert_eq!(world.declared_winners().last(), Some(&slot(player)));
}

#[then("no winner was declared")]
async fn none_declared(world: &mut ScoreboardWorld) {
    assert!(world.declared_winners().is_empty());
}
