use cucumber::{then, when};
use pingpong_core::ScoreboardCommand;
use pingpong_tests::{ScoreboardWorld, slot};

#[when(expr = "player {int} starts editing their name")]
async fn begin_edit(world: &mut ScoreboardWorld, player: u8) {
    world.execute(ScoreboardCommand::BeginNameEdit {
        player: slot(player),
    });
}

#[when(expr = "player {int} toggles name editing")]
async fn toggle_edit(world: &mut ScoreboardWorld, player: u8) {
    world.execute(ScoreboardCommand::ToggleNameEditing {
        player: slot(player),
    });
}

#[when(expr = "player {int} types {string}")]
async fn types(world: &mut ScoreboardWorld, player: u8, name: String) {
    world.execute(ScoreboardCommand::SetName {
        player: slot(player),
        name,
    });
}

#[when("the name edit is committed")]
async fn commit(world: &mut ScoreboardWorld) {
    world.execute(ScoreboardCommand::FinishNameEdit);
}

#[when("the name edit is cancelled")]
async fn cancel(world: &mut ScoreboardWorld) {
    world.execute(ScoreboardCommand::CancelNameEdit);
}

#[then(expr = "player {int} is called {string}")]
async fn is_called(world: &mut ScoreboardWorld, player: u8, name: String) {
    assert_eq!(world.scoreboard().player(slot(player)).name(), name);
}

#[then(expr = "player {int} is shown as {string}")]
async fn is_shown_as(world: &mut ScoreboardWorld, player: u8, name: String) {
    assert_eq!(world.scoreboard().display_name(slot(player)), name);
}

#[then(expr = "player {int} is editing")]
async fn is_editing(world: &mut ScoreboardWorld, player: u8) {
    assert_eq!(world.scoreboard().editing(), Some(slot(player)));
}

#[then("nobody is editing")]
async fn nobody_editing(world: &mut ScoreboardWorld) {
    assert_eq!(world.scoreboard().editing(), None);
}

#[then(expr = "the saved board names player {int} {string}")]
async fn saved_board_names(world: &mut ScoreboardWorld, player: u8, name: String) {
    let json = serde_json::to_value(world.scoreboard()).expect("Scoreboard serializes");
    let index = slot(player).index();
    assert_eq!(json["players"][index]["name"], name.as_str());
}
