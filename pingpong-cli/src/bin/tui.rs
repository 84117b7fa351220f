use clap::Parser;
use pingpong_cli::{
    ClockTicker, LogConfig, ScoreboardArgs, ScoreboardRuntime,
    infrastructure::{CliError, Result},
    presentation::tui::{self, App, AppEvent, UserAction},
};
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(name = "pingpong-tui")]
#[command(version, about = "Table tennis scoreboard - interactive terminal interface")]
struct Cli {
    #[command(flatten)]
    scoreboard: ScoreboardArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    LogConfig::tui().init().map_err(CliError::InvalidConfig)?;

    let config = Cli::parse().scoreboard.into_config()?;
    let mut runtime = ScoreboardRuntime::new(&config);
    let mut ticker = ClockTicker::new(config.tick_interval());
    let mut app = App::new(runtime.scoreboard().clone());

    let mut terminal = tui::setup_terminal()?;
    let mut events = tui::event::spawn_event_reader();

    let result = run_app_loop(&mut terminal, &mut app, &mut runtime, &mut ticker, &mut events).await;

    tui::restore_terminal(terminal)?;

    result
}

async fn run_app_loop(
    terminal: &mut tui::TuiTerminal,
    app: &mut App,
    runtime: &mut ScoreboardRuntime,
    ticker: &mut ClockTicker,
    events: &mut mpsc::UnboundedReceiver<AppEvent>,
) -> Result<()> {
    loop {
        terminal.draw(|f| tui::ui::render(f, app))?;

        tokio::select! {
            _ = ticker.tick() => {
                runtime.tick();
            }

            app_event = events.recv() => {
                match app_event {
                    Some(AppEvent::Key(key)) => match app.handle_key(key) {
                        Some(UserAction::Dispatch(cmd)) => {
                            runtime.submit(cmd);
                        }
                        Some(UserAction::Quit) => break,
                        None => {}
                    },
                    Some(AppEvent::Resize) => {}
                    None => break,
                }
            }
        }

        ticker.sync(runtime.scoreboard().clock().is_running());
        app.update(runtime.scoreboard());
    }

    Ok(())
}
