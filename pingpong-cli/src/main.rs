use clap::{Parser, Subcommand};
use pingpong_cli::{
    CliError, ClockTicker, LineInput, LogConfig, Result, ScoreboardArgs, ScoreboardRuntime,
    parse_line, status_text,
};
use pingpong_core::{ScoreboardConfig, ScoreboardEvent, format_time, labels};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "pingpong-cli")]
#[command(version, about = "Table tennis scoreboard - headless terminal mode")]
struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scoreboard, reading commands from stdin
    Play {
        #[command(flatten)]
        scoreboard: ScoreboardArgs,

        /// Print `status` as JSON
        #[arg(long)]
        json: bool,
    },

    /// Format a number of seconds as HH:MM:SS
    FormatTime { seconds: u64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_config = if cli.verbose {
        LogConfig::dev()
    } else {
        LogConfig::default()
    };
    log_config.init().map_err(CliError::InvalidConfig)?;

    match cli.command {
        Commands::Play { scoreboard, json } => {
            play(scoreboard.into_config()?, json).await?;
        }
        Commands::FormatTime { seconds } => {
            println!("{}", format_time(seconds));
        }
    }

    Ok(())
}

async fn play(config: ScoreboardConfig, json: bool) -> Result<()> {
    info!(
        "🏓 {} vs {} (tick {:?})",
        config.player_one_name,
        config.player_two_name,
        config.tick_interval()
    );

    let mut runtime = ScoreboardRuntime::new(&config);
    let mut ticker = ClockTicker::new(config.tick_interval());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print_status(&runtime, json)?;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                runtime.tick();
            }

            line = lines.next_line() => {
                match line? {
                    Some(line) => {
                        if !handle_line(&mut runtime, &line, json)? {
                            break;
                        }
                    }
                    None => {
                        info!("Input closed");
                        break;
                    }
                }
            }

            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted");
                break;
            }
        }

        ticker.sync(runtime.scoreboard().clock().is_running());
    }

    print_status(&runtime, json)
}

/// Returns `false` once the session should end
fn handle_line(runtime: &mut ScoreboardRuntime, line: &str, json: bool) -> Result<bool> {
    if line.trim().is_empty() {
        return Ok(true);
    }

    match parse_line(line) {
        Ok(LineInput::Command(cmd)) => {
            for event in runtime.submit(cmd) {
                if let ScoreboardEvent::WinnerDeclared { player, scores } = event {
                    println!(
                        "{}",
                        labels::winner_headline(runtime.scoreboard().player(player).name())
                    );
                    println!("{}", labels::result_line(scores.0, scores.1));
                }
            }
        }
        Ok(LineInput::Status) => print_status(runtime, json)?,
        Ok(LineInput::Quit) => return Ok(false),
        Err(e) => warn!("{}", e),
    }

    Ok(true)
}

fn print_status(runtime: &ScoreboardRuntime, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(runtime.scoreboard())?);
    } else {
        println!("{}", status_text(runtime.scoreboard()));
    }
    Ok(())
}
