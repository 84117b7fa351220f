use crate::infrastructure::{CliError, Result};
use pingpong_core::{PlayerSlot, ScoreboardCommand};

/// One line of input from the headless session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineInput {
    Command(ScoreboardCommand),
    Status,
    Quit,
}

fn parse_slot(raw: &str) -> Result<PlayerSlot> {
    raw.parse::<PlayerSlot>()
        .map_err(|e| CliError::invalid_command(e.to_string()))
}

/// `name <1|2> [text]`. Everything after the single separator following the
/// slot is the name, verbatim, so names may be empty or padded.
fn parse_name(rest: &str) -> Result<ScoreboardCommand> {
    let rest = rest.trim_start();
    let (slot, name) = rest
        .split_once(char::is_whitespace)
        .unwrap_or((rest, ""));
    if slot.is_empty() {
        return Err(CliError::invalid_command("usage: name <1|2> [text]"));
    }

    Ok(ScoreboardCommand::SetName {
        player: parse_slot(slot)?,
        name: name.to_string(),
    })
}

/// Parse one line of the scoreboard protocol.
///
/// ```text
/// +1 / +2            add a point
/// -1 / -2            remove a point
/// name <1|2> [text]  rename a player (text may be empty)
/// edit <1|2>         toggle name editing
/// commit | cancel    finish or discard the open edit
/// clock              start/stop the clock
/// reset-time         zero the clock display
/// new                start a new game
/// status | quit
/// ```
pub fn parse_line(line: &str) -> Result<LineInput> {
    let input = line.trim_end_matches(['\r', '\n']).trim_start();
    let (word, rest) = input.split_once(char::is_whitespace).unwrap_or((input, ""));

    if word == "name" {
        return parse_name(rest).map(LineInput::Command);
    }

    let rest = rest.trim();
    let command = match word {
        "+1" | "+2" | "-1" | "-2" if rest.is_empty() => {
            let player = parse_slot(&word[1..])?;
            if word.starts_with('+') {
                ScoreboardCommand::IncrementScore { player }
            } else {
                ScoreboardCommand::DecrementScore { player }
            }
        }
        "edit" => ScoreboardCommand::ToggleNameEditing {
            player: parse_slot(rest)?,
        },
        "commit" => ScoreboardCommand::FinishNameEdit,
        "cancel" => ScoreboardCommand::CancelNameEdit,
        "clock" => ScoreboardCommand::ToggleClock,
        "reset-time" => ScoreboardCommand::ResetClockDisplay,
        "new" => ScoreboardCommand::ResetMatch,
        "status" => return Ok(LineInput::Status),
        "quit" | "exit" => return Ok(LineInput::Quit),
        _ => return Err(CliError::invalid_command(input.trim_end())),
    };

    Ok(LineInput::Command(command))
}
