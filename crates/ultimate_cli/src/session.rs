//! Interactive play and file replay on top of the engine facade.

use crate::config::CliConfig;
use crate::render;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{debug, info, instrument, warn};
use ultimate_tictactoe::{GameState, Move, MoveError, MoveResult, check_move, new_game, player_move};

const QUIT_COMMANDS: [&str; 3] = ["quit", "exit", "q"];

/// Runs a two-player game, reading moves from `input` until the match ends,
/// the player quits, or input runs out.
#[instrument(skip_all)]
pub fn play<R: BufRead, W: Write>(config: &CliConfig, mut input: R, mut output: W) -> Result<()> {
    info!("Starting interactive game");
    let mut state = new_game();
    writeln!(output, "{}", render::screen(&state, config))?;

    loop {
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            info!("Input closed");
            return Ok(());
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if QUIT_COMMANDS.contains(&line.to_lowercase().as_str()) {
            info!("Player quit");
            return Ok(());
        }

        let mv: Move = match line.parse() {
            Ok(mv) => mv,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };
        if let Err(reason) = check_move(&state, mv) {
            writeln!(output, "Invalid move: {}", reason)?;
            continue;
        }

        let result = player_move(mv.sub_game, mv.cell, &state);
        debug!(%mv, valid = result.is_valid(), "Move played");
        let terminal = result.is_terminal();
        let headline = render::outcome(&result);
        state = result.into_state();

        if terminal {
            writeln!(output, "{}", render::board(&state, config))?;
            writeln!(output, "\n{}", headline)?;
            return Ok(());
        }
        writeln!(output, "{}", render::screen(&state, config))?;
    }
}

/// Where a replay stopped.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplayOutcome {
    /// Every move applied and the match goes on.
    Ongoing(GameState),
    /// A move ended the match; later lines were not applied.
    Finished(MoveResult),
    /// A move was refused.
    Rejected {
        /// 1-based line number of the refused move.
        line: usize,
        /// State before the refused move.
        state: GameState,
        /// Why it was refused.
        reason: MoveError,
    },
}

impl ReplayOutcome {
    /// State the replay ended in.
    pub fn state(&self) -> &GameState {
        match self {
            ReplayOutcome::Ongoing(state) | ReplayOutcome::Rejected { state, .. } => state,
            ReplayOutcome::Finished(result) => result.state(),
        }
    }
}

impl std::fmt::Display for ReplayOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplayOutcome::Ongoing(state) => write!(f, "{}", render::turn(state)),
            ReplayOutcome::Finished(result) => write!(f, "{}", render::outcome(result)),
            ReplayOutcome::Rejected { line, reason, .. } => {
                write!(f, "Invalid move on line {}: {}", line, reason)
            }
        }
    }
}

/// Applies moves from `text`, one per line.
///
/// Blank lines and everything after a `#` are ignored.
///
/// # Errors
///
/// Fails on the first line that does not parse as a move.
#[instrument(skip(text))]
pub fn replay_moves(text: &str) -> Result<ReplayOutcome> {
    let mut state = new_game();

    for (idx, raw) in text.lines().enumerate() {
        let number = idx + 1;
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }

        let mv: Move = line
            .parse()
            .with_context(|| format!("Line {}: cannot parse {:?}", number, line))?;

        if let Err(reason) = check_move(&state, mv) {
            warn!(line = number, %reason, "Replay stopped at invalid move");
            return Ok(ReplayOutcome::Rejected {
                line: number,
                state,
                reason,
            });
        }

        let result = player_move(mv.sub_game, mv.cell, &state);
        if result.is_terminal() {
            info!(line = number, "Replay reached end of match");
            return Ok(ReplayOutcome::Finished(result));
        }
        state = result.into_state();
    }

    Ok(ReplayOutcome::Ongoing(state))
}

/// Replays a move file and prints the final board and outcome.
#[instrument(skip(config, path, output), fields(path = %path.display()))]
pub fn replay<W: Write>(config: &CliConfig, path: &Path, mut output: W) -> Result<ReplayOutcome> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read move file {}", path.display()))?;
    let outcome = replay_moves(&text)?;

    writeln!(output, "{}", render::board(outcome.state(), config))?;
    writeln!(output, "\n{}", outcome)?;
    Ok(outcome)
}
