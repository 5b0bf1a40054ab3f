//! Plain-text rendering of a match.

use crate::config::CliConfig;
use ultimate_tictactoe::{
    Cell, CellState, GameState, GameStatus, MoveResult, Player, Position, WINNING_LINES,
    winning_line,
};

const BLOCK_SEPARATOR: &str = " | ";
const ROW_SEPARATOR: &str = "------+-------+------";

fn player_mark(player: Player, config: &CliConfig) -> char {
    match player {
        Player::X => *config.x_mark(),
        Player::O => *config.o_mark(),
    }
}

fn cell_mark(cell: &Cell, config: &CliConfig) -> char {
    match cell.status() {
        CellState::Empty => *config.empty_mark(),
        CellState::Played(player) => player_mark(player, config),
    }
}

/// The full 9x9 board, sub-games separated by rules.
pub fn board(state: &GameState, config: &CliConfig) -> String {
    let mut lines = Vec::with_capacity(11);
    for row in 0..9 {
        if row == 3 || row == 6 {
            lines.push(ROW_SEPARATOR.to_string());
        }
        let blocks: Vec<String> = (0..3)
            .map(|block| {
                let sub_game = Position::ALL[(row / 3) * 3 + block];
                (0..3)
                    .map(|col| {
                        let cell = Position::ALL[(row % 3) * 3 + col];
                        cell_mark(state.cell(sub_game, cell), config).to_string()
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        lines.push(blocks.join(BLOCK_SEPARATOR));
    }
    lines.join("\n")
}

/// One character per sub-game: the winner's mark, `#` for a tie, `*` for
/// the forced sub-game, the empty mark otherwise.
pub fn overview(state: &GameState, config: &CliConfig) -> String {
    Position::ALL
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|&pos| match state.sub_game(pos).status() {
                    GameStatus::Won(player) => player_mark(player, config),
                    GameStatus::Tie => '#',
                    GameStatus::InProcess if state.current_sub_game() == Some(pos) => '*',
                    GameStatus::InProcess => *config.empty_mark(),
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Whose turn it is and where they may play.
pub fn turn(state: &GameState) -> String {
    match state.current_sub_game() {
        Some(forced) => format!("{} to move in sub-game {}", state.player(), forced),
        None => format!("{} to move in any open sub-game", state.player()),
    }
}

/// The legal moves in `sub-game/cell` short form.
pub fn legal_moves(state: &GameState) -> String {
    let moves: Vec<String> = state
        .legal_moves()
        .iter()
        .map(|mv| format!("{}/{}", mv.sub_game.short_label(), mv.cell.short_label()))
        .collect();
    format!("Legal moves: {}", moves.join(" "))
}

/// Board, sub-game overview, turn line and optionally the legal moves.
pub fn screen(state: &GameState, config: &CliConfig) -> String {
    let mut out = format!(
        "{}\n\nSub-games:\n{}\n\n{}",
        board(state, config),
        overview(state, config),
        turn(state)
    );
    if *config.show_legal_moves() {
        out.push('\n');
        out.push_str(&legal_moves(state));
    }
    out
}

/// Headline for a move result.
pub fn outcome(result: &MoveResult) -> String {
    match result {
        MoveResult::GameWon(state, winner) => {
            match winning_line(state.sub_games_won_by(*winner)) {
                Some(line) => format!(
                    "{} wins the match ({}, {}, {})",
                    winner, line[0], line[1], line[2]
                ),
                None => format!("{} wins the match", winner),
            }
        }
        MoveResult::TieGame(_) => "The match is a tie".to_string(),
        MoveResult::State(state) => turn(state),
        MoveResult::InvalidMove(_) => "Invalid move".to_string(),
    }
}

/// The eight winning lines, one per row.
pub fn lines() -> String {
    WINNING_LINES
        .iter()
        .map(|line| {
            line.iter()
                .map(|pos| pos.label())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
