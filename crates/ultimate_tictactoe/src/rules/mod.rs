//! Game rules for ultimate tic-tac-toe.
//!
//! This module contains pure functions for evaluating sub-game and match
//! status. The same status rule serves both levels; only what counts as
//! "claimed" and what counts as "a line" differs.

pub mod status;
pub mod win;

pub use status::evaluate_status;
pub use win::{match_status, match_won_by, sub_game_status, sub_game_won_by};
