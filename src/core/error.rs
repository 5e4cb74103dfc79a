//! Engine error types.
//!
//! The claim pipeline itself never fails: a rejected mark is an ordinary
//! outcome. `ClaimError` exists for the detailed entry points (`place`,
//! `replay`, construction) that want to say *why* nothing happened.

use derive_more::{Display, Error};

use super::cell::CellState;
use super::config::MAX_BOARD_SIZE;
use super::coord::Coordinate;
use super::player::Player;

/// Why an engine operation had no effect.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum ClaimError {
    /// Board size is zero or larger than the engine supports.
    #[display("board size {size} is out of range (1..={})", MAX_BOARD_SIZE)]
    InvalidBoardSize { size: u16 },

    /// Coordinate lies outside the board.
    #[display("{coord} is outside the {size}x{size} board")]
    OutOfBounds { coord: Coordinate, size: u16 },

    /// The transition policy refused the mark.
    #[display("{player} cannot mark {coord}: cell is {current}")]
    Rejected {
        coord: Coordinate,
        player: Player,
        current: CellState,
    },
}
