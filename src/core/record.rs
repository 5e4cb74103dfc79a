//! Mark history records.
//!
//! Every accepted mark is recorded in order. The history is enough to
//! rebuild a session exactly, since the claim pipeline is deterministic.

use serde::{Deserialize, Serialize};

use super::coord::Coordinate;
use super::player::Player;

/// An accepted mark, in the order it was played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkRecord {
    /// The player who marked.
    pub player: Player,

    /// The marked cell.
    pub coord: Coordinate,

    /// Position in the session's history (0-based).
    pub sequence: usize,
}

impl MarkRecord {
    #[must_use]
    pub fn new(player: Player, coord: Coordinate, sequence: usize) -> Self {
        Self {
            player,
            coord,
            sequence,
        }
    }
}
