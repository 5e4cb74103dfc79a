//! Cell states and transition requests.
//!
//! A cell with no record is empty. Once a record exists it is one of:
//!
//! | State | Meaning |
//! |---|---|
//! | `Marked(p)` | a fresh per-move mark |
//! | `Claimed(p)` | durable territory |
//! | `MarkedClaimed(p)` | a mark and a claim for the same player on one cell |
//!
//! Callers never ask for `MarkedClaimed` directly: a `Request` is either a
//! mark or a claim, and the combined state is only reachable by upgrade.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// State of an occupied cell. Empty cells have no state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    Marked(Player),
    Claimed(Player),
    MarkedClaimed(Player),
}

impl CellState {
    /// The player this state belongs to.
    #[must_use]
    pub const fn owner(self) -> Player {
        match self {
            CellState::Marked(p) | CellState::Claimed(p) | CellState::MarkedClaimed(p) => p,
        }
    }

    /// Whether this cell counts toward `player`'s triples.
    ///
    /// Active states are `Marked` and `MarkedClaimed`; plain territory is not.
    #[must_use]
    pub fn is_active_for(self, player: Player) -> bool {
        matches!(self, CellState::Marked(p) | CellState::MarkedClaimed(p) if p == player)
    }

    /// Whether this cell is territory (`Claimed` or `MarkedClaimed`) of `player`.
    #[must_use]
    pub fn is_territory_of(self, player: Player) -> bool {
        matches!(self, CellState::Claimed(p) | CellState::MarkedClaimed(p) if p == player)
    }

    /// Visual category a renderer maps to its palette.
    #[must_use]
    pub const fn visual(self) -> CellVisual {
        match self {
            CellState::Marked(p) => CellVisual::FreshMark(p),
            CellState::Claimed(p) => CellVisual::Territory(p),
            CellState::MarkedClaimed(p) => CellVisual::MarkOnTerritory(p),
        }
    }

    /// Single-character glyph used by `Board::render`.
    ///
    /// Player one uses `x`/`X`/`#`, player two `o`/`O`/`@`.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            CellState::Marked(Player::One) => 'x',
            CellState::Marked(Player::Two) => 'o',
            CellState::Claimed(Player::One) => 'X',
            CellState::Claimed(Player::Two) => 'O',
            CellState::MarkedClaimed(Player::One) => '#',
            CellState::MarkedClaimed(Player::Two) => '@',
        }
    }
}

impl std::fmt::Display for CellState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellState::Marked(p) => write!(f, "Marked({})", p),
            CellState::Claimed(p) => write!(f, "Claimed({})", p),
            CellState::MarkedClaimed(p) => write!(f, "MarkedClaimed({})", p),
        }
    }
}

/// A state a caller may ask a cell to move to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Request {
    Mark(Player),
    Claim(Player),
}

impl Request {
    /// The requesting player.
    #[must_use]
    pub const fn player(self) -> Player {
        match self {
            Request::Mark(p) | Request::Claim(p) => p,
        }
    }

    /// State a fresh record takes when this request creates it.
    #[must_use]
    pub const fn initial_state(self) -> CellState {
        match self {
            Request::Mark(p) => CellState::Marked(p),
            Request::Claim(p) => CellState::Claimed(p),
        }
    }
}

/// How forcefully a claim is applied.
///
/// Soft claims come from line propagation; hard claims from the final
/// solidify pass. The difference only matters for a player's own marked
/// cells: hard turns them into plain territory, soft keeps the mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strength {
    Soft,
    Hard,
}

/// What a renderer should show for a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellVisual {
    /// Fresh mark.
    FreshMark(Player),
    /// Solid claimed territory.
    Territory(Player),
    /// Mark over previously claimed territory.
    MarkOnTerritory(Player),
}
