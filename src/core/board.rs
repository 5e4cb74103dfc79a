//! The board: a sparse map from coordinate to cell state.
//!
//! Cells with no entry are empty. Entries are only ever added or changed,
//! never removed, and every change goes through `Board::apply`, which asks
//! the `TransitionPolicy` first. There is no way to write a cell state
//! directly.
//!
//! Cells live in an `im::OrdMap`, so cloning a board for a renderer snapshot
//! is O(1) and iteration always runs in coordinate order.

use im::OrdMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::cell::{CellState, CellVisual, Request, Strength};
use super::coord::Coordinate;
use super::player::Player;
use crate::rules::transition::{Transition, TransitionPolicy};

/// Square game board of side `size`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: u16,
    cells: OrdMap<Coordinate, CellState>,
}

impl Board {
    /// Create an empty `size`x`size` board.
    #[must_use]
    pub fn new(size: u16) -> Self {
        Self {
            size,
            cells: OrdMap::new(),
        }
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> u16 {
        self.size
    }

    /// Whether `coord` lies on the board.
    #[must_use]
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.x < self.size && coord.y < self.size
    }

    /// State of a cell, `None` if empty.
    #[must_use]
    pub fn get(&self, coord: Coordinate) -> Option<CellState> {
        self.cells.get(&coord).copied()
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over non-empty cells in coordinate order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, CellState)> + '_ {
        self.cells.iter().map(|(&c, &s)| (c, s))
    }

    /// Coordinates whose state counts toward `player`'s triples.
    pub fn active_cells(&self, player: Player) -> impl Iterator<Item = Coordinate> + '_ {
        self.iter()
            .filter(move |(_, s)| s.is_active_for(player))
            .map(|(c, _)| c)
    }

    /// Whether the cell at `coord` is active for `player`.
    #[must_use]
    pub fn is_active(&self, coord: Coordinate, player: Player) -> bool {
        self.get(coord).is_some_and(|s| s.is_active_for(player))
    }

    /// Ask the policy to apply `request` to `coord`, and store the result.
    ///
    /// Off-board coordinates are always rejected.
    pub fn apply(
        &mut self,
        policy: &TransitionPolicy,
        coord: Coordinate,
        request: Request,
        strength: Strength,
    ) -> Transition {
        if !self.contains(coord) {
            trace!(%coord, size = self.size, "transition outside board");
            return Transition::Rejected;
        }

        let transition = policy.attempt(self.get(coord), request, strength);
        match transition {
            Transition::Created(state) | Transition::Upgraded(state) => {
                self.cells.insert(coord, state);
            }
            Transition::Retained(_) | Transition::Rejected => {}
        }
        transition
    }

    /// Cells held as territory (`Claimed` or `MarkedClaimed`) by `player`.
    #[must_use]
    pub fn territory(&self, player: Player) -> usize {
        self.cells.values().filter(|s| s.is_territory_of(player)).count()
    }

    /// Cells carrying a live mark (`Marked` or `MarkedClaimed`) of `player`.
    #[must_use]
    pub fn marks(&self, player: Player) -> usize {
        self.cells.values().filter(|s| s.is_active_for(player)).count()
    }

    /// Export a serializable, renderer-facing view of the board.
    #[must_use]
    pub fn view(&self) -> BoardView {
        BoardView {
            size: self.size,
            cells: self
                .iter()
                .map(|(coord, state)| CellEntry {
                    coord,
                    state,
                    visual: state.visual(),
                })
                .collect(),
        }
    }

    /// ASCII rendering, one row per line (y down, x across).
    ///
    /// Empty cells are `.`; see `CellState::glyph` for the rest.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity((self.size as usize + 1) * self.size as usize);
        for y in 0..self.size {
            if y > 0 {
                out.push('\n');
            }
            for x in 0..self.size {
                let glyph = self
                    .get(Coordinate::new(x, y))
                    .map_or('.', CellState::glyph);
                out.push(glyph);
            }
        }
        out
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// One non-empty cell in a `BoardView`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellEntry {
    pub coord: Coordinate,
    pub state: CellState,
    pub visual: CellVisual,
}

/// Read-only export of a board for renderers and hosts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub size: u16,
    /// Non-empty cells in coordinate order.
    pub cells: Vec<CellEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> TransitionPolicy {
        TransitionPolicy::default()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(5);
        assert_eq!(board.size(), 5);
        assert!(board.is_empty());
        assert_eq!(board.get(Coordinate::new(0, 0)), None);
    }

    #[test]
    fn test_contains() {
        let board = Board::new(3);
        assert!(board.contains(Coordinate::new(2, 2)));
        assert!(!board.contains(Coordinate::new(3, 0)));
        assert!(!board.contains(Coordinate::new(0, 3)));
    }

    #[test]
    fn test_apply_stores_accepted_state() {
        let mut board = Board::new(3);
        let c = Coordinate::new(1, 1);

        let t = board.apply(&policy(), c, Request::Mark(Player::One), Strength::Soft);
        assert_eq!(t, Transition::Created(CellState::Marked(Player::One)));
        assert_eq!(board.get(c), Some(CellState::Marked(Player::One)));

        let t = board.apply(&policy(), c, Request::Claim(Player::One), Strength::Hard);
        assert_eq!(t, Transition::Upgraded(CellState::Claimed(Player::One)));
        assert_eq!(board.get(c), Some(CellState::Claimed(Player::One)));
    }

    #[test]
    fn test_apply_rejected_leaves_cell() {
        let mut board = Board::new(3);
        let c = Coordinate::new(0, 2);
        board.apply(&policy(), c, Request::Mark(Player::One), Strength::Soft);

        let t = board.apply(&policy(), c, Request::Mark(Player::Two), Strength::Soft);
        assert!(t.is_rejected());
        assert_eq!(board.get(c), Some(CellState::Marked(Player::One)));
    }

    #[test]
    fn test_apply_off_board_rejected() {
        let mut board = Board::new(3);
        let t = board.apply(&policy(), Coordinate::new(3, 3), Request::Claim(Player::One), Strength::Hard);
        assert!(t.is_rejected());
        assert!(board.is_empty());
    }

    #[test]
    fn test_counts_and_active_cells() {
        let mut board = Board::new(4);
        let p = policy();
        board.apply(&p, Coordinate::new(0, 0), Request::Mark(Player::One), Strength::Soft);
        board.apply(&p, Coordinate::new(1, 0), Request::Claim(Player::One), Strength::Soft);
        board.apply(&p, Coordinate::new(1, 0), Request::Mark(Player::One), Strength::Soft);
        board.apply(&p, Coordinate::new(2, 0), Request::Claim(Player::Two), Strength::Soft);

        assert_eq!(board.marks(Player::One), 2);
        assert_eq!(board.territory(Player::One), 1);
        assert_eq!(board.territory(Player::Two), 1);
        assert_eq!(board.marks(Player::Two), 0);

        let active: Vec<_> = board.active_cells(Player::One).collect();
        assert_eq!(active, vec![Coordinate::new(0, 0), Coordinate::new(1, 0)]);
        assert!(board.is_active(Coordinate::new(1, 0), Player::One));
        assert!(!board.is_active(Coordinate::new(2, 0), Player::Two));
    }

    #[test]
    fn test_render() {
        let mut board = Board::new(3);
        let p = policy();
        board.apply(&p, Coordinate::new(0, 0), Request::Mark(Player::One), Strength::Soft);
        board.apply(&p, Coordinate::new(2, 1), Request::Claim(Player::Two), Strength::Soft);

        assert_eq!(board.render(), "x..\n..O\n...");
        assert_eq!(format!("{}", board), board.render());
    }

    #[test]
    fn test_clone_is_independent_snapshot() {
        let mut board = Board::new(3);
        let p = policy();
        board.apply(&p, Coordinate::new(0, 0), Request::Mark(Player::One), Strength::Soft);

        let snapshot = board.clone();
        board.apply(&p, Coordinate::new(1, 1), Request::Mark(Player::Two), Strength::Soft);

        assert_eq!(snapshot.len(), 1);
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_view_serialization() {
        let mut board = Board::new(3);
        board.apply(&policy(), Coordinate::new(1, 2), Request::Mark(Player::Two), Strength::Soft);

        let view = board.view();
        assert_eq!(view.cells.len(), 1);
        assert_eq!(view.cells[0].visual, CellVisual::FreshMark(Player::Two));

        let json = serde_json::to_string(&view).unwrap();
        let deserialized: BoardView = serde_json::from_str(&json).unwrap();
        assert_eq!(view, deserialized);
    }
}
