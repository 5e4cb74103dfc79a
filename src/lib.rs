//! # grid-claim
//!
//! Board-claim engine for a two-player capture game played on a square grid.
//!
//! ## How a claim happens
//!
//! 1. A player marks a cell. The transition policy decides whether the mark
//!    is allowed.
//! 2. The player's marks are scanned for triples: three in a row along any
//!    of four axes.
//! 3. The triples are folded into one anchor coordinate (most appearances,
//!    then most axes, then lowest coordinate).
//! 4. The claim extends from the anchor along each winning axis until it
//!    hits the edge or an opposing mark, and every cell from every triple
//!    becomes permanent territory.
//!
//! ## Design Principles
//!
//! - **Single writer**: every cell change goes through `TransitionPolicy`
//!   via `Board::apply`. Nothing else writes cell states.
//! - **Deterministic**: the pipeline has no hidden state or randomness; a
//!   session's mark history replays to the same board.
//! - **Renderer-agnostic**: the engine sees coordinates and players, never
//!   pixels or transports. `CellState::visual` is the only render hint.
//!
//! ## Modules
//!
//! - `core`: players, coordinates, cell states, board, config, errors, RNG
//! - `rules`: transition policy, triple detection, selection, propagation
//! - `engine`: `GameOrchestrator`, the session entry point
//! - `playout`: seeded random games for testing and benchmarking
//!
//! ## Example
//!
//! ```
//! use grid_claim::{Coordinate, EngineConfig, GameOrchestrator, Player};
//!
//! let mut game = GameOrchestrator::new(EngineConfig::new(9)).unwrap();
//! for x in 2..=4 {
//!     assert!(game.mark(Coordinate::new(x, 2), Player::One));
//! }
//! // The whole open row is now player one's territory
//! assert_eq!(game.territory(Player::One), 9);
//! ```

pub mod core;
pub mod rules;
pub mod engine;
pub mod playout;

// Re-export commonly used types
pub use crate::core::{
    Player, Coordinate, Axis, AxisSet, Direction,
    CellState, CellVisual, Request, Strength,
    Board, BoardView, CellEntry,
    EngineConfig, FallbackRule, ClaimError, MarkRecord,
    PlayoutRng,
};

pub use crate::rules::{
    Transition, TransitionPolicy,
    Triple, Triples, TripleDetector,
    ClaimSelector, SelectionResult,
    LineClaimPropagator, PropagationReport,
};

pub use crate::engine::{GameOrchestrator, MarkOutcome};

pub use crate::playout::{RandomPlayout, PlayoutStats};
