//! Core engine types: players, geometry, cell states, the board,
//! configuration, errors, history records, and RNG.
//!
//! Nothing in here knows about triples or claims; those live in `rules`.

pub mod player;
pub mod coord;
pub mod cell;
pub mod board;
pub mod config;
pub mod error;
pub mod record;
pub mod rng;

pub use player::Player;
pub use coord::{Axis, AxisSet, Coordinate, Direction};
pub use cell::{CellState, CellVisual, Request, Strength};
pub use board::{Board, BoardView, CellEntry};
pub use config::{EngineConfig, FallbackRule, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};
pub use error::ClaimError;
pub use record::MarkRecord;
pub use rng::PlayoutRng;
