//! Engine configuration.
//!
//! Hosts configure the engine once at game start:
//! - `board_size`: side length of the square grid
//! - `fallback`: what the transition policy does when no rule matches
//!
//! The defaults reproduce the original game: a 20x20 grid, and a policy
//! that reports success without changing state when no rule applies.

use serde::{Deserialize, Serialize};

use super::error::ClaimError;

/// Largest supported board side length.
pub const MAX_BOARD_SIZE: u16 = 1024;

/// Board side length used when none is configured.
pub const DEFAULT_BOARD_SIZE: u16 = 20;

/// Outcome of a transition request that passes the forbidden-state check
/// but matches no upgrade rule.
///
/// In practice this is a claim requested on a cell the same player already
/// holds as plain territory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FallbackRule {
    /// Leave the cell unchanged and report success.
    ///
    /// Soft propagation therefore walks straight through a player's own
    /// territory.
    #[default]
    Retain,
    /// Treat the request as rejected.
    ///
    /// Soft propagation halts at a player's own territory.
    Reject,
}

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Side length of the square board (1..=MAX_BOARD_SIZE).
    pub board_size: u16,

    /// Behavior when no transition rule matches.
    pub fallback: FallbackRule,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            fallback: FallbackRule::default(),
        }
    }
}

impl EngineConfig {
    /// Create a config for an `n`x`n` board with default rules.
    #[must_use]
    pub fn new(board_size: u16) -> Self {
        Self {
            board_size,
            ..Self::default()
        }
    }

    /// Set the board size.
    #[must_use]
    pub fn with_board_size(mut self, size: u16) -> Self {
        self.board_size = size;
        self
    }

    /// Set the fallback rule.
    #[must_use]
    pub fn with_fallback(mut self, fallback: FallbackRule) -> Self {
        self.fallback = fallback;
        self
    }

    /// Check that the configuration describes a playable board.
    pub fn validate(&self) -> Result<(), ClaimError> {
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(ClaimError::InvalidBoardSize {
                size: self.board_size,
            });
        }
        Ok(())
    }
}
