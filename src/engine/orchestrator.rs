//! Game orchestrator: the engine's single entry point.
//!
//! The orchestrator owns the board and the mark history. A mark event goes
//! through the transition policy first; only if it is accepted does the
//! claim pipeline run for the marking player:
//!
//! ```text
//! mark → policy → TripleDetector → ClaimSelector → LineClaimPropagator
//! ```
//!
//! Each call runs to completion before the next is accepted. Turn order is
//! not enforced: either player may mark at any time.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::core::board::{Board, BoardView};
use crate::core::cell::{Request, Strength};
use crate::core::config::EngineConfig;
use crate::core::coord::Coordinate;
use crate::core::error::ClaimError;
use crate::core::player::Player;
use crate::core::record::MarkRecord;
use crate::rules::{
    ClaimSelector, LineClaimPropagator, PropagationReport, SelectionResult, Transition,
    TransitionPolicy, TripleDetector,
};

/// Everything an accepted mark caused.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkOutcome {
    /// History entry for the mark.
    pub record: MarkRecord,
    /// How the policy placed the mark.
    pub transition: Transition,
    /// Number of triples the detection pass found.
    pub triples: usize,
    /// The claim resolved by this mark, if any.
    pub selection: Option<SelectionResult>,
    /// What propagation did, if a claim was resolved.
    pub propagation: Option<PropagationReport>,
}

impl MarkOutcome {
    /// Whether this mark resolved a claim.
    #[must_use]
    pub fn claimed(&self) -> bool {
        self.selection.is_some()
    }
}

/// Owns a game session's board and drives the claim pipeline.
#[derive(Clone, Debug)]
pub struct GameOrchestrator {
    config: EngineConfig,
    policy: TransitionPolicy,
    board: Board,
    history: Vector<MarkRecord>,
}

impl GameOrchestrator {
    /// Start a session with an empty board.
    pub fn new(config: EngineConfig) -> Result<Self, ClaimError> {
        config.validate()?;
        Ok(Self {
            policy: TransitionPolicy::new(config.fallback),
            board: Board::new(config.board_size),
            history: Vector::new(),
            config,
        })
    }

    /// Rebuild a session by replaying recorded marks in order.
    ///
    /// Fails on the first record the engine would not accept.
    #[instrument(level = "debug", skip(records))]
    pub fn replay(
        config: EngineConfig,
        records: impl IntoIterator<Item = MarkRecord>,
    ) -> Result<Self, ClaimError> {
        let mut game = Self::new(config)?;
        for record in records {
            game.place(record.coord, record.player)?;
        }
        Ok(game)
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Independent copy of the current board. O(1).
    #[must_use]
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    /// Serializable renderer view of the current board.
    #[must_use]
    pub fn view(&self) -> BoardView {
        self.board.view()
    }

    /// Accepted marks, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MarkRecord> {
        &self.history
    }

    /// Cells held as territory by `player`.
    #[must_use]
    pub fn territory(&self, player: Player) -> usize {
        self.board.territory(player)
    }

    /// Mark a cell for `player`.
    ///
    /// Returns `false` if the mark was refused (or off the board), in which
    /// case nothing changed. Use `place` to learn why or what happened.
    pub fn mark(&mut self, coord: Coordinate, player: Player) -> bool {
        self.place(coord, player).is_ok()
    }

    /// Mark a cell for `player` and run the claim pipeline.
    #[instrument(level = "debug", skip(self), fields(%coord, %player))]
    pub fn place(&mut self, coord: Coordinate, player: Player) -> Result<MarkOutcome, ClaimError> {
        let size = self.board.size();
        if !self.board.contains(coord) {
            return Err(ClaimError::OutOfBounds { coord, size });
        }

        let current = self.board.get(coord);
        let transition = self
            .board
            .apply(&self.policy, coord, Request::Mark(player), Strength::Soft);
        // An empty cell always takes the mark, so only occupied cells reject
        if let (Transition::Rejected, Some(current)) = (transition, current) {
            debug!(%current, "mark rejected");
            return Err(ClaimError::Rejected {
                coord,
                player,
                current,
            });
        }

        let record = MarkRecord::new(player, coord, self.history.len());
        self.history.push_back(record);

        let triples = TripleDetector::detect(&self.board, player);
        let selection = ClaimSelector::select(&triples, player);
        let propagation = selection.as_ref().map(|selection| {
            let report = LineClaimPropagator::new(self.policy).propagate(&mut self.board, selection);
            debug!(
                anchor = %selection.anchor,
                axes = selection.axes.len(),
                touched = selection.touched.len(),
                soft_steps = report.soft_steps,
                solidified = report.solidified,
                "claim resolved"
            );
            report
        });

        debug!(?transition, triples = triples.len(), "mark accepted");

        Ok(MarkOutcome {
            record,
            transition,
            triples: triples.len(),
            selection,
            propagation,
        })
    }
}
