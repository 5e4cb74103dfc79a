//! Line claim propagation.
//!
//! Given a selection, the propagator:
//!
//! 1. For each winning axis, walks outward from the anchor one cell at a
//!    time, negative direction first, soft-claiming each cell. A direction
//!    stops at the board edge or at the first cell whose state rejects the
//!    claim.
//! 2. Hard-claims every coordinate touched by any triple in the pass, whether
//!    or not the walk reached it.
//!
//! The anchor itself is not part of any walk; it is always in the touched
//! set, so the hard pass covers it.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::selector::SelectionResult;
use super::transition::TransitionPolicy;
use crate::core::board::Board;
use crate::core::cell::{Request, Strength};
use crate::core::coord::Direction;

/// What one propagation did to the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropagationReport {
    /// Cells accepted by the soft walk.
    pub soft_steps: usize,
    /// Walk directions stopped by a rejecting cell rather than the edge.
    pub blocked: usize,
    /// Touched cells accepted by the hard pass.
    pub solidified: usize,
}

/// Extends a claim from an anchor and solidifies a pass's triples.
#[derive(Clone, Copy, Debug, Default)]
pub struct LineClaimPropagator {
    policy: TransitionPolicy,
}

impl LineClaimPropagator {
    #[must_use]
    pub const fn new(policy: TransitionPolicy) -> Self {
        Self { policy }
    }

    /// Apply `result` to the board.
    pub fn propagate(&self, board: &mut Board, result: &SelectionResult) -> PropagationReport {
        let request = Request::Claim(result.player);
        let mut report = PropagationReport::default();

        for axis in result.axes.iter() {
            for direction in Direction::BOTH {
                let mut cursor = result.anchor;
                while let Some(next) = cursor.step(axis, direction) {
                    if !board.contains(next) {
                        break;
                    }
                    let transition = board.apply(&self.policy, next, request, Strength::Soft);
                    trace!(%next, ?axis, ?direction, ?transition, "soft claim step");
                    if transition.is_rejected() {
                        report.blocked += 1;
                        break;
                    }
                    report.soft_steps += 1;
                    cursor = next;
                }
            }
        }

        for &coord in &result.touched {
            if board
                .apply(&self.policy, coord, request, Strength::Hard)
                .is_accepted()
            {
                report.solidified += 1;
            }
        }

        report
    }
}
