//! Cell state transition policy.
//!
//! Every change to a board cell is decided here. The policy is a pure
//! decision table: it looks at the cell's current state, the requested
//! state, and the claim strength, and answers with a `Transition`. It never
//! touches the board itself; `Board::apply` writes whatever it decides.
//!
//! ## Decision order
//!
//! 1. No record: the request creates one.
//! 2. The current state is in the request's forbidden set: rejected.
//! 3. The first matching upgrade rule:
//!    - own territory + mark: `MarkedClaimed`
//!    - own mark (or marked territory) + claim: `Claimed` if hard,
//!      `MarkedClaimed` if soft
//!    - opposing territory + claim: overwritten with `Claimed`
//! 4. Nothing matched: resolved by the configured `FallbackRule`.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::cell::{CellState, Request, Strength};
use crate::core::config::FallbackRule;

/// Outcome of a transition request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transition {
    /// The request was refused; the cell is unchanged.
    Rejected,
    /// The cell was empty and now holds this state.
    Created(CellState),
    /// An upgrade rule moved the cell to this state.
    Upgraded(CellState),
    /// No rule matched and the fallback kept the existing state.
    ///
    /// Counts as success: propagation continues past such a cell.
    Retained(CellState),
}

impl Transition {
    #[must_use]
    pub const fn is_rejected(self) -> bool {
        matches!(self, Transition::Rejected)
    }

    #[must_use]
    pub const fn is_accepted(self) -> bool {
        !self.is_rejected()
    }

    /// The cell's state after the transition, if it was accepted.
    #[must_use]
    pub const fn state(self) -> Option<CellState> {
        match self {
            Transition::Rejected => None,
            Transition::Created(s) | Transition::Upgraded(s) | Transition::Retained(s) => Some(s),
        }
    }
}

/// The transition decision table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionPolicy {
    fallback: FallbackRule,
}

impl TransitionPolicy {
    #[must_use]
    pub const fn new(fallback: FallbackRule) -> Self {
        Self { fallback }
    }

    #[must_use]
    pub const fn fallback(&self) -> FallbackRule {
        self.fallback
    }

    /// Decide what happens when `request` is applied to a cell.
    #[must_use]
    pub fn attempt(
        &self,
        current: Option<CellState>,
        request: Request,
        strength: Strength,
    ) -> Transition {
        let Some(current) = current else {
            return Transition::Created(request.initial_state());
        };

        let transition = if Self::is_forbidden(current, request) {
            Transition::Rejected
        } else if let Some(next) = Self::upgrade(current, request, strength) {
            Transition::Upgraded(next)
        } else {
            match self.fallback {
                FallbackRule::Retain => Transition::Retained(current),
                FallbackRule::Reject => Transition::Rejected,
            }
        };

        trace!(?current, ?request, ?strength, ?transition, "transition decided");
        transition
    }

    /// Whether `current` is in the forbidden set for `request`.
    ///
    /// A mark is only allowed on empty cells or the player's own plain
    /// territory. A claim is refused on any cell the opponent has marked.
    #[must_use]
    pub fn is_forbidden(current: CellState, request: Request) -> bool {
        match request {
            Request::Mark(player) => match current {
                CellState::Claimed(owner) => owner != player,
                CellState::Marked(_) | CellState::MarkedClaimed(_) => true,
            },
            Request::Claim(player) => matches!(
                current,
                CellState::Marked(owner) | CellState::MarkedClaimed(owner) if owner != player
            ),
        }
    }

    fn upgrade(current: CellState, request: Request, strength: Strength) -> Option<CellState> {
        match (current, request) {
            (CellState::Claimed(owner), Request::Mark(player)) if owner == player => {
                Some(CellState::MarkedClaimed(player))
            }
            (CellState::Marked(owner) | CellState::MarkedClaimed(owner), Request::Claim(player))
                if owner == player =>
            {
                Some(match strength {
                    Strength::Hard => CellState::Claimed(player),
                    Strength::Soft => CellState::MarkedClaimed(player),
                })
            }
            (CellState::Claimed(owner), Request::Claim(player)) if owner != player => {
                Some(CellState::Claimed(player))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;

    const P1: Player = Player::One;
    const P2: Player = Player::Two;

    fn retain() -> TransitionPolicy {
        TransitionPolicy::new(FallbackRule::Retain)
    }

    #[test]
    fn test_empty_cell_always_created() {
        let policy = retain();
        for request in [Request::Mark(P1), Request::Claim(P2)] {
            for strength in [Strength::Soft, Strength::Hard] {
                assert_eq!(
                    policy.attempt(None, request, strength),
                    Transition::Created(request.initial_state())
                );
            }
        }
    }

    #[test]
    fn test_mark_forbidden_set() {
        let policy = retain();
        for current in [
            CellState::Marked(P1),
            CellState::MarkedClaimed(P1),
            CellState::Marked(P2),
            CellState::Claimed(P2),
            CellState::MarkedClaimed(P2),
        ] {
            assert_eq!(
                policy.attempt(Some(current), Request::Mark(P1), Strength::Soft),
                Transition::Rejected,
                "mark on {current} should be rejected"
            );
        }
    }

    #[test]
    fn test_mark_own_territory_upgrades() {
        assert_eq!(
            retain().attempt(Some(CellState::Claimed(P2)), Request::Mark(P2), Strength::Soft),
            Transition::Upgraded(CellState::MarkedClaimed(P2))
        );
    }

    #[test]
    fn test_claim_forbidden_on_opposing_marks() {
        let policy = retain();
        for current in [CellState::Marked(P2), CellState::MarkedClaimed(P2)] {
            for strength in [Strength::Soft, Strength::Hard] {
                assert!(policy
                    .attempt(Some(current), Request::Claim(P1), strength)
                    .is_rejected());
            }
        }
    }

    #[test]
    fn test_claim_own_mark_soft_and_hard() {
        let policy = retain();
        for current in [CellState::Marked(P1), CellState::MarkedClaimed(P1)] {
            assert_eq!(
                policy.attempt(Some(current), Request::Claim(P1), Strength::Soft),
                Transition::Upgraded(CellState::MarkedClaimed(P1))
            );
            assert_eq!(
                policy.attempt(Some(current), Request::Claim(P1), Strength::Hard),
                Transition::Upgraded(CellState::Claimed(P1))
            );
        }
    }

    #[test]
    fn test_claim_overwrites_opposing_territory() {
        assert_eq!(
            retain().attempt(Some(CellState::Claimed(P2)), Request::Claim(P1), Strength::Soft),
            Transition::Upgraded(CellState::Claimed(P1))
        );
    }

    #[test]
    fn test_unmatched_request_retained() {
        let result = retain().attempt(Some(CellState::Claimed(P1)), Request::Claim(P1), Strength::Soft);
        assert_eq!(result, Transition::Retained(CellState::Claimed(P1)));
        assert!(result.is_accepted());
        assert_eq!(result.state(), Some(CellState::Claimed(P1)));
    }

    #[test]
    fn test_unmatched_request_rejected_under_reject_fallback() {
        let policy = TransitionPolicy::new(FallbackRule::Reject);
        assert_eq!(
            policy.attempt(Some(CellState::Claimed(P1)), Request::Claim(P1), Strength::Hard),
            Transition::Rejected
        );
        // Matched rules are unaffected by the fallback
        assert_eq!(
            policy.attempt(Some(CellState::Claimed(P2)), Request::Claim(P1), Strength::Hard),
            Transition::Upgraded(CellState::Claimed(P1))
        );
    }

    #[test]
    fn test_hard_claim_idempotent() {
        let policy = retain();
        for start in [
            None,
            Some(CellState::Marked(P1)),
            Some(CellState::Claimed(P1)),
            Some(CellState::MarkedClaimed(P1)),
            Some(CellState::Claimed(P2)),
        ] {
            let once = policy.attempt(start, Request::Claim(P1), Strength::Hard);
            let after_once = once.state().or(start);
            let twice = policy.attempt(after_once, Request::Claim(P1), Strength::Hard);
            assert_eq!(twice.state().or(after_once), after_once);
        }
    }

    #[test]
    fn test_is_forbidden_matches_attempt() {
        let states = [
            CellState::Marked(P1),
            CellState::Claimed(P1),
            CellState::MarkedClaimed(P1),
            CellState::Marked(P2),
            CellState::Claimed(P2),
            CellState::MarkedClaimed(P2),
        ];
        let policy = retain();
        for current in states {
            for request in [Request::Mark(P1), Request::Claim(P1), Request::Mark(P2), Request::Claim(P2)] {
                let forbidden = TransitionPolicy::is_forbidden(current, request);
                let rejected = policy.attempt(Some(current), request, Strength::Soft).is_rejected();
                assert_eq!(forbidden, rejected, "{current} / {request:?}");
            }
        }
    }
}
