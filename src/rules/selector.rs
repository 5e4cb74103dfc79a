//! Claim anchor selection.
//!
//! One detection pass can find several triples. The selector folds them
//! into a single anchor coordinate to drive propagation:
//!
//! 1. Tally every coordinate of every triple (both endpoints and the center):
//!    how many triples it appears in, and on which axes.
//! 2. Pick the coordinate with the highest count.
//! 3. Break ties by the number of distinct axes.
//! 4. Break remaining ties by the smallest coordinate (x, then y).
//!
//! The result also carries every coordinate seen in any triple, since the
//! final hard pass solidifies all of them, not just the anchor's line.

use std::cmp::Reverse;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::detector::Triple;
use crate::core::coord::{AxisSet, Coordinate};
use crate::core::player::Player;

/// Outcome of one detection pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionResult {
    /// Coordinate propagation starts from.
    pub anchor: Coordinate,
    /// Axes the anchor appeared on.
    pub axes: AxisSet,
    /// Player the claim is for.
    pub player: Player,
    /// Every coordinate that appeared in any triple of the pass.
    pub touched: FxHashSet<Coordinate>,
}

#[derive(Clone, Copy, Debug, Default)]
struct Tally {
    count: u32,
    axes: AxisSet,
}

/// Picks the anchor for a claim from a pass's triples.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClaimSelector;

impl ClaimSelector {
    /// Select the anchor. Returns `None` if there are no triples.
    #[must_use]
    pub fn select(triples: &[Triple], player: Player) -> Option<SelectionResult> {
        if triples.is_empty() {
            return None;
        }

        let mut tallies: FxHashMap<Coordinate, Tally> = FxHashMap::default();
        for triple in triples {
            for coord in triple.coordinates() {
                let tally = tallies.entry(coord).or_default();
                tally.count += 1;
                tally.axes.insert(triple.axis);
            }
        }

        let (&anchor, tally) = tallies
            .iter()
            .max_by_key(|&(coord, tally)| (tally.count, tally.axes.len(), Reverse(*coord)))?;

        Some(SelectionResult {
            anchor,
            axes: tally.axes,
            player,
            touched: tallies.keys().copied().collect(),
        })
    }
}
