//! Triple detection.
//!
//! A triple is three collinear cells, all active for one player, found from
//! the middle cell's point of view. Every active cell is tested on every
//! axis, so one cell can be the center of up to four triples in a pass.
//! A triple is only ever reported by its own center, so there is nothing to
//! deduplicate.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::board::Board;
use crate::core::coord::{Axis, Coordinate};
use crate::core::player::Player;

/// Triples found in one detection pass.
///
/// Most passes find zero to a handful, so they stay inline.
pub type Triples = SmallVec<[Triple; 4]>;

/// Three collinear same-player cells along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    pub axis: Axis,
    /// Neighbor on the negative side of `center`.
    pub endpoint_a: Coordinate,
    pub center: Coordinate,
    /// Neighbor on the positive side of `center`.
    pub endpoint_b: Coordinate,
}

impl Triple {
    /// All three coordinates, negative endpoint first.
    #[must_use]
    pub const fn coordinates(&self) -> [Coordinate; 3] {
        [self.endpoint_a, self.center, self.endpoint_b]
    }
}

/// Finds every triple a player currently has on the board.
#[derive(Clone, Copy, Debug, Default)]
pub struct TripleDetector;

impl TripleDetector {
    /// Scan `player`'s active cells for triples.
    ///
    /// Results are ordered by center coordinate, then by axis.
    #[must_use]
    pub fn detect(board: &Board, player: Player) -> Triples {
        let mut triples = Triples::new();

        for center in board.active_cells(player) {
            for axis in Axis::ALL {
                let Some((a, b)) = axis.neighbors(center) else {
                    continue;
                };
                if board.is_active(a, player) && board.is_active(b, player) {
                    triples.push(Triple {
                        axis,
                        endpoint_a: a,
                        center,
                        endpoint_b: b,
                    });
                }
            }
        }

        triples
    }
}
