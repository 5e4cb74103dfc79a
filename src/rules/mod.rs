//! Claim rules: the transition table and the detect → select → propagate
//! pipeline that turns three-in-a-row into territory.
//!
//! - `transition`: per-cell decision table (`TransitionPolicy`)
//! - `detector`: finds a player's triples (`TripleDetector`)
//! - `selector`: folds a pass's triples into one anchor (`ClaimSelector`)
//! - `propagator`: extends and solidifies the claim (`LineClaimPropagator`)
//!
//! Only the transition policy decides cell states; the other stages read
//! the board or route their writes through `Board::apply`.

pub mod transition;
pub mod detector;
pub mod selector;
pub mod propagator;

pub use transition::{Transition, TransitionPolicy};
pub use detector::{Triple, TripleDetector, Triples};
pub use selector::{ClaimSelector, SelectionResult};
pub use propagator::{LineClaimPropagator, PropagationReport};
