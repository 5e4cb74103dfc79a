//! Seeded random playouts.
//!
//! Drives a `GameOrchestrator` with uniformly random marks from a
//! deterministic RNG. Useful for exercising the engine's invariants over
//! long games and for benchmarking the claim pipeline.
//!
//! Players alternate on every accepted mark. That is the driver's choice;
//! the engine itself does not enforce turns.

mod random;

pub use random::{RandomPlayout, PlayoutStats};
