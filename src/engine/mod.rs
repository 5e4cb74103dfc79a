//! Session orchestration.
//!
//! `GameOrchestrator` owns the board for one game and is the only place
//! mark events enter the engine.

pub mod orchestrator;

pub use orchestrator::{GameOrchestrator, MarkOutcome};
