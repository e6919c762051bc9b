//! Last Drive Game Engine
//!
//! Platform-agnostic rules for a single championship drive: the offense
//! calls plays against a running clock until it scores, runs out of time,
//! or turns the ball over on downs. This crate has no I/O; front ends feed
//! it play calls and render what comes back.

pub mod constants;
pub mod drive;
pub mod play;
pub mod result;
pub mod rng;
pub mod seed;
pub mod state;

// Re-export commonly used types
pub use drive::{DriveError, DriveSession, PlayOutcome, resolve_play};
pub use play::PlayCall;
pub use result::{DriveSummary, Ending};
pub use rng::{CountingRng, DrawCounts, OutcomeSource, SeededOutcomes};
pub use seed::{SeedError, entropy_seed, parse_seed};
pub use state::{DrivePhase, DriveState};
