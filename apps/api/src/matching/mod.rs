// Candidate ↔ job matching engine.
// Implements: skill matching, gap analysis, nine-factor scoring, geo distance,
// quality bands, career advice and ranking. No I/O below `handlers`.
// CPU-bound ranking runs inside tokio::task::spawn_blocking.

pub mod advice;
pub mod factors;
pub mod gaps;
pub mod geo;
pub mod handlers;
pub mod quality;
pub mod ranker;
pub mod scoring;
pub mod skills;
pub mod weights;

// Re-export the public API consumed by other modules (state, main).
pub use scoring::{MatchEngine, MatchScorer};
