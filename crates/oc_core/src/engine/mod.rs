//! The scoring engine: action vocabulary, pure reducer, undo-by-refold,
//! innings lifecycle and rate projections.

pub mod actions;
pub mod lifecycle;
pub mod rates;
pub mod reducer;

pub use actions::Action;
pub use lifecycle::{phase, MatchPhase};
pub use rates::{current_run_rate, format_rate, match_required_run_rate, required_run_rate};
pub use reducer::{replay, transition};
