//! Run-rate projections. Pure, never persisted.
//!
//! Degenerate inputs resolve to sentinels rather than errors: no balls bowled
//! gives a rate of 0, no balls remaining gives an infinite required rate.
//! Callers must render the infinity distinctly (see [`format_rate`]).

use crate::models::MatchState;

/// Runs per over so far: `runs / (balls / 6)`.
pub fn current_run_rate(runs: u32, balls: u32) -> f64 {
    if balls == 0 {
        0.0
    } else {
        runs as f64 * 6.0 / balls as f64
    }
}

/// Runs per over still needed: `runs_required / (balls_remaining / 6)`.
pub fn required_run_rate(runs_required: u32, balls_remaining: u32) -> f64 {
    if balls_remaining == 0 {
        f64::INFINITY
    } else {
        runs_required as f64 * 6.0 / balls_remaining as f64
    }
}

/// The chase's required rate, defined only once a target exists.
pub fn match_required_run_rate(state: &MatchState) -> Option<f64> {
    state
        .runs_required()
        .map(|needed| required_run_rate(needed, state.balls_remaining()))
}

/// Two-decimal rendering with "∞" for the exhausted-balls sentinel.
pub fn format_rate(rate: f64) -> String {
    if rate.is_infinite() {
        "∞".to_string()
    } else {
        format!("{:.2}", rate)
    }
}
