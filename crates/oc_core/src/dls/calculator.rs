//! Rain-affected target revision in the Duckworth–Lewis–Stern style.
//!
//! Every entry point is a total function: overs clamp to the table range,
//! ten wickets down means no resources, and a degenerate zero-resource
//! divisor falls back to "no revision" rather than erroring. The par-score
//! formula is a straight resource ratio without G50 normalization, an
//! amateur approximation, not official DLS.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::table::RESOURCE_TABLE;

/// Result of a between-innings target revision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DlsTarget {
    pub par_score: u32,
    pub target: u32,
    pub resources_team1: f64,
    pub resources_team2: f64,
}

/// Result of a mid-innings revision after an interruption to the chase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DlsMidInnings {
    pub par_score_at_interruption: u32,
    pub revised_target: u32,
    pub resources_at_start: f64,
    pub resources_lost: f64,
}

/// Percentage of batting resources remaining with `overs_remaining` overs
/// left and `wickets_lost` wickets down.
///
/// Overs are clamped to [0, 50] and rounded to one decimal; non-integer
/// overs interpolate linearly between the neighbouring whole-over rows at
/// the same wickets index (the zero-overs row is 0).
pub fn resources_remaining(overs_remaining: f64, wickets_lost: u8) -> f64 {
    if wickets_lost >= 10 {
        return 0.0;
    }
    let overs = overs_remaining.clamp(0.0, 50.0);
    if overs <= 0.0 {
        return 0.0;
    }
    let overs = (overs * 10.0).round() / 10.0;

    let w = wickets_lost as usize;
    let lower = overs.floor() as usize;
    let upper = overs.ceil() as usize;
    let at = |whole_overs: usize| -> f64 {
        if whole_overs == 0 {
            0.0
        } else {
            RESOURCE_TABLE[whole_overs - 1][w]
        }
    };
    if lower == upper {
        return at(lower);
    }
    let fraction = overs - lower as f64;
    at(lower) + (at(upper) - at(lower)) * fraction
}

/// Revised target for team 2 when its allocation was cut before the chase
/// began.
///
/// Team 1 is taken to have used all of its resources if it was bowled out,
/// otherwise the resources a full side would have had for its overs. A zero
/// team-1 resource leaves the target unrevised at `team1_runs + 1`.
pub fn calculate_dls_target(
    team1_runs: u32,
    team1_overs: f64,
    team1_all_out: bool,
    team2_allocated_overs: f64,
    team2_overs_lost: f64,
) -> DlsTarget {
    let resources_team1 = if team1_all_out {
        100.0
    } else {
        resources_remaining(team1_overs, 0)
    };
    let resources_team2 = resources_remaining(team2_allocated_overs - team2_overs_lost, 0);

    if resources_team1 <= 0.0 {
        return DlsTarget {
            par_score: team1_runs,
            target: team1_runs + 1,
            resources_team1,
            resources_team2,
        };
    }

    let par_score = (team1_runs as f64 * resources_team2 / resources_team1).floor() as u32;
    DlsTarget {
        par_score,
        target: par_score + 1,
        resources_team1,
        resources_team2,
    }
}

/// Revised target when rain interrupts team 2 mid-chase.
///
/// The resources lost are the gap between what the chase had in hand at the
/// stoppage and what it has after the overs reduction; the par score scales
/// team 1's runs by the share of starting resources the chase actually gets.
pub fn calculate_dls_mid_innings(
    team1_runs: u32,
    total_overs: f64,
    overs_remaining_at_stoppage: f64,
    wickets_lost: u8,
    overs_lost: f64,
) -> DlsMidInnings {
    let resources_at_start = resources_remaining(total_overs, 0);
    let before = resources_remaining(overs_remaining_at_stoppage, wickets_lost);
    let after = resources_remaining(overs_remaining_at_stoppage - overs_lost, wickets_lost);
    let resources_lost = (before - after).max(0.0);

    let available = (resources_at_start - resources_lost).max(0.0);
    let par_score = (team1_runs as f64 * available / 100.0).floor() as u32;
    DlsMidInnings {
        par_score_at_interruption: par_score,
        revised_target: par_score + 1,
        resources_at_start,
        resources_lost,
    }
}
