use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::MatchState;

/// The action vocabulary consumed from the UI layer, the only API of the
/// scoring core. Serialized with a `type` tag, e.g.
/// `{"type": "ADD_RUN", "runs": 4}`.
///
/// The five delivery actions accept optional striker/non-striker/bowler
/// attribution; when present it is stamped onto the recorded event and folded
/// into the per-player tallies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    AddRun {
        runs: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        striker_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        non_striker_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bowler_id: Option<String>,
    },
    AddWicket {
        /// Runs completed before the dismissal.
        runs: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        striker_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        non_striker_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bowler_id: Option<String>,
    },
    AddWide {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        striker_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        non_striker_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bowler_id: Option<String>,
    },
    AddNoball {
        /// Runs scored off the bat; the one-run penalty is implicit.
        runs: u32,
        #[serde(default)]
        is_run_out: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        striker_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        non_striker_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bowler_id: Option<String>,
    },
    AddBye {
        runs: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        striker_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        non_striker_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bowler_id: Option<String>,
    },
    AddLegbye {
        runs: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        striker_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        non_striker_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bowler_id: Option<String>,
    },
    Undo,
    EndInnings,
    NewMatch {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        total_overs: Option<u32>,
    },
    SetTotalOvers {
        total_overs: u32,
    },
    LoadState {
        state: MatchState,
    },
}

impl Action {
    /// Unattributed delivery constructors for the common scoring path.
    pub fn run(runs: u32) -> Self {
        Action::AddRun { runs, striker_id: None, non_striker_id: None, bowler_id: None }
    }

    pub fn wicket(runs: u32) -> Self {
        Action::AddWicket { runs, striker_id: None, non_striker_id: None, bowler_id: None }
    }

    pub fn wide() -> Self {
        Action::AddWide { striker_id: None, non_striker_id: None, bowler_id: None }
    }

    pub fn noball(runs: u32, is_run_out: bool) -> Self {
        Action::AddNoball {
            runs,
            is_run_out,
            striker_id: None,
            non_striker_id: None,
            bowler_id: None,
        }
    }

    pub fn bye(runs: u32) -> Self {
        Action::AddBye { runs, striker_id: None, non_striker_id: None, bowler_id: None }
    }

    pub fn legbye(runs: u32) -> Self {
        Action::AddLegbye { runs, striker_id: None, non_striker_id: None, bowler_id: None }
    }

    /// Whether this action records a delivery (as opposed to lifecycle or
    /// administrative control).
    pub fn is_scoring(&self) -> bool {
        matches!(
            self,
            Action::AddRun { .. }
                | Action::AddWicket { .. }
                | Action::AddWide { .. }
                | Action::AddNoball { .. }
                | Action::AddBye { .. }
                | Action::AddLegbye { .. }
        )
    }
}
