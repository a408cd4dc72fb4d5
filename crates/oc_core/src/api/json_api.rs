//! JSON API for embedding the scoring core behind a UI layer.
//!
//! Two flavors: stateless endpoints take the full state in the request and
//! return the successor (the caller owns the value), stateful endpoints
//! drive the global singleton in `crate::state`. Every request carries a
//! `schema_version` that must match [`crate::SCHEMA_VERSION`].

use serde::{Deserialize, Serialize};

use crate::engine::{self, lifecycle, rates, Action};
use crate::error::{Result, ScoreError};
use crate::models::{MatchState, Winner};
use crate::SCHEMA_VERSION;

#[derive(Debug, Deserialize)]
pub struct ActionRequest {
    pub schema_version: u8,
    pub state: MatchState,
    pub action: Action,
}

#[derive(Debug, Deserialize)]
pub struct DispatchRequest {
    pub schema_version: u8,
    pub action: Action,
}

#[derive(Debug, Deserialize)]
pub struct NewMatchRequest {
    pub schema_version: u8,
    #[serde(default)]
    pub total_overs: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct LoadStateRequest {
    pub schema_version: u8,
    /// Arbitrary persisted blob; it goes through the validation/repair path
    /// rather than a strict decode.
    pub state: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    pub schema_version: u8,
    pub state: MatchState,
}

#[derive(Debug, Serialize)]
pub struct StateResponse {
    pub schema_version: u8,
    pub state: MatchState,
}

/// Display-ready scoreboard projection.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub schema_version: u8,
    pub phase: lifecycle::MatchPhase,
    pub inning: u8,
    /// "runs/wickets", e.g. "147/3".
    pub score: String,
    /// Overs bowled in "completed.balls" notation.
    pub overs: String,
    pub extras: u32,
    pub current_run_rate: String,
    /// Only once a target exists; "∞" when the balls have run out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_run_rate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runs_required: Option<u32>,
    pub balls_remaining: u32,
    pub is_match_over: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<Winner>,
    pub can_undo: bool,
}

fn check_schema_version(found: u8) -> Result<()> {
    if found != SCHEMA_VERSION {
        return Err(ScoreError::InvalidParameter(format!(
            "schema_version must be {}, got {}",
            SCHEMA_VERSION, found
        )));
    }
    Ok(())
}

fn state_response(state: MatchState) -> Result<String> {
    Ok(serde_json::to_string(&StateResponse { schema_version: SCHEMA_VERSION, state })?)
}

/// Stateless: apply one action to the state in the request.
pub fn score_action_json(request: &str) -> Result<String> {
    let request: ActionRequest = serde_json::from_str(request)?;
    check_schema_version(request.schema_version)?;

    let next = engine::transition(&request.state, &request.action);
    state_response(next)
}

/// Stateless: a zeroed state for a fresh match.
pub fn new_match_json(request: &str) -> Result<String> {
    let request: NewMatchRequest = serde_json::from_str(request)?;
    check_schema_version(request.schema_version)?;

    let state = engine::transition(
        &MatchState::default(),
        &Action::NewMatch { total_overs: request.total_overs },
    );
    state_response(state)
}

/// Stateful: apply one action to the global match state.
pub fn dispatch_action_json(request: &str) -> Result<String> {
    let request: DispatchRequest = serde_json::from_str(request)?;
    check_schema_version(request.schema_version)?;

    state_response(crate::state::dispatch(&request.action))
}

/// Stateful: the current global match state.
pub fn get_match_state_json() -> Result<String> {
    state_response(crate::state::get_state_snapshot())
}

/// Stateful: install a persisted blob as the global state after running it
/// through validation/repair. Never rejects the blob itself.
pub fn load_state_json(request: &str) -> Result<String> {
    let request: LoadStateRequest = serde_json::from_str(request)?;
    check_schema_version(request.schema_version)?;

    let state = crate::save::restore(&request.state);
    crate::state::set_state(state.clone());
    state_response(state)
}

/// Stateless: the display projection of a state.
pub fn match_summary_json(request: &str) -> Result<String> {
    let request: SummaryRequest = serde_json::from_str(request)?;
    check_schema_version(request.schema_version)?;

    Ok(serde_json::to_string(&summarize(&request.state))?)
}

fn summarize(state: &MatchState) -> SummaryResponse {
    let innings = state.current_innings();
    SummaryResponse {
        schema_version: SCHEMA_VERSION,
        phase: lifecycle::phase(state),
        inning: state.current_inning.into(),
        score: format!("{}/{}", innings.runs, innings.wickets),
        overs: innings.overs(),
        extras: innings.extras.total(),
        current_run_rate: rates::format_rate(rates::current_run_rate(
            innings.runs,
            innings.balls,
        )),
        required_run_rate: rates::match_required_run_rate(state).map(rates::format_rate),
        target: state.target,
        runs_required: state.runs_required(),
        balls_remaining: state.balls_remaining(),
        is_match_over: state.is_match_over,
        winner: state.winner,
        can_undo: state.can_undo(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_score_action_json() {
        let request = json!({
            "schema_version": 1,
            "state": MatchState::default(),
            "action": {"type": "ADD_RUN", "runs": 4}
        });

        let response = score_action_json(&request.to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();

        assert_eq!(parsed["schema_version"], 1);
        assert_eq!(parsed["state"]["innings"]["first"]["runs"], 4);
        assert_eq!(parsed["state"]["innings"]["first"]["balls"], 1);
    }

    #[test]
    fn test_schema_version_mismatch_is_an_error() {
        let request = json!({
            "schema_version": 9,
            "state": MatchState::default(),
            "action": {"type": "ADD_WIDE"}
        });

        let err = score_action_json(&request.to_string()).unwrap_err();
        assert!(matches!(err, ScoreError::InvalidParameter(_)));
    }

    #[test]
    fn test_malformed_request_is_an_error() {
        assert!(matches!(
            score_action_json("{\"schema_version\": 1}"),
            Err(ScoreError::DeserializationError(_))
        ));
    }

    #[test]
    fn test_new_match_json() {
        let response =
            new_match_json(&json!({"schema_version": 1, "total_overs": 50}).to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert_eq!(parsed["state"]["total_overs"], 50);
        assert_eq!(parsed["state"]["current_inning"], 1);
    }

    #[test]
    fn test_dispatch_and_get_roundtrip() {
        let _guard = crate::state::test_guard();
        crate::state::reset_state();

        let response = dispatch_action_json(
            &json!({"schema_version": 1, "action": {"type": "ADD_RUN", "runs": 6}}).to_string(),
        )
        .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert_eq!(parsed["state"]["innings"]["first"]["runs"], 6);

        let current: serde_json::Value =
            serde_json::from_str(&get_match_state_json().unwrap()).unwrap();
        assert_eq!(current["state"], parsed["state"]);

        crate::state::reset_state();
    }

    #[test]
    fn test_load_state_json_repairs_blob() {
        let _guard = crate::state::test_guard();
        crate::state::reset_state();

        let response = load_state_json(
            &json!({
                "schema_version": 1,
                "state": {
                    "current_inning": 1,
                    "innings": {
                        "first": {"runs": 33, "balls": 24, "wickets": 1, "extras": {}},
                        "second": {}
                    },
                    "ball_history": [],
                    "total_overs": "broken"
                }
            })
            .to_string(),
        )
        .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert_eq!(parsed["state"]["innings"]["first"]["runs"], 33);
        assert_eq!(parsed["state"]["total_overs"], 20);

        crate::state::reset_state();
    }

    #[test]
    fn test_summary_rendering() {
        let state: MatchState = serde_json::from_value(json!({
            "current_inning": 2,
            "innings": {
                "first": {"runs": 150, "balls": 120, "wickets": 6, "extras": {}},
                "second": {"runs": 100, "balls": 120, "wickets": 4,
                            "extras": {"wides": 3, "noballs": 0, "byes": 1, "legbyes": 0}}
            },
            "target": 151,
            "ball_history": [],
            "is_match_over": false,
            "winner": null,
            "total_overs": 20
        }))
        .unwrap();

        let response =
            match_summary_json(&json!({"schema_version": 1, "state": state}).to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();

        assert_eq!(parsed["phase"], "second_innings");
        assert_eq!(parsed["score"], "100/4");
        assert_eq!(parsed["overs"], "20.0");
        assert_eq!(parsed["current_run_rate"], "5.00");
        // balls exhausted: the required rate renders as the infinity glyph
        assert_eq!(parsed["required_run_rate"], "∞");
        assert_eq!(parsed["runs_required"], 51);
        assert_eq!(parsed["balls_remaining"], 0);
    }
}
