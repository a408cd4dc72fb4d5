//! Defensive validation of loaded snapshots.
//!
//! Two explicit steps instead of ad hoc defaulting: [`decode`] is the strict
//! schema decoder, [`repair`] is the recovery policy that fills per-field
//! defaults. [`restore`] chains them: decode, and when that fails fall back
//! to repair with a logged warning. Loading never fails: the worst outcome
//! is the initial state.

use serde_json::Value;
use thiserror::Error;

use crate::models::{
    BallEvent, Extras, InningsAggregate, InningsNumber, MatchState, Winner, DEFAULT_TOTAL_OVERS,
};

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("snapshot is not an object")]
    NotAnObject,

    #[error("snapshot decode failed: {0}")]
    Decode(String),
}

/// Strict decode against the snapshot schema. Missing optional fields take
/// their schema defaults; wrong-typed fields fail the whole decode.
pub fn decode(value: &Value) -> Result<MatchState, ValidationError> {
    if !value.is_object() {
        return Err(ValidationError::NotAnObject);
    }
    serde_json::from_value(value.clone()).map_err(|e| ValidationError::Decode(e.to_string()))
}

/// Never-failing load: strict decode first, per-field repair as the safety
/// net.
pub fn restore(value: &Value) -> MatchState {
    match decode(value) {
        Ok(state) => state,
        Err(err) => {
            log::warn!("snapshot rejected by strict decode ({}), repairing field by field", err);
            repair(value)
        }
    }
}

/// Field-by-field recovery. When the top-level shape is absent
/// (`current_inning` numeric, `innings` object, `ball_history` array) the
/// whole value is abandoned for the initial state; otherwise every field
/// falls back to its initial default independently, nested innings are
/// repaired on their own, and malformed history entries are dropped.
pub fn repair(value: &Value) -> MatchState {
    let Some(obj) = value.as_object() else {
        return MatchState::default();
    };

    let shape_ok = obj.get("current_inning").is_some_and(Value::is_number)
        && obj.get("innings").is_some_and(Value::is_object)
        && obj.get("ball_history").is_some_and(Value::is_array);
    if !shape_ok {
        log::warn!("snapshot missing its top-level shape, falling back to initial state");
        return MatchState::default();
    }

    let mut state = MatchState::default();

    state.current_inning = match obj["current_inning"].as_u64() {
        Some(2) => InningsNumber::Second,
        _ => InningsNumber::First,
    };

    let innings = obj["innings"].as_object();
    state.innings.first = repair_innings(innings.and_then(|i| i.get("first")));
    state.innings.second = repair_innings(innings.and_then(|i| i.get("second")));

    state.target = obj.get("target").and_then(Value::as_u64).map(|t| t as u32);

    let mut dropped = 0usize;
    for entry in obj["ball_history"].as_array().into_iter().flatten() {
        match serde_json::from_value::<BallEvent>(entry.clone()) {
            Ok(event) => state.ball_history.push(event),
            Err(_) => dropped += 1,
        }
    }
    if dropped > 0 {
        log::warn!("dropped {} malformed ball history entries during repair", dropped);
    }

    state.is_match_over = obj.get("is_match_over").and_then(Value::as_bool).unwrap_or(false);
    state.winner = obj
        .get("winner")
        .and_then(|w| serde_json::from_value::<Winner>(w.clone()).ok());
    state.total_overs = obj
        .get("total_overs")
        .and_then(Value::as_u64)
        .map(|o| o as u32)
        .filter(|o| (1..=50).contains(o))
        .unwrap_or(DEFAULT_TOTAL_OVERS);

    state
}

fn repair_innings(value: Option<&Value>) -> InningsAggregate {
    let Some(obj) = value.and_then(Value::as_object) else {
        return InningsAggregate::default();
    };

    let counter = |name: &str| obj.get(name).and_then(Value::as_u64).unwrap_or(0) as u32;

    let mut innings = InningsAggregate::default();
    innings.runs = counter("runs");
    innings.balls = counter("balls");
    innings.wickets = counter("wickets").min(10) as u8;
    innings.extras = repair_extras(obj.get("extras"));
    innings.striker_id = obj.get("striker_id").and_then(Value::as_str).map(str::to_owned);
    innings.non_striker_id =
        obj.get("non_striker_id").and_then(Value::as_str).map(str::to_owned);
    innings.bowler_id = obj.get("bowler_id").and_then(Value::as_str).map(str::to_owned);
    innings.batting = obj
        .get("batting")
        .and_then(|b| serde_json::from_value(b.clone()).ok())
        .unwrap_or_default();
    innings.bowling = obj
        .get("bowling")
        .and_then(|b| serde_json::from_value(b.clone()).ok())
        .unwrap_or_default();
    innings
}

fn repair_extras(value: Option<&Value>) -> Extras {
    let Some(obj) = value.and_then(Value::as_object) else {
        return Extras::default();
    };
    let counter = |name: &str| obj.get(name).and_then(Value::as_u64).unwrap_or(0) as u32;
    Extras {
        wides: counter("wides"),
        noballs: counter("noballs"),
        byes: counter("byes"),
        legbyes: counter("legbyes"),
    }
}
