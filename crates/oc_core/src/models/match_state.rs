use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::event::{BallEvent, InningsNumber};
use super::innings::InningsAggregate;

pub const DEFAULT_TOTAL_OVERS: u32 = 20;

/// Which side won a decided match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Batting,
    Bowling,
}

/// The two innings of a match.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct InningsPair {
    pub first: InningsAggregate,
    pub second: InningsAggregate,
}

/// The complete scoring snapshot for one match.
///
/// Owned by the reducer: every transition constructs a new value, nothing
/// holds a mutable alias, and UI/persistence consumers receive clones.
/// `ball_history` is the single source of truth: the aggregates are a fold
/// over it and replaying that fold must reproduce them exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MatchState {
    #[serde(default)]
    pub current_inning: InningsNumber,
    #[serde(default)]
    pub innings: InningsPair,
    /// `None` until the first innings ends, then `first.runs + 1` for the
    /// rest of the match (short of an explicit rain revision).
    #[serde(default)]
    pub target: Option<u32>,
    #[serde(default)]
    pub ball_history: Vec<BallEvent>,
    #[serde(default)]
    pub is_match_over: bool,
    #[serde(default)]
    pub winner: Option<Winner>,
    #[serde(default = "default_total_overs")]
    pub total_overs: u32,
}

fn default_total_overs() -> u32 {
    DEFAULT_TOTAL_OVERS
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new(DEFAULT_TOTAL_OVERS)
    }
}

impl MatchState {
    pub fn new(total_overs: u32) -> Self {
        Self {
            current_inning: InningsNumber::First,
            innings: InningsPair::default(),
            target: None,
            ball_history: Vec::new(),
            is_match_over: false,
            winner: None,
            total_overs,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.ball_history.is_empty()
    }

    pub fn innings(&self, inning: InningsNumber) -> &InningsAggregate {
        match inning {
            InningsNumber::First => &self.innings.first,
            InningsNumber::Second => &self.innings.second,
        }
    }

    pub fn innings_mut(&mut self, inning: InningsNumber) -> &mut InningsAggregate {
        match inning {
            InningsNumber::First => &mut self.innings.first,
            InningsNumber::Second => &mut self.innings.second,
        }
    }

    pub fn current_innings(&self) -> &InningsAggregate {
        self.innings(self.current_inning)
    }

    /// Legal deliveries available to each side.
    pub fn balls_limit(&self) -> u32 {
        self.total_overs * 6
    }

    /// Runs the chasing side still needs; defined only once a target is set.
    pub fn runs_required(&self) -> Option<u32> {
        self.target.map(|t| t.saturating_sub(self.innings.second.runs))
    }

    /// Legal deliveries left in the chase.
    pub fn balls_remaining(&self) -> u32 {
        self.balls_limit().saturating_sub(self.innings.second.balls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::BallKind;

    #[test]
    fn test_initial_state() {
        let state = MatchState::default();
        assert_eq!(state.current_inning, InningsNumber::First);
        assert_eq!(state.total_overs, DEFAULT_TOTAL_OVERS);
        assert_eq!(state.target, None);
        assert!(!state.is_match_over);
        assert!(!state.can_undo());
        assert_eq!(state.innings.first.runs, 0);
    }

    #[test]
    fn test_missing_total_overs_defaults_to_twenty() {
        let json = serde_json::json!({
            "current_inning": 1,
            "innings": {"first": {"runs": 42, "balls": 30, "wickets": 2, "extras": {}},
                        "second": {"runs": 0, "balls": 0, "wickets": 0, "extras": {}}},
            "target": null,
            "ball_history": [],
            "is_match_over": false,
            "winner": null
        });
        let state: MatchState = serde_json::from_value(json).unwrap();
        assert_eq!(state.total_overs, 20);
        assert_eq!(state.innings.first.runs, 42);
    }

    #[test]
    fn test_chase_projections() {
        let mut state = MatchState::new(20);
        state.current_inning = InningsNumber::Second;
        state.target = Some(151);
        state.innings.second.runs = 100;
        state.innings.second.balls = 90;

        assert_eq!(state.runs_required(), Some(51));
        assert_eq!(state.balls_remaining(), 30);
        assert_eq!(state.balls_limit(), 120);
    }

    #[test]
    fn test_innings_addressing() {
        let mut state = MatchState::default();
        state
            .innings_mut(InningsNumber::Second)
            .apply(&BallEvent::new(BallKind::Run, 4, InningsNumber::Second));
        assert_eq!(state.innings(InningsNumber::Second).runs, 4);
        assert_eq!(state.innings(InningsNumber::First).runs, 0);
    }

    #[test]
    fn test_winner_wire_format() {
        assert_eq!(serde_json::to_value(Winner::Batting).unwrap(), "batting");
        assert_eq!(serde_json::to_value(Winner::Bowling).unwrap(), "bowling");
    }
}
