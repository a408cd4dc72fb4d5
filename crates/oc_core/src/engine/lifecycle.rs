//! Innings lifecycle: when does the chase end, and who won.
//!
//! The first innings only closes on an explicit `END_INNINGS`; there is no
//! automatic close on overs or wickets running out, the scorer stays in
//! control. The second innings is terminal-checked after every event.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::{InningsNumber, MatchState, Winner};

/// The lifecycle states, derived from the match snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    FirstInnings,
    SecondInnings,
    MatchOver,
}

impl MatchPhase {
    pub fn is_terminal(self) -> bool {
        self == MatchPhase::MatchOver
    }
}

pub fn phase(state: &MatchState) -> MatchPhase {
    if state.is_match_over {
        MatchPhase::MatchOver
    } else {
        match state.current_inning {
            InningsNumber::First => MatchPhase::FirstInnings,
            InningsNumber::Second => MatchPhase::SecondInnings,
        }
    }
}

/// Re-derives the terminal state. Called after every forward transition; undo
/// never calls it (undo always returns a live state and the next forward
/// event re-derives).
///
/// The chase ends when the target is reached (batting wins), or when it runs
/// out of wickets or balls: bowling wins when short of the tie score, and a
/// finish exactly one run short is a tie (match over, no winner).
pub(crate) fn check_match_over(state: &mut MatchState) {
    if state.current_inning != InningsNumber::Second {
        return;
    }
    let Some(target) = state.target else {
        return;
    };
    let chase = &state.innings.second;

    if chase.runs >= target {
        state.is_match_over = true;
        state.winner = Some(Winner::Batting);
        log::info!("chase complete: {}/{} in {}", chase.runs, chase.wickets, chase.overs());
        return;
    }

    if chase.is_all_out() || chase.balls >= state.balls_limit() {
        state.is_match_over = true;
        state.winner = if chase.runs + 1 == target {
            log::info!("scores level after {}: tie", chase.overs());
            None
        } else {
            log::info!(
                "chase falls short: {}/{} chasing {}",
                chase.runs,
                chase.wickets,
                target
            );
            Some(Winner::Bowling)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{transition, Action};

    fn chase_state(first_runs: u32, total_overs: u32) -> MatchState {
        let mut state = transition(
            &MatchState::new(total_overs),
            &Action::NewMatch { total_overs: Some(total_overs) },
        );
        // put the first innings total on the board in sixes and singles
        while state.innings.first.runs + 6 <= first_runs {
            state = transition(&state, &Action::run(6));
        }
        while state.innings.first.runs < first_runs {
            state = transition(&state, &Action::run(1));
        }
        transition(&state, &Action::EndInnings)
    }

    #[test]
    fn test_end_innings_sets_target() {
        // 150 on the board means a target of 151
        let state = chase_state(150, 20);
        assert_eq!(state.target, Some(151));
        assert_eq!(state.current_inning, InningsNumber::Second);
        assert_eq!(phase(&state), MatchPhase::SecondInnings);
    }

    #[test]
    fn test_target_reached_ends_match() {
        let mut state = chase_state(150, 20);
        while !state.is_match_over {
            state = transition(&state, &Action::run(6));
        }
        assert_eq!(state.winner, Some(Winner::Batting));
        assert!(state.innings.second.runs >= 151);
        assert_eq!(phase(&state), MatchPhase::MatchOver);
        assert!(phase(&state).is_terminal());
    }

    #[test]
    fn test_target_invariant_through_chase() {
        let mut state = chase_state(150, 20);
        for _ in 0..30 {
            state = transition(&state, &Action::run(1));
            assert_eq!(state.target, Some(151));
        }
    }

    #[test]
    fn test_all_out_short_of_target_is_bowling_win() {
        let mut state = chase_state(150, 20);
        for _ in 0..10 {
            state = transition(&state, &Action::wicket(0));
        }
        assert!(state.is_match_over);
        assert_eq!(state.winner, Some(Winner::Bowling));
    }

    #[test]
    fn test_overs_exhausted_short_of_target_is_bowling_win() {
        let mut state = chase_state(30, 1);
        for _ in 0..6 {
            state = transition(&state, &Action::run(1));
        }
        assert_eq!(state.innings.second.balls, 6);
        assert!(state.is_match_over);
        assert_eq!(state.winner, Some(Winner::Bowling));
    }

    #[test]
    fn test_scores_level_at_close_is_tie() {
        // 6 on the board, target 7; the chase makes exactly 6 from its over
        let mut state = chase_state(6, 1);
        for _ in 0..6 {
            state = transition(&state, &Action::run(1));
        }
        assert!(state.is_match_over);
        assert_eq!(state.winner, None);
    }

    #[test]
    fn test_first_innings_never_auto_closes() {
        let mut state = transition(
            &MatchState::default(),
            &Action::NewMatch { total_overs: Some(1) },
        );
        for _ in 0..8 {
            state = transition(&state, &Action::run(1));
        }
        // more balls than the allocation, still first innings and still live
        assert_eq!(state.innings.first.balls, 8);
        assert!(!state.is_match_over);
        assert_eq!(phase(&state), MatchPhase::FirstInnings);
    }

    #[test]
    fn test_wide_cannot_end_chase_on_balls() {
        // wides do not advance the ball count, so a wide on the last ball
        // leaves the chase alive
        let mut state = chase_state(30, 1);
        for _ in 0..5 {
            state = transition(&state, &Action::run(0));
        }
        state = transition(&state, &Action::wide());
        assert!(!state.is_match_over);
        assert_eq!(state.balls_remaining(), 1);
    }
}
