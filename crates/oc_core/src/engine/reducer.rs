//! The pure scoring reducer: `(MatchState, Action) -> MatchState`.
//!
//! Every transition constructs a new state value; the input is never mutated.
//! Undo is implemented by refolding the remaining ball history from scratch,
//! which makes "inverse doesn't match forward effect" bugs impossible by
//! construction; the history is short (a few hundred events per match), so
//! the O(n) rebuild is noise.

use crate::models::{BallEvent, BallKind, InningsNumber, MatchState, DEFAULT_TOTAL_OVERS};

use super::actions::Action;
use super::lifecycle;

/// Applies one action. Invalid sequencing (scoring while the match is over,
/// undo on an empty history, an 11th wicket, out-of-range run counts) is a
/// silent no-op: the unchanged state is returned.
pub fn transition(state: &MatchState, action: &Action) -> MatchState {
    match action {
        Action::Undo => undo(state),
        Action::NewMatch { total_overs } => new_match(*total_overs),
        Action::LoadState { state: loaded } => loaded.clone(),
        _ if state.is_match_over => state.clone(),
        Action::EndInnings => end_innings(state),
        Action::SetTotalOvers { total_overs } => set_total_overs(state, *total_overs),
        scoring => apply_delivery(state, scoring),
    }
}

/// Rebuilds a complete live state by folding `history` from the start.
///
/// The match is in the second innings iff any event is tagged with it; the
/// target is then `first.runs + 1`. `is_match_over`/`winner` are left
/// cleared; forward transitions re-derive them.
pub fn replay(history: &[BallEvent], total_overs: u32) -> MatchState {
    let mut state = MatchState::new(total_overs);
    for event in history {
        state.innings_mut(event.inning).apply(event);
    }
    if history.iter().any(|e| e.inning == InningsNumber::Second) {
        state.current_inning = InningsNumber::Second;
        state.target = Some(state.innings.first.runs + 1);
    }
    state.ball_history = history.to_vec();
    state
}

fn undo(state: &MatchState) -> MatchState {
    if state.ball_history.is_empty() {
        return state.clone();
    }
    let remaining = &state.ball_history[..state.ball_history.len() - 1];
    replay(remaining, state.total_overs)
}

fn new_match(total_overs: Option<u32>) -> MatchState {
    let overs = total_overs
        .filter(|o| (1..=50).contains(o))
        .unwrap_or(DEFAULT_TOTAL_OVERS);
    log::info!("new match: {} overs per side", overs);
    MatchState::new(overs)
}

fn end_innings(state: &MatchState) -> MatchState {
    if state.current_inning == InningsNumber::Second {
        return state.clone();
    }
    let mut next = state.clone();
    next.current_inning = InningsNumber::Second;
    next.target = Some(next.innings.first.runs + 1);
    log::info!(
        "first innings closed at {}/{} ({}), target {}",
        next.innings.first.runs,
        next.innings.first.wickets,
        next.innings.first.overs(),
        next.innings.first.runs + 1
    );
    next
}

fn set_total_overs(state: &MatchState, total_overs: u32) -> MatchState {
    if !(1..=50).contains(&total_overs) {
        return state.clone();
    }
    let mut next = state.clone();
    next.total_overs = total_overs;
    lifecycle::check_match_over(&mut next);
    next
}

fn apply_delivery(state: &MatchState, action: &Action) -> MatchState {
    let Some(event) = delivery_event(state, action) else {
        return state.clone();
    };
    let mut next = state.clone();
    next.innings_mut(event.inning).apply(&event);
    next.ball_history.push(event);
    lifecycle::check_match_over(&mut next);
    next
}

/// Builds the event a scoring action records, or `None` when the action is
/// invalid in the current state.
fn delivery_event(state: &MatchState, action: &Action) -> Option<BallEvent> {
    let innings = state.current_innings();
    let (kind, runs, run_out, striker, non_striker, bowler) = match action {
        Action::AddRun { runs, striker_id, non_striker_id, bowler_id } => {
            if !matches!(*runs, 0 | 1 | 2 | 3 | 4 | 6) {
                return None;
            }
            (BallKind::Run, *runs, None, striker_id, non_striker_id, bowler_id)
        }
        Action::AddWicket { runs, striker_id, non_striker_id, bowler_id } => {
            if *runs > 6 || innings.is_all_out() {
                return None;
            }
            (BallKind::Wicket, *runs, None, striker_id, non_striker_id, bowler_id)
        }
        Action::AddWide { striker_id, non_striker_id, bowler_id } => {
            (BallKind::Wide, 0, None, striker_id, non_striker_id, bowler_id)
        }
        Action::AddNoball { runs, is_run_out, striker_id, non_striker_id, bowler_id } => {
            if *runs > 6 || (*is_run_out && innings.is_all_out()) {
                return None;
            }
            (BallKind::Noball, *runs, Some(*is_run_out), striker_id, non_striker_id, bowler_id)
        }
        Action::AddBye { runs, striker_id, non_striker_id, bowler_id } => {
            if *runs > 6 {
                return None;
            }
            (BallKind::Bye, *runs, None, striker_id, non_striker_id, bowler_id)
        }
        Action::AddLegbye { runs, striker_id, non_striker_id, bowler_id } => {
            if *runs > 6 {
                return None;
            }
            (BallKind::Legbye, *runs, None, striker_id, non_striker_id, bowler_id)
        }
        _ => return None,
    };

    let mut event = BallEvent::new(kind, runs, state.current_inning);
    event.is_run_out = run_out;
    event.striker_id = striker.clone();
    event.non_striker_id = non_striker.clone();
    event.bowler_id = bowler.clone();
    Some(event)
}
