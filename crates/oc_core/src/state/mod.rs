//! Global Match State Manager
//!
//! Thread-safe holder for the single authoritative `MatchState`. All
//! mutation funnels through [`dispatch`], which runs the pure reducer under
//! the write lock; no other component gets a mutable alias. Consumers
//! (UI, persistence) take read-only snapshots.

use once_cell::sync::Lazy;
use std::sync::{Arc, RwLock};

use crate::engine::{transition, Action};
use crate::models::MatchState;

/// Global match state singleton
pub static MATCH_STATE: Lazy<Arc<RwLock<MatchState>>> =
    Lazy::new(|| Arc::new(RwLock::new(MatchState::default())));

/// Get a read lock on the global match state
pub fn get_state() -> std::sync::RwLockReadGuard<'static, MatchState> {
    MATCH_STATE.read().expect("MATCH_STATE lock poisoned")
}

/// Clone the current state as a read-only snapshot
pub fn get_state_snapshot() -> MatchState {
    get_state().clone()
}

/// Apply one action through the reducer and return the resulting snapshot
pub fn dispatch(action: &Action) -> MatchState {
    let mut guard = MATCH_STATE.write().expect("MATCH_STATE lock poisoned");
    let next = transition(&guard, action);
    *guard = next.clone();
    next
}

/// Reset the global state to a fresh match
pub fn reset_state() {
    *MATCH_STATE.write().expect("MATCH_STATE lock poisoned") = MatchState::default();
}

/// Replace the entire global state (used when loading a snapshot)
pub fn set_state(new_state: MatchState) {
    *MATCH_STATE.write().expect("MATCH_STATE lock poisoned") = new_state;
}

/// Serializes tests that touch the global singleton.
#[cfg(test)]
pub(crate) fn test_guard() -> std::sync::MutexGuard<'static, ()> {
    static TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    TEST_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
