//! # oc_core - Ball-by-Ball Cricket Scoring Engine
//!
//! This library provides a deterministic cricket scoring engine with a JSON
//! API for easy integration with UI layers.
//!
//! ## Features
//! - Pure reducer over an append-only ball history (replay = state)
//! - Exact undo for every event kind, innings transitions included
//! - Chase target derivation and DLS-style rain revision
//! - Never-failing snapshot load with field-by-field repair

// Struct initialization pattern used intentionally
#![allow(clippy::field_reassign_with_default)]
// Large enum variants - boxing would require API changes
#![allow(clippy::large_enum_variant)]

pub mod api;
pub mod dls;
pub mod engine;
pub mod error;
pub mod models;
pub mod save;
pub mod state;

// Re-export main API functions
pub use api::{
    dispatch_action_json, get_match_state_json, load_state_json, match_summary_json,
    new_match_json, score_action_json,
};
pub use error::{Result, ScoreError};

// Re-export the scoring engine
pub use engine::{
    current_run_rate, format_rate, match_required_run_rate, phase, replay, required_run_rate,
    transition, Action, MatchPhase,
};

// Re-export the data model
pub use models::{
    BallEvent, BallKind, Extras, InningsAggregate, InningsNumber, MatchState, Winner,
    DEFAULT_TOTAL_OVERS,
};

// Re-export the DLS calculator
pub use dls::{
    calculate_dls_mid_innings, calculate_dls_target, resources_remaining, DlsMidInnings, DlsTarget,
};

// Re-export the save system
pub use save::{
    FileSnapshotStore, MatchSnapshot, MemorySnapshotStore, SaveError, SaveManager, SnapshotStore,
    SNAPSHOT_VERSION,
};

// Re-export state management
pub use state::{dispatch, get_state, get_state_snapshot, reset_state, set_state, MATCH_STATE};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
