use super::error::SaveError;
use super::format::MatchSnapshot;
use super::SNAPSHOT_VERSION;

/// Migrate snapshot data from older versions to the current version.
pub fn migrate_snapshot(mut snapshot: MatchSnapshot) -> Result<MatchSnapshot, SaveError> {
    let original_version = snapshot.version;

    snapshot = match snapshot.version {
        0 => migrate_v0_to_v1(snapshot)?,
        1 => snapshot, // Current version, no migration needed
        v if v > SNAPSHOT_VERSION => {
            // Future version - might be compatible
            log::warn!(
                "Loading snapshot from future version {} (current: {})",
                v,
                SNAPSHOT_VERSION
            );
            snapshot
        }
        _ => {
            return Err(SaveError::VersionMismatch {
                found: snapshot.version,
                expected: SNAPSHOT_VERSION,
            });
        }
    };

    snapshot.version = SNAPSHOT_VERSION;
    snapshot.update_timestamp();

    if original_version != SNAPSHOT_VERSION {
        log::info!("Migrated snapshot from version {} to {}", original_version, SNAPSHOT_VERSION);
    }

    Ok(snapshot)
}

/// Migrate from version 0 to version 1.
///
/// v0 snapshots predate configurable match length and the terminal-state
/// fields, so the fixes are consistency repairs on those.
fn migrate_v0_to_v1(mut snapshot: MatchSnapshot) -> Result<MatchSnapshot, SaveError> {
    log::info!("Migrating snapshot from version 0 to 1");

    let state = &mut snapshot.state;

    // 1. Fill fields that didn't exist in v0
    if state.total_overs == 0 {
        state.total_overs = crate::models::DEFAULT_TOTAL_OVERS;
    }

    // 2. Fix data inconsistencies from v0
    state.innings.first.wickets = state.innings.first.wickets.min(10);
    state.innings.second.wickets = state.innings.second.wickets.min(10);

    // A match cannot be decided before a target exists
    if state.target.is_none() && (state.is_match_over || state.winner.is_some()) {
        log::warn!("v0 snapshot flagged over without a target, reopening");
        state.is_match_over = false;
        state.winner = None;
    }

    Ok(snapshot)
}

/// Check if a snapshot needs migration.
pub fn needs_migration(snapshot: &MatchSnapshot) -> bool {
    snapshot.version < SNAPSHOT_VERSION
}
