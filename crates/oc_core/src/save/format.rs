//! Snapshot wire format: MessagePack with named fields, LZ4-compressed,
//! SHA-256 checksum suffix for integrity.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use lz4_flex::{compress_prepend_size, decompress_size_prepended};
use rmp_serde::{from_slice, to_vec_named};
use sha2::{Digest, Sha256};

use super::error::SaveError;
use super::SNAPSHOT_VERSION;
use crate::models::{current_timestamp, MatchState};

/// Hard sanity bound on the persisted ball history; a real match stays in
/// the low hundreds of events.
const MAX_HISTORY_EVENTS: usize = 10_000;

/// Envelope written to storage: format version, write time, and the full
/// match snapshot.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
pub struct MatchSnapshot {
    /// Snapshot format version for migration.
    pub version: u32,

    /// Write timestamp (unix milliseconds).
    pub timestamp: u64,

    /// The complete match state.
    pub state: MatchState,
}

impl Default for MatchSnapshot {
    fn default() -> Self {
        Self::new(MatchState::default())
    }
}

impl MatchSnapshot {
    pub fn new(state: MatchState) -> Self {
        Self { version: SNAPSHOT_VERSION, timestamp: current_timestamp(), state }
    }

    pub fn update_timestamp(&mut self) {
        self.timestamp = current_timestamp();
    }

    pub fn validate(&self) -> Result<(), SaveError> {
        if self.state.ball_history.len() > MAX_HISTORY_EVENTS {
            return Err(SaveError::DataTooLarge { size: self.state.ball_history.len() });
        }

        if self.state.innings.first.wickets > 10 || self.state.innings.second.wickets > 10 {
            return Err(SaveError::Corrupted);
        }

        // Event ids are the dedup key; duplicates mean a corrupt history.
        let mut event_ids = std::collections::HashSet::new();
        for event in &self.state.ball_history {
            if !event_ids.insert(&event.id) {
                return Err(SaveError::Corrupted);
            }
        }

        Ok(())
    }
}

/// Serialize and compress a snapshot.
pub fn serialize_and_compress(snapshot: &MatchSnapshot) -> Result<Vec<u8>, SaveError> {
    // Validate before serialization
    snapshot.validate()?;

    // 1. Serialize to MessagePack with field names
    let msgpack = to_vec_named(snapshot).map_err(SaveError::Serialization)?;

    // 2. Compress with LZ4 (size prepended for easy decompression)
    let compressed = compress_prepend_size(&msgpack);

    // 3. Add SHA256 checksum at the end
    let mut hasher = Sha256::new();
    hasher.update(&compressed);
    let checksum = hasher.finalize();

    let mut result = compressed;
    result.extend_from_slice(&checksum);

    Ok(result)
}

/// Decompress and strictly deserialize a snapshot.
pub fn decompress_and_deserialize(bytes: &[u8]) -> Result<MatchSnapshot, SaveError> {
    let msgpack = verified_payload(bytes)?;

    let snapshot: MatchSnapshot = from_slice(&msgpack).map_err(SaveError::Deserialization)?;

    if snapshot.version > SNAPSHOT_VERSION {
        return Err(SaveError::VersionMismatch {
            found: snapshot.version,
            expected: SNAPSHOT_VERSION,
        });
    }

    Ok(snapshot)
}

/// Decompress to a generic value so a structurally damaged snapshot can
/// still go through the field-by-field repair path.
pub fn decompress_to_value(bytes: &[u8]) -> Result<serde_json::Value, SaveError> {
    let msgpack = verified_payload(bytes)?;
    from_slice(&msgpack).map_err(SaveError::Deserialization)
}

fn verified_payload(bytes: &[u8]) -> Result<Vec<u8>, SaveError> {
    // Check minimum size (compression header + checksum)
    if bytes.len() < 4 + 32 {
        return Err(SaveError::Corrupted);
    }

    let (payload, checksum_bytes) = bytes.split_at(bytes.len() - 32);

    let mut hasher = Sha256::new();
    hasher.update(payload);
    let calculated_checksum = hasher.finalize();

    if &calculated_checksum[..] != checksum_bytes {
        return Err(SaveError::ChecksumMismatch);
    }

    decompress_size_prepended(payload).map_err(|_| SaveError::Decompression)
}
