//! The storage port and its implementations.
//!
//! The core never talks to a backend directly: it depends on the
//! [`SnapshotStore`] trait, so the engine is testable without a real
//! persistence layer. Loading can never fail: corrupt or missing data
//! degrades through field repair down to the initial state. Saving is
//! fire-and-forget: failures are logged, never propagated.

use std::fs::{remove_file, rename, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::error::SaveError;
use super::format::{
    decompress_and_deserialize, decompress_to_value, serialize_and_compress, MatchSnapshot,
};
use super::migration::migrate_snapshot;
use super::validate;
use crate::models::MatchState;

/// Durable load/save/clear of a match snapshot.
pub trait SnapshotStore: Send + Sync {
    /// Loads the last saved state; returns a structurally-defaulted state on
    /// missing or corrupt data. Must never fail.
    fn load(&self) -> MatchState;

    /// Persists a snapshot. Fire-and-forget: failures are logged, not
    /// surfaced.
    fn save(&self, state: &MatchState);

    /// Removes any saved snapshot.
    fn clear(&self);
}

/// File-backed store: MessagePack + LZ4 + SHA-256, written atomically.
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location under the working directory.
    pub fn default_path() -> PathBuf {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join("saves")
            .join("match_state.dat")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save_to_path(&self, snapshot: &MatchSnapshot) -> Result<(), SaveError> {
        // Ensure save directory exists
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = serialize_and_compress(snapshot)?;

        // Atomic save: write to temp file, then rename
        let temp_path = self.path.with_extension("tmp");

        {
            let mut file = File::create(&temp_path)?;
            file.write_all(&data)?;
            file.flush()?;

            // sync_all ensures data is written to disk (portable fsync)
            file.sync_all()?;
        }

        rename(&temp_path, &self.path)?;

        log::debug!("Saved {} bytes to {:?}", data.len(), self.path);
        Ok(())
    }

    fn load_from_path(&self) -> Result<Vec<u8>, SaveError> {
        if !self.path.exists() {
            return Err(SaveError::FileNotFound { path: self.path.display().to_string() });
        }
        Ok(std::fs::read(&self.path)?)
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self) -> MatchState {
        let bytes = match self.load_from_path() {
            Ok(bytes) => bytes,
            Err(SaveError::FileNotFound { path }) => {
                log::debug!("no snapshot at {}, starting fresh", path);
                return MatchState::default();
            }
            Err(err) => {
                log::warn!("snapshot unreadable ({}), starting fresh", err);
                return MatchState::default();
            }
        };
        restore_from_bytes(&bytes)
    }

    fn save(&self, state: &MatchState) {
        let snapshot = MatchSnapshot::new(state.clone());
        if let Err(err) = self.save_to_path(&snapshot) {
            log::error!("snapshot save failed: {}", err);
        }
    }

    fn clear(&self) {
        match remove_file(&self.path) {
            Ok(()) => log::info!("cleared snapshot at {:?}", self.path),
            Err(err) => log::debug!("nothing to clear at {:?} ({})", self.path, err),
        }
    }
}

/// In-memory store for tests and embedding; runs the same wire pipeline so
/// integrity behavior matches the file store.
#[derive(Default)]
pub struct MemorySnapshotStore {
    slot: Mutex<Option<Vec<u8>>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self) -> MatchState {
        match self.slot.lock().expect("snapshot slot poisoned").as_deref() {
            Some(bytes) => restore_from_bytes(bytes),
            None => MatchState::default(),
        }
    }

    fn save(&self, state: &MatchState) {
        let snapshot = MatchSnapshot::new(state.clone());
        match serialize_and_compress(&snapshot) {
            Ok(bytes) => *self.slot.lock().expect("snapshot slot poisoned") = Some(bytes),
            Err(err) => log::error!("snapshot save failed: {}", err),
        }
    }

    fn clear(&self) {
        *self.slot.lock().expect("snapshot slot poisoned") = None;
    }
}

/// Shared decode path: strict decode + migration first, field repair when
/// the strict path refuses, initial state when even the envelope is gone.
fn restore_from_bytes(bytes: &[u8]) -> MatchState {
    match decompress_and_deserialize(bytes).and_then(migrate_snapshot) {
        Ok(snapshot) => snapshot.state,
        Err(err) => {
            log::warn!("snapshot decode failed ({}), attempting field repair", err);
            match decompress_to_value(bytes) {
                Ok(value) => validate::restore(value.get("state").unwrap_or(&value)),
                Err(err) => {
                    log::warn!("snapshot beyond repair ({}), starting fresh", err);
                    MatchState::default()
                }
            }
        }
    }
}

/// Coordinates the storage port with the global match state.
pub struct SaveManager<S: SnapshotStore> {
    store: S,
}

impl<S: SnapshotStore> SaveManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Loads from the store and installs the result as the authoritative
    /// state.
    pub fn restore_into_state(&self) -> MatchState {
        let state = self.store.load();
        crate::state::set_state(state.clone());
        log::info!("match state restored ({} events)", state.ball_history.len());
        state
    }

    /// Persists the current authoritative state.
    pub fn persist_current(&self) {
        let state = crate::state::get_state_snapshot();
        self.store.save(&state);
    }

    pub fn clear(&self) {
        self.store.clear();
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{transition, Action};
    use tempfile::TempDir;

    fn scored_state() -> MatchState {
        [Action::run(4), Action::run(6), Action::wicket(0), Action::EndInnings, Action::run(2)]
            .iter()
            .fold(MatchState::default(), |s, a| transition(&s, a))
    }

    #[test]
    fn test_file_store_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSnapshotStore::new(temp_dir.path().join("match.dat"));

        let state = scored_state();
        store.save(&state);
        assert_eq!(store.load(), state);

        // Temp file from the atomic write must not linger
        assert!(!temp_dir.path().join("match.tmp").exists());
    }

    #[test]
    fn test_file_store_missing_file_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSnapshotStore::new(temp_dir.path().join("absent.dat"));
        assert_eq!(store.load(), MatchState::default());
    }

    #[test]
    fn test_file_store_corrupt_file_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("match.dat");
        std::fs::write(&path, b"definitely not a snapshot").unwrap();

        let store = FileSnapshotStore::new(path);
        assert_eq!(store.load(), MatchState::default());
    }

    #[test]
    fn test_file_store_clear() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSnapshotStore::new(temp_dir.path().join("match.dat"));

        store.save(&scored_state());
        assert!(store.path().exists());
        store.clear();
        assert!(!store.path().exists());
        assert_eq!(store.load(), MatchState::default());
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemorySnapshotStore::new();
        assert_eq!(store.load(), MatchState::default());

        let state = scored_state();
        store.save(&state);
        assert_eq!(store.load(), state);

        store.clear();
        assert_eq!(store.load(), MatchState::default());
    }

    #[test]
    fn test_save_manager_through_global_state() {
        let _guard = crate::state::test_guard();

        let store = MemorySnapshotStore::new();
        let manager = SaveManager::new(store);
        let state = scored_state();

        crate::state::set_state(state.clone());
        manager.persist_current();

        crate::state::reset_state();
        assert_eq!(crate::state::get_state_snapshot(), MatchState::default());

        let restored = manager.restore_into_state();
        assert_eq!(restored, state);
        assert_eq!(crate::state::get_state_snapshot(), restored);
    }
}
