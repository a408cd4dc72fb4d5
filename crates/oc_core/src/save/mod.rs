// Snapshot persistence for the scoring core
// MessagePack + LZ4 compression with versioning, integrity checks, and a
// never-failing validation/repair path for whatever comes back out.

pub mod error;
pub mod format;
pub mod manager;
pub mod migration;
pub mod validate;

pub use error::SaveError;
pub use format::{
    decompress_and_deserialize, decompress_to_value, serialize_and_compress, MatchSnapshot,
};
pub use manager::{FileSnapshotStore, MemorySnapshotStore, SaveManager, SnapshotStore};
pub use migration::{migrate_snapshot, needs_migration};
pub use validate::{decode, repair, restore, ValidationError};

pub const SNAPSHOT_VERSION: u32 = 1;
