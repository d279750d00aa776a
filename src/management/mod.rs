mod collector;
mod snapshot;

pub use collector::MAX_SONGS;
pub use collector::PAGE_LIMIT;
pub use collector::TopTracksCollector;
pub use snapshot::MemorySnapshotStore;
pub use snapshot::SnapshotStore;
pub use snapshot::SqliteSnapshotStore;
