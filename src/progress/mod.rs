//! Durable learner progress: cumulative stats, name and block selection,
//! kept as one JSON blob in a pluggable key-value store.

pub mod store;
pub mod tracker;

pub use store::{DisabledStore, FileStore, KeyValueStore, MemoryStore, StorageError};
pub use tracker::{ProgressRecord, ProgressTracker, Stats, PROGRESS_KEY};
