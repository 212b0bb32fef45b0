//! Infrastructure layer - durable client-side storage

pub mod storage;

pub use storage::{FileStorage, KeyValueStore, MemoryStorage, NullStorage};

#[cfg(test)]
pub use storage::MockKeyValueStore;
