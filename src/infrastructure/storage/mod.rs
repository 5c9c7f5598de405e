//! Storage infrastructure - Key-value store implementations

mod factory;
mod file;
mod in_memory;

pub use factory::{StorageConfig, StorageFactory, StorageType, UnknownStorageTypeError};
pub use file::FileKeyValueStore;
pub use in_memory::InMemoryKeyValueStore;
