//! Storage factory for runtime storage selection

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;
use tracing::warn;

use crate::domain::storage::KeyValueStore;

use super::file::FileKeyValueStore;
use super::in_memory::InMemoryKeyValueStore;

/// Raised when a backend name matches no storage type
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown storage backend: '{0}'")]
pub struct UnknownStorageTypeError(pub String);

/// Supported storage types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageType {
    /// In-memory storage (for testing/development)
    InMemory,
    /// One file per key under a directory
    File,
}

impl FromStr for StorageType {
    type Err = UnknownStorageTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Ok(Self::InMemory),
            "file" | "fs" | "disk" => Ok(Self::File),
            _ => Err(UnknownStorageTypeError(s.to_string())),
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    /// In-memory storage configuration
    InMemory,
    /// File storage rooted at a directory
    File { dir: PathBuf },
}

impl StorageConfig {
    /// Creates an in-memory storage configuration
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Creates a file storage configuration
    pub fn file(dir: impl Into<PathBuf>) -> Self {
        Self::File { dir: dir.into() }
    }

    /// Builds a configuration from a backend name, falling back to file storage
    pub fn from_backend(backend: &str, path: impl Into<PathBuf>) -> Self {
        let storage_type = backend.parse::<StorageType>().unwrap_or_else(|e| {
            warn!(error = %e, "Falling back to file storage");
            StorageType::File
        });

        match storage_type {
            StorageType::InMemory => Self::in_memory(),
            StorageType::File => Self::file(path),
        }
    }

    /// Returns the storage type
    pub fn storage_type(&self) -> StorageType {
        match self {
            Self::InMemory => StorageType::InMemory,
            Self::File { .. } => StorageType::File,
        }
    }
}

/// Factory for creating storage instances
#[derive(Debug)]
pub struct StorageFactory;

impl StorageFactory {
    /// Creates a storage instance based on the configuration
    pub fn create(config: &StorageConfig) -> Arc<dyn KeyValueStore> {
        match config {
            StorageConfig::InMemory => Arc::new(InMemoryKeyValueStore::new()),
            StorageConfig::File { dir } => Arc::new(FileKeyValueStore::new(dir.clone())),
        }
    }
}
