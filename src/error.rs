use std::path::PathBuf;

use thiserror::Error;

/// Failures reading or writing the inventory file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Inventory file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Cannot read inventory file {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Inventory file {} is corrupt: {}", .path.display(), .source)]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Cannot encode inventory: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("Cannot write inventory file {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors surfaced by the inventory service and its client.
///
/// A missing product is not an error here; lookups answer with `None`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    #[error("Storage error: {0}")]
    StorageError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<StoreError> for InventoryError {
    fn from(err: StoreError) -> Self {
        InventoryError::StorageError(err.to_string())
    }
}

/// Errors that end a console session.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Inventory(#[from] InventoryError),
}
