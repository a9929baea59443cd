//! Whole-file persistence of the inventory.
//!
//! The file is a pretty-printed JSON document:
//!
//! ```text
//! {
//!   "products": [
//!     { "id": "A1", "name": "Widget", "quantity": 10, "price": 2.5 }
//!   ]
//! }
//! ```
//!
//! Products are written in inventory order and read back in file order.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::domain::Product;
use crate::error::StoreError;
use crate::inventory::Inventory;

pub const DEFAULT_INVENTORY_FILE: &str = "inventory.json";

#[derive(Serialize)]
struct SnapshotRef<'a> {
    products: Vec<&'a Product>,
}

#[derive(Deserialize)]
struct Snapshot {
    products: Vec<Product>,
}

#[derive(Debug, Clone)]
pub struct InventoryStore {
    path: PathBuf,
}

impl InventoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replaces the file with the full contents of `inventory`.
    ///
    /// The document is written to a sibling `.tmp` file first and then
    /// renamed over the target, so the previous file survives a failed write.
    #[instrument(fields(path = %self.path.display(), product_count = inventory.len()), skip(self, inventory))]
    pub async fn save(&self, inventory: &Inventory) -> Result<(), StoreError> {
        let snapshot = SnapshotRef {
            products: inventory.list().collect(),
        };
        let bytes = serde_json::to_vec_pretty(&snapshot).map_err(StoreError::Encode)?;

        let staging = self.staging_path();
        if let Err(source) = tokio::fs::write(&staging, &bytes).await {
            return Err(StoreError::Write {
                path: staging,
                source,
            });
        }
        if let Err(source) = tokio::fs::rename(&staging, &self.path).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(StoreError::Write {
                path: self.path.clone(),
                source,
            });
        }

        debug!(bytes = bytes.len(), "Inventory written");
        Ok(())
    }

    #[instrument(fields(path = %self.path.display()), skip(self))]
    pub async fn load(&self) -> Result<Inventory, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::NotFound(self.path.clone()));
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let snapshot: Snapshot =
            serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt {
                path: self.path.clone(),
                source,
            })?;

        let inventory: Inventory = snapshot.products.into_iter().collect();
        debug!(product_count = inventory.len(), "Inventory read");
        Ok(inventory)
    }

    /// Loads the inventory, falling back to an empty one on any failure.
    ///
    /// A missing file is the normal first-run case. Anything else means
    /// the file's contents are dropped, so it is logged as a warning.
    pub async fn load_or_empty(&self) -> Inventory {
        match self.load().await {
            Ok(inventory) => {
                info!(path = %self.path.display(), product_count = inventory.len(), "Inventory loaded");
                inventory
            }
            Err(StoreError::NotFound(path)) => {
                info!(path = %path.display(), "No inventory file yet, starting empty");
                Inventory::new()
            }
            Err(e) => {
                warn!(error = %e, "Could not load inventory, starting empty");
                Inventory::new()
            }
        }
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from(DEFAULT_INVENTORY_FILE));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
