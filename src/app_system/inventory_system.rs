use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::inventory_actor::InventoryService;
use crate::clients::InventoryClient;
use crate::config::Config;
use crate::store::InventoryStore;

const CHANNEL_CAPACITY: usize = 32;

/// The application context: owns the running inventory service and the
/// client the console talks to.
pub struct InventorySystem {
    pub inventory_client: InventoryClient,
    handle: JoinHandle<()>,
}

impl InventorySystem {
    /// Loads the inventory file named in `config` and starts the service.
    ///
    /// An absent or unreadable file yields an empty inventory.
    pub async fn start(config: &Config) -> Self {
        info!(path = %config.file.display(), "Starting inventory system");

        let store = InventoryStore::new(&config.file);
        let inventory = store.load_or_empty().await;

        let (service, inventory_client) = InventoryService::new(CHANNEL_CAPACITY, inventory, store);
        let handle = tokio::spawn(service.run());

        Self {
            inventory_client,
            handle,
        }
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // The service may already be gone; joining below still reports how it ended.
        if let Err(e) = self.inventory_client.shutdown().await {
            error!(error = %e, "Shutdown request not delivered");
        }
        drop(self.inventory_client);

        if let Err(e) = self.handle.await {
            error!("Service task failed: {:?}", e);
            return Err(format!("Service task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
