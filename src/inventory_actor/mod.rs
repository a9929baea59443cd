//! The service task that owns the inventory.
//!
//! All reads and writes of the product collection go through this task's
//! request loop, one message at a time, so no locking is needed.

use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

use crate::clients::InventoryClient;
use crate::domain::Product;
use crate::error::InventoryError;
use crate::inventory::Inventory;
use crate::messages::{InventoryRequest, ServiceResponse};
use crate::store::InventoryStore;

pub struct InventoryService {
    receiver: mpsc::Receiver<InventoryRequest>,
    inventory: Inventory,
    store: InventoryStore,
}

impl InventoryService {
    pub fn new(buffer_size: usize, inventory: Inventory, store: InventoryStore) -> (Self, InventoryClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            inventory,
            store,
        };
        (service, InventoryClient::new(sender))
    }

    #[instrument(name = "inventory_service", skip(self))]
    pub async fn run(mut self) {
        info!(product_count = self.inventory.len(), "InventoryService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                InventoryRequest::Add { product, respond_to } => {
                    self.handle_add(product, respond_to);
                }
                InventoryRequest::Remove { id, respond_to } => {
                    self.handle_remove(id, respond_to);
                }
                InventoryRequest::Update {
                    id,
                    quantity,
                    price,
                    respond_to,
                } => {
                    self.handle_update(id, quantity, price, respond_to);
                }
                InventoryRequest::Search { term, respond_to } => {
                    self.handle_search(term, respond_to);
                }
                InventoryRequest::List { respond_to } => {
                    self.handle_list(respond_to);
                }
                InventoryRequest::Save { respond_to } => {
                    self.handle_save(respond_to).await;
                }
                InventoryRequest::Shutdown => {
                    info!("InventoryService shutting down");
                    break;
                }
                #[cfg(test)]
                InventoryRequest::GetProductCount { respond_to } => {
                    let _ = respond_to.send(Ok(self.inventory.len()));
                }
            }
        }

        info!("InventoryService stopped");
    }

    #[instrument(fields(product_id = %product.id()), skip(self, product, respond_to))]
    fn handle_add(&mut self, product: Product, respond_to: ServiceResponse<Option<Product>, InventoryError>) {
        debug!("Processing add request");

        let replaced = self.inventory.add(product);
        match &replaced {
            Some(old) => info!(old_name = %old.name(), "Product replaced"),
            None => info!("Product added"),
        }

        let _ = respond_to.send(Ok(replaced));
    }

    #[instrument(fields(product_id = %id), skip(self, respond_to))]
    fn handle_remove(&mut self, id: String, respond_to: ServiceResponse<Option<Product>, InventoryError>) {
        debug!("Processing remove request");

        let removed = self.inventory.remove(&id);
        match &removed {
            Some(_) => info!("Product removed"),
            None => debug!("Product not found for removal"),
        }

        let _ = respond_to.send(Ok(removed));
    }

    #[instrument(fields(product_id = %id), skip(self, respond_to))]
    fn handle_update(
        &mut self,
        id: String,
        quantity: u32,
        price: f64,
        respond_to: ServiceResponse<Option<Product>, InventoryError>,
    ) {
        debug!("Processing update request");

        let updated = self.inventory.update(&id, quantity, price).cloned();
        match &updated {
            Some(_) => info!("Product updated"),
            None => debug!("Product not found for update"),
        }

        let _ = respond_to.send(Ok(updated));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_search(&self, term: String, respond_to: ServiceResponse<Option<Product>, InventoryError>) {
        debug!("Processing search request");

        let found = self.inventory.search(&term).cloned();
        match &found {
            Some(product) => debug!(product_id = %product.id(), "Product found"),
            None => debug!("No product matched"),
        }

        let _ = respond_to.send(Ok(found));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_list(&self, respond_to: ServiceResponse<Vec<Product>, InventoryError>) {
        debug!("Processing list request");

        let products: Vec<Product> = self.inventory.list().cloned().collect();
        debug!(product_count = products.len(), "Listed products");

        let _ = respond_to.send(Ok(products));
    }

    #[instrument(fields(path = %self.store.path().display()), skip(self, respond_to))]
    async fn handle_save(&self, respond_to: ServiceResponse<usize, InventoryError>) {
        debug!("Processing save request");

        let result = match self.store.save(&self.inventory).await {
            Ok(()) => {
                info!(product_count = self.inventory.len(), "Inventory saved");
                Ok(self.inventory.len())
            }
            Err(e) => {
                error!(error = %e, "Inventory save failed");
                Err(InventoryError::from(e))
            }
        };

        let _ = respond_to.send(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn spawn_service(store: InventoryStore) -> InventoryClient {
        let (service, client) = InventoryService::new(8, Inventory::new(), store);
        tokio::spawn(service.run());
        client
    }

    #[tokio::test]
    async fn test_requests_are_applied_in_order() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let client = spawn_service(InventoryStore::new(dir.path().join("inventory.json")));

        assert_eq!(client.get_product_count().await?, 0);

        client.add_product(Product::new("A1", "Widget", 10, 2.5)).await?;
        client.add_product(Product::new("B2", "Gadget", 1, 1.0)).await?;
        assert_eq!(client.get_product_count().await?, 2);

        let updated = client.update_product("A1".to_string(), 3, 4.0).await?;
        assert_eq!(updated, Some(Product::new("A1", "Widget", 3, 4.0)));

        let found = client.search_product("gadget".to_string()).await?;
        assert_eq!(found.as_ref().map(Product::id), Some("B2"));

        let removed = client.remove_product("B2".to_string()).await?;
        assert!(removed.is_some());
        assert_eq!(client.list_products().await?, vec![Product::new("A1", "Widget", 3, 4.0)]);

        client.shutdown().await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_ids_answer_none() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let client = spawn_service(InventoryStore::new(dir.path().join("inventory.json")));

        assert_eq!(client.remove_product("nope".to_string()).await?, None);
        assert_eq!(client.update_product("nope".to_string(), 1, 1.0).await?, None);
        assert_eq!(client.search_product("nope".to_string()).await?, None);
        assert_eq!(client.get_product_count().await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_save_writes_through_store() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let store = InventoryStore::new(dir.path().join("inventory.json"));
        let client = spawn_service(store.clone());

        client.add_product(Product::new("A1", "Widget", 10, 2.5)).await?;
        assert_eq!(client.save_inventory().await?, 1);

        let on_disk = store.load().await?;
        assert_eq!(on_disk.get("A1"), Some(&Product::new("A1", "Widget", 10, 2.5)));
        Ok(())
    }

    #[tokio::test]
    async fn test_save_failure_keeps_inventory() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let client = spawn_service(InventoryStore::new(dir.path().join("missing").join("inventory.json")));

        client.add_product(Product::new("A1", "Widget", 10, 2.5)).await?;
        let result = client.save_inventory().await;

        assert!(matches!(result, Err(InventoryError::StorageError(_))));
        assert_eq!(client.get_product_count().await?, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_client_fails_after_shutdown() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let (service, client) = InventoryService::new(8, Inventory::new(), InventoryStore::new(dir.path().join("i.json")));
        let handle = tokio::spawn(service.run());

        client.shutdown().await?;
        handle.await?;

        let result = client.list_products().await;
        assert!(matches!(result, Err(InventoryError::ActorCommunicationError(_))));
        Ok(())
    }
}
