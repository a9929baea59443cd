use tokio::sync::mpsc;
use tracing::{debug, instrument};

use super::macros::client_method;
use crate::domain::Product;
use crate::error::InventoryError;
use crate::messages::InventoryRequest;

/// Handle to the inventory service. Cheap to clone.
#[derive(Clone)]
pub struct InventoryClient {
    sender: mpsc::Sender<InventoryRequest>,
}

impl InventoryClient {
    pub fn new(sender: mpsc::Sender<InventoryRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), InventoryError> {
        debug!("Sending shutdown request");
        self.sender
            .send(InventoryRequest::Shutdown)
            .await
            .map_err(|e| InventoryError::ActorCommunicationError(e.to_string()))
    }
}

client_method!(InventoryClient => fn add_product(product: Product) -> Option<Product> as InventoryRequest::Add, Error = InventoryError);
client_method!(InventoryClient => fn remove_product(id: String) -> Option<Product> as InventoryRequest::Remove, Error = InventoryError);
client_method!(InventoryClient => fn update_product(id: String, quantity: u32, price: f64) -> Option<Product> as InventoryRequest::Update, Error = InventoryError);
client_method!(InventoryClient => fn search_product(term: String) -> Option<Product> as InventoryRequest::Search, Error = InventoryError);
client_method!(InventoryClient => fn list_products() -> Vec<Product> as InventoryRequest::List, Error = InventoryError);
client_method!(InventoryClient => fn save_inventory() -> usize as InventoryRequest::Save, Error = InventoryError);

#[cfg(test)]
client_method!(InventoryClient => fn get_product_count() -> usize as InventoryRequest::GetProductCount, Error = InventoryError);
