//! Requests understood by the inventory service.
//!
//! Each variant carries its parameters plus a oneshot channel for the reply.

use tokio::sync::oneshot;

use crate::domain::Product;
use crate::error::InventoryError;

pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

#[derive(Debug)]
pub enum InventoryRequest {
    /// Insert or replace; replies with the replaced product.
    Add {
        product: Product,
        respond_to: ServiceResponse<Option<Product>, InventoryError>,
    },
    Remove {
        id: String,
        respond_to: ServiceResponse<Option<Product>, InventoryError>,
    },
    Update {
        id: String,
        quantity: u32,
        price: f64,
        respond_to: ServiceResponse<Option<Product>, InventoryError>,
    },
    Search {
        term: String,
        respond_to: ServiceResponse<Option<Product>, InventoryError>,
    },
    List {
        respond_to: ServiceResponse<Vec<Product>, InventoryError>,
    },
    /// Persist the whole inventory; replies with the number of products written.
    Save {
        respond_to: ServiceResponse<usize, InventoryError>,
    },
    Shutdown,
    #[cfg(test)]
    GetProductCount {
        respond_to: ServiceResponse<usize, InventoryError>,
    },
}
