//! # Mock Framework
//!
//! Utilities for testing the console without a running inventory service.
//!
//! Use [`create_mock_client`] to get a client and the receiving end of its
//! channel. Then use helpers like [`expect_add`] or [`expect_save`] to assert
//! on the next request and answer it through the returned responder.

use tokio::sync::mpsc;

use crate::clients::InventoryClient;
use crate::domain::Product;
use crate::error::InventoryError;
use crate::messages::{InventoryRequest, ServiceResponse};

/// Creates a client whose requests land on a channel the test controls.
pub fn create_mock_client(buffer_size: usize) -> (InventoryClient, mpsc::Receiver<InventoryRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (InventoryClient::new(sender), receiver)
}

pub async fn expect_add(
    receiver: &mut mpsc::Receiver<InventoryRequest>,
) -> Option<(Product, ServiceResponse<Option<Product>, InventoryError>)> {
    match receiver.recv().await {
        Some(InventoryRequest::Add { product, respond_to }) => Some((product, respond_to)),
        _ => None,
    }
}

pub async fn expect_remove(
    receiver: &mut mpsc::Receiver<InventoryRequest>,
) -> Option<(String, ServiceResponse<Option<Product>, InventoryError>)> {
    match receiver.recv().await {
        Some(InventoryRequest::Remove { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

pub async fn expect_update(
    receiver: &mut mpsc::Receiver<InventoryRequest>,
) -> Option<(String, u32, f64, ServiceResponse<Option<Product>, InventoryError>)> {
    match receiver.recv().await {
        Some(InventoryRequest::Update {
            id,
            quantity,
            price,
            respond_to,
        }) => Some((id, quantity, price, respond_to)),
        _ => None,
    }
}

pub async fn expect_search(
    receiver: &mut mpsc::Receiver<InventoryRequest>,
) -> Option<(String, ServiceResponse<Option<Product>, InventoryError>)> {
    match receiver.recv().await {
        Some(InventoryRequest::Search { term, respond_to }) => Some((term, respond_to)),
        _ => None,
    }
}

pub async fn expect_save(
    receiver: &mut mpsc::Receiver<InventoryRequest>,
) -> Option<ServiceResponse<usize, InventoryError>> {
    match receiver.recv().await {
        Some(InventoryRequest::Save { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let add_task = tokio::spawn(async move {
            client.add_product(Product::new("A1", "Widget", 10, 2.5)).await
        });

        let (product, responder) = expect_add(&mut receiver).await.expect("Expected Add request");
        assert_eq!(product.id(), "A1");
        responder.send(Ok(None)).unwrap();

        let result = add_task.await.unwrap();
        assert_eq!(result, Ok(None));
    }

    #[tokio::test]
    async fn test_unexpected_request_is_none() {
        let (client, mut receiver) = create_mock_client(10);

        tokio::spawn(async move { client.list_products().await });

        assert!(expect_save(&mut receiver).await.is_none());
    }
}
