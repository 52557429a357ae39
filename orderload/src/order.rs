//! The order-creation scenario: payload construction and the single POST.
use rand::Rng;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Product identifiers known to the inventory seed data.
pub const PRODUCT_IDS: [&str; 3] = ["1", "2", "3"];

/// Every simulated order asks for the same quantity.
pub const ORDER_QUANTITY: u32 = 2;

/// Wire shape: `{"productId":"<1|2|3>","quantity":2}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub product_id: String,
    pub quantity: u32,
}

impl OrderRequest {
    /// Picks a product id uniformly at random. Uses the thread-local rng so
    /// concurrent VUs never contend on (or correlate through) a shared
    /// source.
    pub fn random() -> Self {
        let idx = rand::thread_rng().gen_range(0..PRODUCT_IDS.len());
        Self {
            product_id: PRODUCT_IDS[idx].to_string(),
            quantity: ORDER_QUANTITY,
        }
    }
}

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("expected status 200, got {0}")]
    UnexpectedStatus(StatusCode),
}

/// One order-creation call: builds a fresh randomized payload and POSTs it
/// to `<base_url>/api/orders` as JSON. Only the status code is inspected;
/// the response body is discarded.
pub async fn create_order(client: &Client, base_url: &str) -> Result<(), OrderError> {
    let payload = OrderRequest::random();
    let res = client
        .post(format!("{base_url}/api/orders"))
        .json(&payload)
        .send()
        .await?;

    if res.status() == StatusCode::OK {
        Ok(())
    } else {
        Err(OrderError::UnexpectedStatus(res.status()))
    }
}
