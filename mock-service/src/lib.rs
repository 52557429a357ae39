//! In-process stand-in for the order-creation service.
use axum::{debug_handler, extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, RwLock,
};
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub product_id: String,
    pub quantity: u32,
}

/// Response shape of the real order service.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderEvent {
    pub order_id: String,
    pub product_id: String,
    pub quantity: u32,
}

/// Whether the mock accepts every order or rejects every order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Accept,
    Reject,
}

/// Handle onto what the mock has seen, for test assertions.
#[derive(Clone, Default)]
pub struct Received {
    total: Arc<AtomicU64>,
    products: Arc<RwLock<HashMap<String, u64>>>,
    quantities: Arc<RwLock<HashMap<u32, u64>>>,
}

impl Received {
    pub fn total(&self) -> u64 {
        self.total.load(Ordering::Relaxed)
    }

    pub fn product_count(&self, product_id: &str) -> u64 {
        self.products
            .read()
            .unwrap()
            .get(product_id)
            .copied()
            .unwrap_or(0)
    }

    pub fn product_ids(&self) -> Vec<String> {
        self.products.read().unwrap().keys().cloned().collect()
    }

    pub fn quantities(&self) -> Vec<u32> {
        self.quantities.read().unwrap().keys().copied().collect()
    }

    fn record(&self, req: &CreateOrderRequest) {
        self.total.fetch_add(1, Ordering::Relaxed);
        *self
            .products
            .write()
            .unwrap()
            .entry(req.product_id.clone())
            .or_insert(0) += 1;
        *self
            .quantities
            .write()
            .unwrap()
            .entry(req.quantity)
            .or_insert(0) += 1;
    }
}

#[derive(Clone)]
struct AppState {
    mode: Mode,
    received: Received,
}

pub fn app(mode: Mode) -> (Router, Received) {
    let received = Received::default();
    let state = AppState {
        mode,
        received: received.clone(),
    };
    let router = Router::new()
        .route("/api/orders", post(create_order))
        .with_state(state);
    (router, received)
}

/// Serves on the given address until the process exits.
pub async fn run(addr: SocketAddr, mode: Mode) {
    let (router, _) = app(mode);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, router).await.unwrap();
}

/// Binds to an ephemeral localhost port and serves in the background.
pub async fn spawn(mode: Mode) -> (SocketAddr, Received) {
    let (router, received) = app(mode);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    (addr, received)
}

#[debug_handler]
async fn create_order(
    State(state): State<AppState>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<Json<OrderEvent>, StatusCode> {
    state.received.record(&req);

    match state.mode {
        Mode::Accept => {
            debug!("MOCK SERVER ___ OK product {}", req.product_id);
            Ok(Json(OrderEvent {
                order_id: Uuid::new_v4().to_string(),
                product_id: req.product_id,
                quantity: req.quantity,
            }))
        }
        Mode::Reject => {
            debug!("MOCK SERVER ___ ERR product {}", req.product_id);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
