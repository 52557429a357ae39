//! A fixed-VU load generator for the order-creation API.
//!
//! Spawns a configured number of virtual users (VUs), each of which loops
//! for the configured duration: build a randomized order payload, POST it to
//! `/api/orders`, check that the response is a 200, pause for one second and
//! go again. Pass/fail counts come back as a [`RunReport`]; anything fancier
//! (percentiles, dashboards) is the harness's job.
//!
//! ```no_run
//! use orderload::prelude::*;
//! use reqwest::Client;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = RunConfig::parse("create-order", 15, "300s").unwrap();
//!     let client = Client::new();
//!
//!     let report = LoadTest::new(config, move || {
//!         let client = client.clone();
//!         async move {
//!             let _ = check_hook(create_order(&client, "http://localhost:8080")).await;
//!         }
//!     })
//!     .await;
//!
//!     println!("{report}");
//! }
//! ```

pub mod check;
pub mod config;
pub mod order;
pub mod report;
pub mod runner;

pub use config::{ConfigError, RunConfig};
pub use report::RunReport;
pub use runner::LoadTest;

pub mod prelude {
    pub use crate::check::check_hook;
    pub use crate::config::RunConfig;
    pub use crate::order::{create_order, OrderRequest};
    pub use crate::report::RunReport;
    pub use crate::runner::LoadTest;
}
