use orderload::prelude::*;
use reqwest::Client;
use std::sync::OnceLock;
use tracing_subscriber::FmtSubscriber;

// Harness options: 15 concurrent virtual users for 300 seconds.
const VUS: u32 = 15;
const DURATION: &str = "300s";
const BASE_URL: &str = "http://localhost:8080";

static CLIENT: OnceLock<Client> = OnceLock::new();

#[tokio::main]
async fn main() {
    FmtSubscriber::builder()
        .with_env_filter("orderload=info")
        .init();

    let config = RunConfig::parse("create-order", VUS, DURATION).unwrap();
    let client = CLIENT.get_or_init(Client::new);

    let report = LoadTest::new(config, move || async move {
        let _ = check_hook(create_order(client, BASE_URL)).await;
    })
    .await;

    println!("{report}");
}
