mod utils;
#[allow(unused)]
use utils::*;

use mock_service::Mode;
use orderload::prelude::*;
use reqwest::Client;
use std::num::NonZeroU32;
use std::time::{Duration, Instant};

fn config(vus: u32, secs: u64) -> RunConfig {
    RunConfig::new(
        "create-order",
        NonZeroU32::new(vus).unwrap(),
        Duration::from_secs(secs),
    )
    .unwrap()
}

async fn run_against(base_url: String, vus: u32, secs: u64) -> RunReport {
    let client = Client::new();
    LoadTest::new(config(vus, secs), move || {
        let client = client.clone();
        let base_url = base_url.clone();
        async move {
            let _ = check_hook(create_order(&client, &base_url)).await;
        }
    })
    .await
}

#[tokio::test]
async fn every_order_accepted_means_every_check_passes() {
    init();
    let (addr, received) = mock_service::spawn(Mode::Accept).await;

    let report = run_against(format!("http://{addr}"), 3, 2).await;

    assert_eq!(report.failed, 0);
    // With a 1s think time each VU fits 2-3 iterations into 2s.
    assert!(report.passed >= 3 && report.passed <= 12, "{report}");
    assert_eq!(report.total(), received.total());
}

#[tokio::test]
async fn every_order_rejected_means_every_check_fails() {
    init();
    let (addr, _received) = mock_service::spawn(Mode::Reject).await;

    let start = Instant::now();
    let report = run_against(format!("http://{addr}"), 3, 2).await;

    assert_eq!(report.passed, 0);
    assert!(report.failed >= 3, "{report}");
    // The run still finishes on schedule.
    assert!(start.elapsed() >= Duration::from_secs(2));
    assert!(start.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn unreachable_target_fails_every_check_but_completes() {
    init();

    let start = Instant::now();
    let report = run_against("http://127.0.0.1:1".to_string(), 2, 2).await;

    assert_eq!(report.passed, 0);
    assert!(report.failed >= 2, "{report}");
    assert!(start.elapsed() >= Duration::from_secs(2));
    assert!(start.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn wire_payloads_stay_within_the_catalog() {
    init();
    let (addr, received) = mock_service::spawn(Mode::Accept).await;

    run_against(format!("http://{addr}"), 5, 3).await;

    assert!(received.total() > 0);
    for product_id in received.product_ids() {
        assert!(
            ["1", "2", "3"].contains(&product_id.as_str()),
            "unexpected product id {product_id}"
        );
    }
    assert_eq!(received.quantities(), vec![2]);
}

#[tokio::test]
async fn mock_replies_with_an_order_event() -> anyhow::Result<()> {
    init();
    let (addr, _received) = mock_service::spawn(Mode::Accept).await;

    let res = Client::new()
        .post(format!("http://{addr}/api/orders"))
        .json(&serde_json::json!({"productId": "1", "quantity": 2}))
        .send()
        .await?;

    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let body: serde_json::Value = res.json().await?;
    assert_eq!(body["productId"], "1");
    assert_eq!(body["quantity"], 2);
    assert!(body["orderId"].is_string());
    Ok(())
}
