use mock_service::{app, Mode, Received};
use std::time::Duration;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    FmtSubscriber::builder()
        .with_env_filter("mock_service=debug")
        .init();

    let (router, received) = app(Mode::Accept);
    tokio::task::spawn(async { orders_measure_task(received).await });

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await.unwrap();
    axum::serve(listener, router).await.unwrap();
}

async fn orders_measure_task(received: Received) {
    let mut last = 0;
    loop {
        tokio::time::sleep(Duration::from_millis(1000)).await;
        let total = received.total();
        println!("{} orders/s", total - last);
        last = total;
    }
}
