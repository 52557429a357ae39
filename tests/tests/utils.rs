use std::sync::OnceLock;
use tracing::error;
use tracing_subscriber::FmtSubscriber;

#[allow(unused)]
pub fn init() {
    static ONCE_LOCK: OnceLock<()> = OnceLock::new();

    ONCE_LOCK.get_or_init(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            default_panic(info);
            error!("Panic occurred: {info:?}");
        }));

        FmtSubscriber::builder()
            .with_env_filter("orderload=debug,mock_service=debug,axum::rejection=trace")
            .init();
    });
}
