//! Pass/fail check recording, scoped per virtual user.
use std::future::Future;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

/// Awaits a checked operation and records its outcome
///
/// `Ok` counts as a passed check, `Err` (transport failure or an unexpected
/// status, alike) as a failed one. The result is passed through untouched so
/// callers can still log or inspect it; nothing is retried here.
pub async fn check_hook<T, R, E>(func: T) -> T::Output
where
    T: Future<Output = Result<R, E>>,
{
    if let Ok(hook) = CHECK_HOOK.try_with(|v| v.clone()) {
        let res = func.await;

        if res.is_ok() {
            hook.passed.fetch_add(1, Ordering::Relaxed);
            #[cfg(feature = "metrics")]
            metrics::counter!("orderload.checks.passed").increment(1);
        } else {
            hook.failed.fetch_add(1, Ordering::Relaxed);
            #[cfg(feature = "metrics")]
            metrics::counter!("orderload.checks.failed").increment(1);
        }

        res
    } else {
        tracing::error!("No check hook in scope; outcome not recorded.");
        func.await
    }
}

#[derive(Clone)]
pub(crate) struct CheckData {
    pub passed: Arc<AtomicU64>,
    pub failed: Arc<AtomicU64>,
}

tokio::task_local! {
    pub(crate) static CHECK_HOOK: CheckData;
}
