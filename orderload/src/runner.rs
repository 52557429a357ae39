//! The load driver: spawns the VU tasks and runs them to the deadline.
use crate::check::{CheckData, CHECK_HOOK};
use crate::config::RunConfig;
use crate::report::RunReport;
use std::{
    future::Future,
    num::NonZeroU32,
    pin::Pin,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    task::{Context, Poll},
    time::Duration,
};
use tokio::time::{sleep, Instant};
#[allow(unused_imports)]
use tracing::{debug, error, info, instrument, trace, warn};

/// Pause after every request, matching the fixed 1-second think time of the
/// original scenario.
pub(crate) const THINK_TIME: Duration = Duration::from_secs(1);

/// Load test handle
///
/// Builder-style future: construct it with the iteration function, then
/// `.await` it to run the test and collect the [`RunReport`].
#[pin_project::pin_project]
pub struct LoadTest<T> {
    func: T,
    runner_fut: Option<Pin<Box<dyn Future<Output = RunReport> + Send>>>,
    config: RunConfig,
}

impl<T> LoadTest<T> {
    pub fn new(config: RunConfig, func: T) -> Self {
        Self {
            func,
            runner_fut: None,
            config,
        }
    }

    /// Overrides the number of virtual users from the base config.
    pub fn vus(mut self, vus: NonZeroU32) -> Self {
        self.config.vus = vus;
        self
    }

    /// Overrides the run duration from the base config.
    pub fn duration(mut self, duration: Duration) -> Self {
        self.config.duration = duration;
        self
    }
}

impl<T, F> Future for LoadTest<T>
where
    T: Fn() -> F + Send + Sync + 'static + Clone,
    F: Future<Output = ()> + Send + 'static,
{
    type Output = RunReport;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if self.runner_fut.is_none() {
            let func = self.func.clone();
            let config = self.config.clone();
            self.runner_fut = Some(Box::pin(async move { run_load(func, config).await }));
        }

        if let Some(runner) = &mut self.runner_fut {
            runner.as_mut().poll(cx)
        } else {
            unreachable!()
        }
    }
}

#[instrument(name = "load_test", skip_all, fields(name = config.name))]
pub(crate) async fn run_load<T, F>(func: T, config: RunConfig) -> RunReport
where
    T: Fn() -> F + Send + Sync + 'static + Clone,
    F: Future<Output = ()> + Send + 'static,
{
    info!(
        "Running {} with {} VUs for {}",
        config.name,
        config.vus,
        humantime::format_duration(config.duration)
    );

    let passed = Arc::new(AtomicU64::new(0));
    let failed = Arc::new(AtomicU64::new(0));
    let start = Instant::now();

    let mut tasks = Vec::with_capacity(config.vus.get() as usize);
    for vu in 0..config.vus.get() {
        let func = func.clone();
        let duration = config.duration;
        let data = CheckData {
            passed: passed.clone(),
            failed: failed.clone(),
        };

        tasks.push(tokio::spawn(CHECK_HOOK.scope(data, async move {
            // The deadline only gates new iterations; an in-flight request
            // and its pause run to completion.
            while start.elapsed() < duration {
                func().await;
                sleep(THINK_TIME).await;
            }
            trace!("VU {vu} finished");
        })));
    }

    for task in tasks {
        // A VU that panics loses only its own remaining iterations.
        if let Err(err) = task.await {
            error!("VU task failed: {err}");
        }
    }

    let report = RunReport {
        passed: passed.load(Ordering::Relaxed),
        failed: failed.load(Ordering::Relaxed),
        vus: config.vus.get(),
        elapsed: start.elapsed(),
    };

    info!("Load test complete: {report}");
    report
}
