use std::time::Duration;

/// Aggregate outcome of a load test run
///
/// Only the raw pass/fail counts are kept here; latency quantiles and
/// anything time-series shaped belong to the external harness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub passed: u64,
    pub failed: u64,
    pub vus: u32,
    pub elapsed: Duration,
}

impl RunReport {
    pub fn total(&self) -> u64 {
        self.passed + self.failed
    }

    pub fn pass_rate(&self) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            self.passed as f64 / self.total() as f64
        }
    }

    pub fn error_rate(&self) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            self.failed as f64 / self.total() as f64
        }
    }
}

impl std::fmt::Display for RunReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(
            f,
            "checks: {} passed, {} failed ({:.1}% pass rate) across {} VUs in {}",
            self.passed,
            self.failed,
            self.pass_rate() * 100.0,
            self.vus,
            humantime::format_duration(Duration::from_secs(self.elapsed.as_secs())),
        )
    }
}
