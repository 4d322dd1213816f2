#[cfg(test)]
#[path = "../../tests/unit/utils/environment_test.rs"]
mod environment_test;

use crate::utils::{Float, Timer};
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the planner.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Specifies a computational quota for planning.
/// The main purpose is to allow to stop long running scans in reaction to external events such
/// as a timer.
pub trait Quota: Send + Sync {
    /// Returns true when computation should be stopped.
    fn is_reached(&self) -> bool;
}

/// A time quota.
pub struct TimeQuota {
    start: Timer,
    limit_in_secs: Float,
}

impl TimeQuota {
    /// Creates a new instance of `TimeQuota`.
    pub fn new(limit_in_secs: Float) -> Self {
        Self { start: Timer::start(), limit_in_secs }
    }
}

impl Quota for TimeQuota {
    fn is_reached(&self) -> bool {
        self.start.elapsed_secs_as_float() > self.limit_in_secs
    }
}

/// Keeps track of environment specific information which influences planning behavior.
#[derive(Clone)]
pub struct Environment {
    /// An optional computational quota.
    pub quota: Option<Arc<dyn Quota>>,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an environment with an optional time quota, specified in seconds.
    pub fn new_with_time_quota(max_time: Option<usize>) -> Self {
        Self {
            quota: max_time.map::<Arc<dyn Quota>, _>(|time| Arc::new(TimeQuota::new(time as Float))),
            ..Self::default()
        }
    }

    /// Creates an environment which does not log anything.
    pub fn new_silent() -> Self {
        Self { logger: Arc::new(|_| {}), ..Self::default() }
    }

    /// Returns true if the quota is set and reached.
    pub fn is_quota_reached(&self) -> bool {
        self.quota.as_ref().is_some_and(|quota| quota.is_reached())
    }

    /// Logs the message using the environment logger.
    pub fn log(&self, message: &str) {
        (self.logger)(message)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self { quota: None, logger: Arc::new(|msg| println!("{msg}")) }
    }
}
