//! Backend health polling.
//!
//! `up` waits for the backend's HTTP endpoint before generating a key. The
//! wait is bounded by a [`PollPolicy`] deadline and can be stopped early
//! through a [`CancelToken`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::error::{HealthError, Result};

/// Upper bound on one HTTP probe.
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Granularity at which sleeps notice cancellation.
const CANCEL_CHECK: Duration = Duration::from_millis(100);

/// Answers whether an endpoint is healthy right now.
pub trait HealthProbe {
    fn check(&self, url: &str) -> bool;
}

/// Probes with an HTTP GET; any 2xx response is healthy.
pub struct HttpProbe {
    client: reqwest::blocking::Client,
}

impl HttpProbe {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(PROBE_TIMEOUT)
            .build()
            .map_err(HealthError::Client)?;
        Ok(Self { client })
    }
}

impl HealthProbe for HttpProbe {
    fn check(&self, url: &str) -> bool {
        match self.client.get(url).send() {
            Ok(response) => {
                debug!(url, status = %response.status(), "health probe");
                response.status().is_success()
            }
            Err(e) => {
                debug!(url, error = %e, "health probe failed");
                false
            }
        }
    }
}

/// How long and how often to poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    /// `None` polls until success or cancellation.
    pub timeout: Option<Duration>,
}

/// Shared flag that stops a running poll.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Poll `url` until it is healthy.
///
/// # Returns
///
/// The number of probes made, counting the successful one.
///
/// # Errors
///
/// Returns `HealthError::Timeout` once the policy's deadline passes and
/// `HealthError::Cancelled` if `cancel` fires first.
pub fn wait_until_healthy(
    probe: &dyn HealthProbe,
    url: &str,
    policy: PollPolicy,
    cancel: &CancelToken,
) -> Result<u32> {
    let started = Instant::now();
    // A deadline past what `Instant` can represent is no deadline.
    let deadline = policy.timeout.and_then(|t| started.checked_add(t));
    let mut attempts = 0u32;

    info!(url, timeout = ?policy.timeout, "waiting for backend");

    loop {
        if cancel.is_cancelled() {
            return Err(HealthError::Cancelled { attempts }.into());
        }

        attempts += 1;
        if probe.check(url) {
            info!(attempts, elapsed = ?started.elapsed(), "backend is healthy");
            return Ok(attempts);
        }

        let now = Instant::now();
        let out_of_time =
            |d: Instant| now >= d || d.saturating_duration_since(now) < policy.interval;
        if deadline.is_some_and(out_of_time) {
            return Err(HealthError::Timeout {
                url: url.to_string(),
                attempts,
                elapsed: started.elapsed(),
            }
            .into());
        }

        debug!(attempts, "backend not ready, retrying");
        sleep_unless_cancelled(policy.interval, cancel);
    }
}

fn sleep_unless_cancelled(duration: Duration, cancel: &CancelToken) {
    let started = Instant::now();
    loop {
        let remaining = duration.saturating_sub(started.elapsed());
        if remaining.is_zero() || cancel.is_cancelled() {
            return;
        }
        thread::sleep(remaining.min(CANCEL_CHECK));
    }
}
