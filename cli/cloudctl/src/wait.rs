// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Polling for long-running operations
//!
//! Create, delete and resize return before the resource settles. Commands
//! that were asked to `--wait` hand a probe to [`Waiter::wait_for_command`],
//! which calls it until it reports completion, returns an error, or the
//! configured timeout passes.
//!
//! A probe returns `Ok(true)` once the operation is done and `Ok(false)`
//! while it is still in progress. A resource that lands in a terminal
//! failure state must be reported by the probe as an `Err`; the loop has no
//! knowledge of resource states and would otherwise poll until timeout.

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::time::{Instant, sleep};
use tracing::debug;

pub const DEFAULT_TIMEOUT_SECONDS: i64 = 1200;
pub const DEFAULT_SLEEP_SECONDS: i64 = 5;

/// Errors raised while waiting for an operation to finish
#[derive(Error, Debug)]
pub enum WaitError {
    #[error("invalid timeout: {0}")]
    InvalidTimeout(i64),

    #[error("invalid sleep interval: {0}")]
    InvalidSleepInterval(i64),

    #[error("timed out after {0}s waiting for command")]
    TimedOut(u64),

    /// The probe failed, either on lookup or because the resource failed
    #[error("waiting for command: {0:#}")]
    Command(anyhow::Error),
}

/// Timeout and poll interval, both in whole seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitConfig {
    #[serde(rename = "command_wait_timeout_seconds")]
    pub timeout_seconds: i64,
    #[serde(rename = "command_wait_sleep_seconds")]
    pub sleep_seconds: i64,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            sleep_seconds: DEFAULT_SLEEP_SECONDS,
        }
    }
}

impl WaitConfig {
    fn durations(&self) -> Result<(Duration, Duration), WaitError> {
        let timeout = u64::try_from(self.timeout_seconds)
            .map_err(|_| WaitError::InvalidTimeout(self.timeout_seconds))?;
        if timeout < 1 {
            return Err(WaitError::InvalidTimeout(self.timeout_seconds));
        }
        let interval = u64::try_from(self.sleep_seconds)
            .map_err(|_| WaitError::InvalidSleepInterval(self.sleep_seconds))?;
        if interval < 1 {
            return Err(WaitError::InvalidSleepInterval(self.sleep_seconds));
        }
        Ok((Duration::from_secs(timeout), Duration::from_secs(interval)))
    }
}

/// Runs probes under one wait configuration
#[derive(Debug, Clone, Copy)]
pub struct Waiter {
    config: WaitConfig,
}

impl Waiter {
    pub fn new(config: WaitConfig) -> Self {
        Self { config }
    }

    /// Call `probe` until it finishes, fails, or the timeout passes
    pub async fn wait_for_command<F, Fut>(&self, mut probe: F) -> Result<(), WaitError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = anyhow::Result<bool>>,
    {
        let (timeout, interval) = self.config.durations()?;
        let start = Instant::now();
        let mut attempt = 0u32;

        loop {
            let elapsed = start.elapsed();
            if elapsed > timeout {
                return Err(WaitError::TimedOut(elapsed.as_secs()));
            }

            attempt += 1;
            debug!(attempt, elapsed_secs = elapsed.as_secs(), "probing command state");

            if probe().await.map_err(WaitError::Command)? {
                debug!(attempt, "command finished");
                return Ok(());
            }

            sleep(interval).await;
        }
    }
}
