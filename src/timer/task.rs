use std::future::Future;

use anyhow::{Context, Result};
use tokio::task::JoinHandle;
use tokio::time::{self, Duration, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Handle to a repeating background callback.
///
/// Once [`ScheduledTask::cancel`] returns the callback will not run again; a
/// callback that was mid-flight when cancellation was requested is allowed to
/// finish first. Dropping the handle also stops the schedule, without waiting.
pub struct ScheduledTask {
    handle: Option<JoinHandle<()>>,
    cancel_token: CancellationToken,
}

impl ScheduledTask {
    pub fn is_finished(&self) -> bool {
        self.handle
            .as_ref()
            .map(JoinHandle::is_finished)
            .unwrap_or(true)
    }

    /// Stop the schedule and wait for the worker to exit.
    pub async fn cancel(mut self) -> Result<()> {
        self.cancel_token.cancel();
        match self.handle.take() {
            Some(handle) => handle.await.context("scheduled task failed to join"),
            None => Ok(()),
        }
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.cancel_token.cancel();
    }
}

/// Run `callback` every `period`, first firing one period from now.
///
/// Missed ticks are delayed rather than burst, so a slow callback never causes a
/// flurry of catch-up invocations.
pub fn schedule_repeating<F, Fut>(period: Duration, mut callback: F) -> ScheduledTask
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    let cancel_token = CancellationToken::new();
    let token = cancel_token.clone();

    let handle = tokio::spawn(async move {
        let mut ticker = time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = token.cancelled() => break,
                _ = ticker.tick() => {
                    if token.is_cancelled() {
                        break;
                    }
                    callback().await;
                }
            }
        }
    });

    ScheduledTask {
        handle: Some(handle),
        cancel_token,
    }
}
