use anyhow::{bail, Result};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::clock::{Clock, SystemClock};
use crate::models::Reading;
use crate::timer::{schedule_repeating, ScheduledTask};

use super::classifier::{EmotionClassifier, FrameInfo, SensorInput};
use super::history::ReadingHistory;
use super::loop_worker::capture_reading;

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::log_info;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum SamplingStatus {
    #[default]
    Idle,
    Active,
}

pub(crate) struct SamplingState {
    pub(crate) status: SamplingStatus,
    pub(crate) current: Option<Reading>,
    pub(crate) history: ReadingHistory,
    /// Readings pushed since the last [`SamplingController::take_new_readings`].
    pub(crate) unseen: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SamplingSnapshot {
    pub status: SamplingStatus,
    pub current: Option<Reading>,
    /// Oldest first.
    pub history: Vec<Reading>,
}

/// Owns the lifecycle of one periodic sampling session (camera by default).
#[derive(Clone)]
pub struct SamplingController {
    state: Arc<Mutex<SamplingState>>,
    task: Arc<Mutex<Option<ScheduledTask>>>,
    interval: Duration,
    input: SensorInput,
    clock: Arc<dyn Clock>,
}

impl SamplingController {
    pub fn new(interval: Duration, history_limit: usize) -> Self {
        Self::with_clock(interval, history_limit, Arc::new(SystemClock))
    }

    pub fn with_clock(interval: Duration, history_limit: usize, clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Arc::new(Mutex::new(SamplingState {
                status: SamplingStatus::Idle,
                current: None,
                history: ReadingHistory::new(history_limit),
                unseen: 0,
            })),
            task: Arc::new(Mutex::new(None)),
            interval,
            input: SensorInput::Frame(FrameInfo::default()),
            clock,
        }
    }

    /// Sample a different input shape, e.g. a voice channel.
    pub fn with_input(mut self, input: SensorInput) -> Self {
        self.input = input;
        self
    }

    pub async fn start(&self, classifier: Arc<dyn EmotionClassifier>) -> Result<()> {
        if self.interval.is_zero() {
            bail!("sampling interval must be greater than zero");
        }

        let mut task_guard = self.task.lock().await;
        if task_guard.is_some() {
            bail!("sampling already active");
        }

        self.state.lock().await.status = SamplingStatus::Active;

        let state = self.state.clone();
        let clock = self.clock.clone();
        let input = self.input;
        let task = schedule_repeating(self.interval, move || {
            let state = state.clone();
            let classifier = classifier.clone();
            let clock = clock.clone();
            async move {
                capture_reading(&state, classifier.as_ref(), clock.as_ref(), &input).await;
            }
        });

        *task_guard = Some(task);
        log_info!(
            "{} sampling started every {}ms",
            self.input.source(),
            self.interval.as_millis()
        );
        Ok(())
    }

    /// Stop sampling. No reading is appended once this returns.
    pub async fn stop(&self) -> Result<()> {
        // Held until the worker has joined so a concurrent start cannot
        // interleave with the status change.
        let mut task_guard = self.task.lock().await;
        let task = task_guard.take();

        {
            let mut state = self.state.lock().await;
            state.status = SamplingStatus::Idle;
            state.current = None;
        }

        if let Some(task) = task {
            task.cancel().await?;
            log_info!("{} sampling stopped", self.input.source());
        }
        Ok(())
    }

    /// Forget the current reading and all history; sampling keeps running if active.
    pub async fn reset(&self) {
        let mut state = self.state.lock().await;
        state.history.clear();
        state.current = None;
        state.unseen = 0;
        log_info!("{} sampling history reset", self.input.source());
    }

    pub async fn is_active(&self) -> bool {
        self.state.lock().await.status == SamplingStatus::Active
    }

    pub async fn current(&self) -> Option<Reading> {
        self.state.lock().await.current.clone()
    }

    pub async fn history(&self) -> Vec<Reading> {
        self.state.lock().await.history.to_vec()
    }

    /// Readings captured since the previous call, oldest first.
    ///
    /// History is left untouched; readings already evicted from the window are
    /// not returned.
    pub async fn take_new_readings(&self) -> Vec<Reading> {
        let mut state = self.state.lock().await;
        let fresh = state.unseen.min(state.history.len());
        state.unseen = 0;
        let skip = state.history.len() - fresh;
        state.history.iter().skip(skip).cloned().collect()
    }

    pub async fn snapshot(&self) -> SamplingSnapshot {
        let state = self.state.lock().await;
        SamplingSnapshot {
            status: state.status,
            current: state.current.clone(),
            history: state.history.to_vec(),
        }
    }
}
