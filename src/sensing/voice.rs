use anyhow::{bail, Result};
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use std::time::Duration;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::clock::{Clock, SystemClock};
use crate::models::{VoiceAnalysis, VoiceRecording};
use crate::timer::{schedule_repeating, ScheduledTask};

use super::classifier::{ClipInfo, EmotionClassifier};

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::{log_info, log_warn};

#[derive(Default)]
struct VoiceState {
    /// Most recent first.
    recordings: Vec<VoiceRecording>,
    current: Option<VoiceAnalysis>,
}

/// Tracks voice recordings and their analyses for one session.
///
/// Audio capture itself happens outside the engine; this keeps the recording
/// clock and turns a finished clip into a [`VoiceRecording`].
#[derive(Clone)]
pub struct VoiceRecorder {
    state: Arc<Mutex<VoiceState>>,
    elapsed_ms: Arc<AtomicU64>,
    recording_clock: Arc<Mutex<Option<ScheduledTask>>>,
    tick: Duration,
    clock: Arc<dyn Clock>,
}

impl VoiceRecorder {
    pub fn new(tick: Duration) -> Self {
        Self::with_clock(tick, Arc::new(SystemClock))
    }

    pub fn with_clock(tick: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Arc::new(Mutex::new(VoiceState::default())),
            elapsed_ms: Arc::new(AtomicU64::new(0)),
            recording_clock: Arc::new(Mutex::new(None)),
            tick,
            clock,
        }
    }

    pub async fn start_recording(&self) -> Result<()> {
        if self.tick.is_zero() {
            bail!("recording tick must be greater than zero");
        }

        let mut guard = self.recording_clock.lock().await;
        if guard.is_some() {
            bail!("recording already in progress");
        }

        self.elapsed_ms.store(0, Ordering::SeqCst);
        let elapsed = self.elapsed_ms.clone();
        let tick_ms = self.tick.as_millis() as u64;
        *guard = Some(schedule_repeating(self.tick, move || {
            elapsed.fetch_add(tick_ms, Ordering::SeqCst);
            std::future::ready(())
        }));

        log_info!("Voice recording started");
        Ok(())
    }

    pub async fn is_recording(&self) -> bool {
        self.recording_clock.lock().await.is_some()
    }

    /// Whole seconds counted by the recording clock so far.
    pub fn recording_secs(&self) -> u64 {
        self.elapsed_ms.load(Ordering::SeqCst) / 1_000
    }

    /// Stop the clock, analyse the clip and prepend the recording.
    pub async fn stop_recording(
        &self,
        classifier: &dyn EmotionClassifier,
    ) -> Result<VoiceRecording> {
        let duration_secs = {
            let mut guard = self.recording_clock.lock().await;
            let Some(task) = guard.take() else {
                bail!("no recording in progress");
            };
            task.cancel().await?;
            self.recording_secs()
        };
        let classification = classifier.classify_voice(&ClipInfo { duration_secs });
        let now = self.clock.now();

        let analysis = VoiceAnalysis {
            emotion: classification.emotion,
            confidence: bounded("confidence", classification.confidence, 1.0),
            sentiment: classification.sentiment,
            energy: bounded("energy", classification.energy, 100.0),
            timestamp: now,
        };
        let recording = VoiceRecording {
            id: Uuid::new_v4().to_string(),
            duration_secs,
            analysis: analysis.clone(),
            timestamp: now,
        };

        let mut state = self.state.lock().await;
        state.recordings.insert(0, recording.clone());
        state.current = Some(analysis);

        log_info!(
            "Voice recording {} analysed: {} over {}s",
            recording.id,
            recording.analysis.emotion,
            duration_secs
        );
        Ok(recording)
    }

    pub async fn recordings(&self) -> Vec<VoiceRecording> {
        self.state.lock().await.recordings.clone()
    }

    pub async fn current_analysis(&self) -> Option<VoiceAnalysis> {
        self.state.lock().await.current.clone()
    }

    pub async fn delete(&self, id: &str) -> bool {
        let mut state = self.state.lock().await;
        let before = state.recordings.len();
        state.recordings.retain(|recording| recording.id != id);
        before != state.recordings.len()
    }
}

/// Clamp a classifier output into `[0, max]`, recording non-finite values as 0.
fn bounded(name: &str, value: f64, max: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, max)
    } else {
        log_warn!("classifier returned non-finite voice {}; recording 0", name);
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::test_support::ManualClock;
    use crate::models::{Emotion, Sentiment};
    use crate::sensing::classifier::test_support::ScriptedClassifier;
    use crate::sensing::classifier::{
        Classification, RandomClassifier, SensorInput, VoiceClassification,
    };
    use chrono::{TimeZone, Utc};
    use tokio::time::sleep;

    fn recorder() -> VoiceRecorder {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 1, 16, 18, 30, 0).unwrap());
        VoiceRecorder::with_clock(Duration::from_secs(1), Arc::new(clock))
    }

    #[tokio::test(start_paused = true)]
    async fn recording_clock_counts_seconds() {
        let recorder = recorder();
        recorder.start_recording().await.unwrap();
        assert!(recorder.is_recording().await);

        sleep(Duration::from_millis(3_500)).await;
        assert_eq!(recorder.recording_secs(), 3);

        let classifier = ScriptedClassifier::new(vec![Emotion::Happy], 0.85);
        let recording = recorder.stop_recording(&classifier).await.unwrap();
        assert_eq!(recording.duration_secs, 3);
        assert_eq!(recording.analysis.emotion, Emotion::Happy);
        assert_eq!(recording.analysis.sentiment, Sentiment::Positive);
        assert!(!recorder.is_recording().await);

        sleep(Duration::from_secs(5)).await;
        assert_eq!(recorder.recording_secs(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn recordings_are_most_recent_first_and_deletable() {
        let recorder = recorder();
        let classifier = RandomClassifier::seeded(5);

        recorder.start_recording().await.unwrap();
        sleep(Duration::from_millis(1_100)).await;
        let first = recorder.stop_recording(&classifier).await.unwrap();

        recorder.start_recording().await.unwrap();
        sleep(Duration::from_millis(2_100)).await;
        let second = recorder.stop_recording(&classifier).await.unwrap();

        let recordings = recorder.recordings().await;
        assert_eq!(recordings.len(), 2);
        assert_eq!(recordings[0].id, second.id);
        assert_eq!(recordings[1].duration_secs, 1);
        assert_eq!(recorder.current_analysis().await, Some(second.analysis.clone()));
        assert!((0.7..1.0).contains(&second.analysis.confidence));

        assert!(recorder.delete(&first.id).await);
        assert!(!recorder.delete(&first.id).await);
        assert_eq!(recorder.recordings().await.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn lifecycle_misuse_is_an_error() {
        let recorder = recorder();
        let classifier = RandomClassifier::seeded(1);
        assert!(recorder.stop_recording(&classifier).await.is_err());

        recorder.start_recording().await.unwrap();
        assert!(recorder.start_recording().await.is_err());
        recorder.stop_recording(&classifier).await.unwrap();
    }

    struct GarbledClassifier;

    impl EmotionClassifier for GarbledClassifier {
        fn classify(&self, _input: &SensorInput) -> Classification {
            Classification {
                emotion: Emotion::Confused,
                confidence: f64::NAN,
            }
        }

        fn classify_voice(&self, _clip: &ClipInfo) -> VoiceClassification {
            VoiceClassification {
                emotion: Emotion::Confused,
                confidence: f64::NAN,
                sentiment: Sentiment::Neutral,
                energy: f64::INFINITY,
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn non_finite_voice_outputs_are_recorded_as_zero() {
        let recorder = recorder();
        recorder.start_recording().await.unwrap();
        sleep(Duration::from_millis(1_100)).await;

        let recording = recorder.stop_recording(&GarbledClassifier).await.unwrap();
        assert_eq!(recording.analysis.confidence, 0.0);
        assert_eq!(recording.analysis.energy, 0.0);
        assert_eq!(recording.analysis.emotion, Emotion::Confused);
    }
}
