pub mod assessment;
pub mod clock;
pub mod error;
pub mod insights;
pub mod journal;
pub mod models;
pub mod sensing;
pub mod settings;
pub mod timer;
pub mod utils;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use log::info;

pub use assessment::{question_bank, score_assessment, AssessmentSession};
pub use clock::{Clock, SystemClock};
pub use error::{CoreError, CoreResult};
pub use insights::{compute_delta, derive_insights, summarize_distribution, ProgressTracker};
pub use journal::{analyze_text, JournalStore};
pub use sensing::{EmotionClassifier, RandomClassifier, SamplingController, VoiceRecorder};
pub use settings::{EngineSettings, SettingsStore};
pub use utils::init_logging;

/// Everything one user session needs, built from engine settings.
///
/// All state is in memory and lives exactly as long as this value.
pub struct EqEngine {
    pub settings: EngineSettings,
    pub assessment: AssessmentSession,
    pub journal: JournalStore,
    pub camera: SamplingController,
    pub voice: VoiceRecorder,
    pub progress: ProgressTracker,
    pub classifier: Arc<dyn EmotionClassifier>,
}

impl EqEngine {
    /// Build an engine with the stub classifier and the system clock.
    pub fn new(settings: EngineSettings) -> Result<Self> {
        Self::with_parts(settings, Arc::new(RandomClassifier::new()), Arc::new(SystemClock))
    }

    pub fn with_parts(
        settings: EngineSettings,
        classifier: Arc<dyn EmotionClassifier>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        settings.validate()?;

        let assessment = AssessmentSession::with_clock(question_bank().to_vec(), clock.clone())?;
        let journal = JournalStore::with_clock(settings.analysis_delay(), clock.clone());
        let camera = SamplingController::with_clock(
            settings.sample_interval(),
            settings.history_limit,
            clock.clone(),
        );
        let voice = VoiceRecorder::with_clock(settings.recording_tick(), clock);

        Ok(Self {
            settings,
            assessment,
            journal,
            camera,
            voice,
            progress: ProgressTracker::new(),
            classifier,
        })
    }

    /// Initialise logging, load settings from `settings_path` and build an engine.
    pub fn open(settings_path: PathBuf) -> Result<Self> {
        init_logging();
        info!("eqlens engine starting up...");

        let store = SettingsStore::new(settings_path)?;
        let engine = Self::new(store.settings())?;
        info!(
            "engine ready: sampling every {}ms, history of {}",
            engine.settings.sample_interval_ms, engine.settings.history_limit
        );
        Ok(engine)
    }

    pub async fn start_camera(&self) -> Result<()> {
        self.camera.start(self.classifier.clone()).await
    }

    /// Stop the camera session and fold readings not yet recorded into the
    /// progress history.
    pub async fn stop_camera(&mut self) -> Result<()> {
        self.camera.stop().await?;
        for reading in self.camera.take_new_readings().await {
            self.progress.record_reading(&reading);
        }
        Ok(())
    }

    /// Finish the questionnaire and append the result to the score history.
    pub fn complete_assessment(&mut self) -> CoreResult<models::AssessmentResult> {
        let result = self.assessment.complete()?.clone();
        self.progress.record_assessment(&result);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Level;
    use std::time::Duration;

    fn engine() -> EqEngine {
        let settings = EngineSettings {
            analysis_delay_ms: 0,
            ..EngineSettings::default()
        };
        EqEngine::with_parts(
            settings,
            Arc::new(RandomClassifier::seeded(9)),
            Arc::new(SystemClock),
        )
        .unwrap()
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let settings = EngineSettings {
            history_limit: 0,
            ..EngineSettings::default()
        };
        assert!(EqEngine::new(settings).is_err());
    }

    #[test]
    fn open_uses_defaults_without_a_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let engine = EqEngine::open(dir.path().join("settings.json")).unwrap();
        assert_eq!(engine.settings, EngineSettings::default());
    }

    #[test]
    fn completed_assessments_feed_progression() {
        let mut engine = engine();
        for option in [1, 2] {
            engine.assessment.reset();
            engine.assessment.start().unwrap();
            for question in question_bank() {
                engine.assessment.answer(question.id, option).unwrap();
            }
            engine.complete_assessment().unwrap();
        }

        assert_eq!(engine.assessment.result().unwrap().level, Level::Advanced);
        let delta = engine.progress.progression().unwrap();
        assert_eq!(delta.overall_change, 25.0);
        assert_eq!(delta.latest, 75.0);
    }

    #[tokio::test(start_paused = true)]
    async fn camera_readings_reach_the_dashboard() {
        let mut engine = engine();
        engine.start_camera().await.unwrap();
        tokio::time::sleep(Duration::from_millis(4_100)).await;
        engine.stop_camera().await.unwrap();

        let stats = engine.progress.source_stats();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].label, "camera");
        assert_eq!(stats[0].count, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn repeated_camera_sessions_record_each_reading_once() {
        let mut engine = engine();

        engine.start_camera().await.unwrap();
        tokio::time::sleep(Duration::from_millis(4_100)).await;
        engine.stop_camera().await.unwrap();
        assert_eq!(engine.progress.emotions().len(), 2);

        engine.start_camera().await.unwrap();
        tokio::time::sleep(Duration::from_millis(2_100)).await;
        engine.stop_camera().await.unwrap();

        assert_eq!(engine.progress.emotions().len(), 3);
        assert_eq!(engine.camera.history().await.len(), 3);
        let stats = engine.progress.source_stats();
        assert_eq!(stats[0].count, 3);
        assert_eq!(stats[0].percentage, 100.0);
    }
}
