use crate::models::{
    AssessmentResult, CategoryChange, DistributionEntry, DistributionKey, EmotionEntry, Reading,
    ScoreDelta, ScoreSnapshot,
};

use super::distribution::summarize_distribution;

/// Change between the two most recent snapshots.
///
/// `snapshots` is ordered oldest to newest. Fewer than two snapshots means there
/// is no trend yet, which is reported as `None` rather than a zero delta.
pub fn compute_delta(snapshots: &[ScoreSnapshot]) -> Option<ScoreDelta> {
    let [.., previous, latest] = snapshots else {
        return None;
    };

    let category_changes = latest
        .category_scores
        .iter()
        .map(|(category, current)| CategoryChange {
            category: *category,
            change: previous
                .category_scores
                .get(category)
                .map(|before| current - before),
            current: *current,
        })
        .collect();

    Some(ScoreDelta {
        overall_change: latest.overall_score - previous.overall_score,
        category_changes,
        latest: latest.overall_score,
    })
}

/// Emotion readings and assessment history backing the progress dashboard.
#[derive(Debug, Clone, Default)]
pub struct ProgressTracker {
    emotions: Vec<EmotionEntry>,
    snapshots: Vec<ScoreSnapshot>,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_emotion(&mut self, entry: EmotionEntry) {
        self.emotions.push(entry);
    }

    pub fn record_reading(&mut self, reading: &Reading) {
        self.emotions.push(EmotionEntry::from(reading));
    }

    pub fn record_snapshot(&mut self, snapshot: ScoreSnapshot) {
        self.snapshots.push(snapshot);
    }

    pub fn record_assessment(&mut self, result: &AssessmentResult) {
        self.snapshots.push(ScoreSnapshot::from(result));
    }

    pub fn emotions(&self) -> &[EmotionEntry] {
        &self.emotions
    }

    pub fn snapshots(&self) -> &[ScoreSnapshot] {
        &self.snapshots
    }

    pub fn emotion_stats(&self) -> Vec<DistributionEntry> {
        summarize_distribution(&self.emotions, DistributionKey::Emotion)
    }

    pub fn source_stats(&self) -> Vec<DistributionEntry> {
        summarize_distribution(&self.emotions, DistributionKey::Source)
    }

    pub fn progression(&self) -> Option<ScoreDelta> {
        compute_delta(&self.snapshots)
    }
}
