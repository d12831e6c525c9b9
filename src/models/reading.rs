//! Sensor readings and the records the progress dashboard aggregates.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{Emotion, Sentiment, Source};

/// A single timestamped classifier output. `confidence` is in `[0, 1]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    pub emotion: Emotion,
    pub confidence: f64,
    pub source: Source,
    pub timestamp: DateTime<Utc>,
}

/// Analysis attached to a finished voice recording.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VoiceAnalysis {
    pub emotion: Emotion,
    pub confidence: f64,
    pub sentiment: Sentiment,
    /// Vocal energy, 0-100.
    pub energy: f64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VoiceRecording {
    pub id: String,
    pub duration_secs: u64,
    pub analysis: VoiceAnalysis,
    pub timestamp: DateTime<Utc>,
}

/// Day-level record of a detected emotion, as shown on the progress dashboard.
/// `confidence` is a percentage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmotionEntry {
    pub date: NaiveDate,
    pub emotion: Emotion,
    pub confidence: f64,
    pub source: Source,
}

impl From<&Reading> for EmotionEntry {
    fn from(reading: &Reading) -> Self {
        Self {
            date: reading.timestamp.date_naive(),
            emotion: reading.emotion,
            confidence: (reading.confidence * 100.0).clamp(0.0, 100.0),
            source: reading.source,
        }
    }
}

/// Anything that can be bucketed by emotion or by source channel.
pub trait SignalRecord {
    fn emotion(&self) -> Emotion;
    fn source(&self) -> Source;
}

impl SignalRecord for Reading {
    fn emotion(&self) -> Emotion {
        self.emotion
    }

    fn source(&self) -> Source {
        self.source
    }
}

impl SignalRecord for EmotionEntry {
    fn emotion(&self) -> Emotion {
        self.emotion
    }

    fn source(&self) -> Source {
        self.source
    }
}
