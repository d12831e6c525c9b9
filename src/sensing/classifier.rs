//! Emotion classification seam for camera frames and voice clips.
//!
//! No real model ships with the engine. [`RandomClassifier`] stands in for one
//! and is only ever used as an explicit stub; tests inject scripted classifiers.

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::sync::Mutex;

use crate::models::{Emotion, Sentiment, Source};

const CAMERA_CONFIDENCE: Range<f64> = 0.6..1.0;
const VOICE_CONFIDENCE: Range<f64> = 0.7..1.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FrameInfo {
    pub width: u32,
    pub height: u32,
}

impl Default for FrameInfo {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClipInfo {
    pub duration_secs: u64,
}

/// What the capture layer hands to a classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorInput {
    Frame(FrameInfo),
    Clip(ClipInfo),
}

impl SensorInput {
    pub fn source(&self) -> Source {
        match self {
            SensorInput::Frame(_) => Source::Camera,
            SensorInput::Clip(_) => Source::Voice,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub emotion: Emotion,
    /// In `[0, 1]`.
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoiceClassification {
    pub emotion: Emotion,
    pub confidence: f64,
    pub sentiment: Sentiment,
    /// 0-100.
    pub energy: f64,
}

pub trait EmotionClassifier: Send + Sync {
    fn classify(&self, input: &SensorInput) -> Classification;

    /// Richer analysis for a finished voice clip. The default derives sentiment
    /// from the emotion and reports mid-range energy.
    fn classify_voice(&self, clip: &ClipInfo) -> VoiceClassification {
        let Classification {
            emotion,
            confidence,
        } = self.classify(&SensorInput::Clip(*clip));
        VoiceClassification {
            emotion,
            confidence,
            sentiment: emotion.polarity(),
            energy: 50.0,
        }
    }
}

/// Uniformly random stub classifier.
pub struct RandomClassifier {
    rng: Mutex<StdRng>,
}

impl RandomClassifier {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic stream, for reproducible demos and tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut guard = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }
}

impl Default for RandomClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn pick_emotion(rng: &mut StdRng) -> Emotion {
    Emotion::SENSOR
        .choose(rng)
        .copied()
        .unwrap_or(Emotion::Neutral)
}

impl EmotionClassifier for RandomClassifier {
    fn classify(&self, input: &SensorInput) -> Classification {
        let range = match input {
            SensorInput::Frame(_) => CAMERA_CONFIDENCE,
            SensorInput::Clip(_) => VOICE_CONFIDENCE,
        };
        self.with_rng(|rng| Classification {
            emotion: pick_emotion(rng),
            confidence: rng.gen_range(range),
        })
    }

    fn classify_voice(&self, _clip: &ClipInfo) -> VoiceClassification {
        self.with_rng(|rng| VoiceClassification {
            emotion: pick_emotion(rng),
            confidence: rng.gen_range(VOICE_CONFIDENCE),
            sentiment: Sentiment::ALL
                .choose(rng)
                .copied()
                .unwrap_or(Sentiment::Neutral),
            energy: rng.gen_range(0.0..100.0),
        })
    }
}
