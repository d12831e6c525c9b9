use serde::{Deserialize, Serialize};

/// Emotion labels produced by the text analyzer and the sensor classifiers.
///
/// The journal lexicon covers happy..confused; camera and voice classifiers emit
/// happy, sad, angry, surprised, fearful and neutral.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Emotion {
    Happy,
    Sad,
    Angry,
    Anxious,
    Grateful,
    Confused,
    Surprised,
    Fearful,
    Neutral,
}

impl Emotion {
    /// The label set a sensor classifier chooses from.
    pub const SENSOR: [Emotion; 6] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Surprised,
        Emotion::Fearful,
        Emotion::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
            Emotion::Anxious => "anxious",
            Emotion::Grateful => "grateful",
            Emotion::Confused => "confused",
            Emotion::Surprised => "surprised",
            Emotion::Fearful => "fearful",
            Emotion::Neutral => "neutral",
        }
    }

    /// Coarse polarity implied by the emotion alone.
    pub fn polarity(&self) -> Sentiment {
        match self {
            Emotion::Happy | Emotion::Grateful => Sentiment::Positive,
            Emotion::Sad | Emotion::Angry | Emotion::Anxious | Emotion::Fearful => {
                Sentiment::Negative
            }
            Emotion::Confused | Emotion::Surprised | Emotion::Neutral => Sentiment::Neutral,
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];
}

/// Topic words picked out of journal text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Theme {
    Work,
    Family,
    Relationship,
    Health,
    Goals,
    Friends,
    Stress,
    Happiness,
}

impl Theme {
    pub const ALL: [Theme; 8] = [
        Theme::Work,
        Theme::Family,
        Theme::Relationship,
        Theme::Health,
        Theme::Goals,
        Theme::Friends,
        Theme::Stress,
        Theme::Happiness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Work => "work",
            Theme::Family => "family",
            Theme::Relationship => "relationship",
            Theme::Health => "health",
            Theme::Goals => "goals",
            Theme::Friends => "friends",
            Theme::Stress => "stress",
            Theme::Happiness => "happiness",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input channel a reading came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Source {
    Camera,
    Voice,
    Text,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Camera => "camera",
            Source::Voice => "voice",
            Source::Text => "text",
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
