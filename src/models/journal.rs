use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Emotion, Sentiment, Theme};

/// Keyword-derived reading of a piece of free text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TextAnalysis {
    pub sentiment: Sentiment,
    /// Never empty; `[Neutral]` when no emotion keyword matched.
    pub emotions: Vec<Emotion>,
    pub confidence: f64,
    pub key_themes: Vec<Theme>,
    pub word_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub analysis: TextAnalysis,
}
