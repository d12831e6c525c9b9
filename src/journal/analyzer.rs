use crate::models::{Emotion, Sentiment, TextAnalysis};

use super::lexicon::{is_negative, is_positive, EMOTION_KEYWORDS, THEMES};

const BASE_CONFIDENCE: f64 = 50.0;
const MAX_CONFIDENCE: f64 = 90.0;
const WORDS_PER_CONFIDENCE_POINT: f64 = 10.0;
const CONFIDENCE_PER_EMOTION: f64 = 10.0;

/// Keyword analysis of free text.
///
/// Sentiment counts exact lower-cased tokens, while emotions and themes match
/// keywords anywhere in the lower-cased text ("downtown" counts as sad). The two
/// rules are intentionally kept apart; callers rely on the current outputs.
pub fn analyze_text(text: &str) -> TextAnalysis {
    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();
    let word_count = tokens.len();

    let positive = tokens.iter().filter(|token| is_positive(token)).count();
    let negative = tokens.iter().filter(|token| is_negative(token)).count();
    let sentiment = classify_sentiment(positive, negative);

    let matched: Vec<Emotion> = EMOTION_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map(|(emotion, _)| *emotion)
        .collect();

    let key_themes = THEMES
        .iter()
        .filter(|theme| lowered.contains(theme.as_str()))
        .copied()
        .collect();

    let confidence = text_confidence(word_count, matched.len());

    let emotions = if matched.is_empty() {
        vec![Emotion::Neutral]
    } else {
        matched
    };

    TextAnalysis {
        sentiment,
        emotions,
        confidence,
        key_themes,
        word_count,
    }
}

fn classify_sentiment(positive: usize, negative: usize) -> Sentiment {
    match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => Sentiment::Positive,
        std::cmp::Ordering::Less => Sentiment::Negative,
        std::cmp::Ordering::Equal => Sentiment::Neutral,
    }
}

/// Monotonic heuristic saturating at 90; not a probability.
fn text_confidence(word_count: usize, matched_emotions: usize) -> f64 {
    let raw = BASE_CONFIDENCE
        + word_count as f64 / WORDS_PER_CONFIDENCE_POINT
        + matched_emotions as f64 * CONFIDENCE_PER_EMOTION;
    raw.min(MAX_CONFIDENCE)
}
