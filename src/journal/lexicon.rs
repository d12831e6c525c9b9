//! Static keyword tables used by the text analyzer.

use crate::models::{Emotion, Theme};

/// Tokens that count toward positive sentiment (exact token match).
pub const POSITIVE_WORDS: &[&str] = &[
    "happy",
    "joy",
    "excited",
    "grateful",
    "love",
    "amazing",
    "wonderful",
    "great",
    "excellent",
    "good",
];

/// Tokens that count toward negative sentiment (exact token match).
pub const NEGATIVE_WORDS: &[&str] = &[
    "sad",
    "angry",
    "frustrated",
    "upset",
    "worried",
    "anxious",
    "terrible",
    "bad",
    "awful",
    "hate",
];

/// Emotion keywords, matched as substrings of the lower-cased text. Order here is
/// the order emotions are reported in.
pub const EMOTION_KEYWORDS: &[(Emotion, &[&str])] = &[
    (
        Emotion::Happy,
        &["happy", "joy", "excited", "cheerful", "delighted"],
    ),
    (
        Emotion::Sad,
        &["sad", "depressed", "melancholy", "down", "upset"],
    ),
    (
        Emotion::Angry,
        &["angry", "furious", "annoyed", "irritated", "mad"],
    ),
    (
        Emotion::Anxious,
        &["anxious", "worried", "nervous", "stressed", "concerned"],
    ),
    (
        Emotion::Grateful,
        &["grateful", "thankful", "blessed", "appreciative"],
    ),
    (
        Emotion::Confused,
        &["confused", "lost", "uncertain", "unclear", "puzzled"],
    ),
];

/// Theme words are their own keyword and match as substrings.
pub const THEMES: &[Theme] = &Theme::ALL;

pub fn is_positive(token: &str) -> bool {
    POSITIVE_WORDS.contains(&token)
}

pub fn is_negative(token: &str) -> bool {
    NEGATIVE_WORDS.contains(&token)
}
