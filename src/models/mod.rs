mod assessment;
mod emotion;
mod insight;
mod journal;
mod question;
mod reading;

pub use assessment::{AnswerSet, AssessmentResult, Level};
pub use emotion::{Emotion, Sentiment, Source, Theme};
pub use insight::{
    CategoryChange, DistributionEntry, DistributionKey, Insight, ScoreDelta, ScoreSnapshot,
};
pub use journal::{JournalEntry, TextAnalysis};
pub use question::{Category, Question};
pub use reading::{EmotionEntry, Reading, SignalRecord, VoiceAnalysis, VoiceRecording};
