pub mod classifier;
pub mod controller;
pub mod history;
mod loop_worker;
pub mod voice;

pub use classifier::{EmotionClassifier, RandomClassifier, SensorInput};
pub use controller::{SamplingController, SamplingSnapshot, SamplingStatus};
pub use history::ReadingHistory;
pub use voice::VoiceRecorder;
