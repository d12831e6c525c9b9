pub mod distribution;
pub mod patterns;
pub mod progress;

pub use distribution::summarize_distribution;
pub use patterns::derive_insights;
pub use progress::{compute_delta, ProgressTracker};
