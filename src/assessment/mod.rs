pub mod bank;
pub mod scoring;
pub mod session;

pub use bank::question_bank;
pub use scoring::{score_assessment, score_assessment_at};
pub use session::{AssessmentSession, AssessmentStatus};
