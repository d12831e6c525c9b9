//! Errors surfaced by the pure scoring and analysis functions.
//!
//! Everything here is an invalid-input condition: the caller handed the engine
//! something malformed. Missing history is not an error and is modelled with
//! `Option` instead.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("question bank is empty")]
    EmptyQuestionBank,

    #[error("answer references unknown question {0}")]
    UnknownQuestion(u32),

    #[error("question id {0} appears more than once in the bank")]
    DuplicateQuestion(u32),

    #[error("question {0} must be answered before moving on")]
    QuestionUnanswered(u32),

    #[error("option {index} is out of range for question {question_id} ({option_count} options)")]
    OptionOutOfRange {
        question_id: u32,
        index: usize,
        option_count: usize,
    },

    #[error("question {question_id} option {index} has weight {weight}, expected 1-4")]
    InvalidWeight {
        question_id: u32,
        index: usize,
        weight: u8,
    },

    #[error("question {question_id} declares {options} options but {weights} weights")]
    WeightCountMismatch {
        question_id: u32,
        options: usize,
        weights: usize,
    },

    #[error("journal entry is blank")]
    BlankEntry,

    #[error("assessment has not been started")]
    AssessmentNotStarted,

    #[error("assessment is already completed")]
    AssessmentCompleted,
}

pub type CoreResult<T> = Result<T, CoreError>;
