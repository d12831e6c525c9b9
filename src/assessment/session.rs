use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::error::{CoreError, CoreResult};
use crate::models::{AnswerSet, AssessmentResult, Question};

use super::scoring::{answer_weight, ensure_unique_ids, score_assessment_at};

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::log_info;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum AssessmentStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

/// Per-user walk through the questionnaire.
///
/// Owns the navigation cursor and answer map; scoring itself stays a pure
/// function in [`super::scoring`].
pub struct AssessmentSession {
    questions: Vec<Question>,
    status: AssessmentStatus,
    current: usize,
    answers: AnswerSet,
    result: Option<AssessmentResult>,
    clock: Arc<dyn Clock>,
}

impl AssessmentSession {
    pub fn new(questions: Vec<Question>) -> CoreResult<Self> {
        Self::with_clock(questions, Arc::new(SystemClock))
    }

    pub fn with_clock(questions: Vec<Question>, clock: Arc<dyn Clock>) -> CoreResult<Self> {
        ensure_unique_ids(&questions)?;

        Ok(Self {
            questions,
            status: AssessmentStatus::NotStarted,
            current: 0,
            answers: AnswerSet::new(),
            result: None,
            clock,
        })
    }

    pub fn status(&self) -> AssessmentStatus {
        self.status
    }

    pub fn start(&mut self) -> CoreResult<()> {
        match self.status {
            AssessmentStatus::Completed => Err(CoreError::AssessmentCompleted),
            AssessmentStatus::InProgress => Ok(()),
            AssessmentStatus::NotStarted => {
                self.status = AssessmentStatus::InProgress;
                log_info!("Assessment started ({} questions)", self.questions.len());
                Ok(())
            }
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn answer_for(&self, question_id: u32) -> Option<usize> {
        self.answers.get(&question_id).copied()
    }

    /// Percentage of the questionnaire reached, counting the current question.
    pub fn progress(&self) -> f64 {
        (self.current + 1) as f64 / self.questions.len() as f64 * 100.0
    }

    /// Record or overwrite the selected option for a question.
    pub fn answer(&mut self, question_id: u32, option_index: usize) -> CoreResult<()> {
        self.ensure_in_progress()?;

        let question = self
            .questions
            .iter()
            .find(|question| question.id == question_id)
            .ok_or(CoreError::UnknownQuestion(question_id))?;
        answer_weight(question, option_index)?;

        self.answers.insert(question_id, option_index);
        Ok(())
    }

    /// Advance to the next question, or complete and score on the last one.
    ///
    /// The current question must be answered first. Returns the result when
    /// this call completed the assessment.
    pub fn next(&mut self) -> CoreResult<Option<&AssessmentResult>> {
        self.ensure_in_progress()?;

        let current_id = self.current_question().id;
        if !self.answers.contains_key(&current_id) {
            return Err(CoreError::QuestionUnanswered(current_id));
        }

        if self.current + 1 < self.questions.len() {
            self.current += 1;
            return Ok(None);
        }

        self.complete().map(Some)
    }

    /// Step back one question; a no-op on the first question.
    pub fn previous(&mut self) -> CoreResult<()> {
        self.ensure_in_progress()?;
        self.current = self.current.saturating_sub(1);
        Ok(())
    }

    pub fn complete(&mut self) -> CoreResult<&AssessmentResult> {
        self.ensure_in_progress()?;

        let result = score_assessment_at(&self.questions, &self.answers, self.clock.now())?;
        log_info!(
            "Assessment completed: {:.1}% ({}) with {}/{} answers",
            result.overall_score,
            result.level.as_str(),
            self.answers.len(),
            self.questions.len()
        );

        self.status = AssessmentStatus::Completed;
        let stored = self.result.insert(result);
        Ok(&*stored)
    }

    pub fn result(&self) -> Option<&AssessmentResult> {
        self.result.as_ref()
    }

    /// Discard answers and result and return to the not-started state.
    pub fn reset(&mut self) {
        self.status = AssessmentStatus::NotStarted;
        self.current = 0;
        self.answers.clear();
        self.result = None;
        log_info!("Assessment reset");
    }

    fn ensure_in_progress(&self) -> CoreResult<()> {
        match self.status {
            AssessmentStatus::InProgress => Ok(()),
            AssessmentStatus::NotStarted => Err(CoreError::AssessmentNotStarted),
            AssessmentStatus::Completed => Err(CoreError::AssessmentCompleted),
        }
    }
}
