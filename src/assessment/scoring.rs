use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashSet};

use crate::error::{CoreError, CoreResult};
use crate::models::{AnswerSet, AssessmentResult, Category, Level, Question};

const MAX_WEIGHT: u8 = 4;
const RANKED_CATEGORY_COUNT: usize = 2;

/// Running weight total for one category, in question-bank order.
struct CategoryTally {
    category: Category,
    sum: u32,
    answered: u32,
}

/// Score an answer set against a question bank, stamped with the current time.
pub fn score_assessment(questions: &[Question], answers: &AnswerSet) -> CoreResult<AssessmentResult> {
    score_assessment_at(questions, answers, Utc::now())
}

/// Score an answer set against a question bank.
///
/// The overall score divides by the full bank size, so unanswered questions
/// pull it down. Category scores divide only by answered questions, and
/// categories without any answer are left out of the result entirely.
pub fn score_assessment_at(
    questions: &[Question],
    answers: &AnswerSet,
    completed_at: DateTime<Utc>,
) -> CoreResult<AssessmentResult> {
    ensure_unique_ids(questions)?;

    if let Some(unknown) = answers
        .keys()
        .find(|id| !questions.iter().any(|question| question.id == **id))
    {
        return Err(CoreError::UnknownQuestion(*unknown));
    }

    let mut total: u32 = 0;
    let mut tallies: Vec<CategoryTally> = Vec::new();

    for question in questions {
        validate_question(question)?;

        let slot = match tallies.iter().position(|t| t.category == question.category) {
            Some(slot) => slot,
            None => {
                tallies.push(CategoryTally {
                    category: question.category,
                    sum: 0,
                    answered: 0,
                });
                tallies.len() - 1
            }
        };

        let Some(&index) = answers.get(&question.id) else {
            continue;
        };

        let weight = u32::from(answer_weight(question, index)?);
        total += weight;
        tallies[slot].sum += weight;
        tallies[slot].answered += 1;
    }

    let max_total = questions.len() as f64 * f64::from(MAX_WEIGHT);
    let overall_score = clamp_score(f64::from(total) / max_total * 100.0);

    // Answered categories in first-appearance order; the stable sort below keeps
    // that order among equal scores.
    let mut ranked: Vec<(Category, f64)> = tallies
        .iter()
        .filter(|tally| tally.answered > 0)
        .map(|tally| {
            let max = f64::from(tally.answered) * f64::from(MAX_WEIGHT);
            (tally.category, clamp_score(f64::from(tally.sum) / max * 100.0))
        })
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    let strengths = ranked
        .iter()
        .take(RANKED_CATEGORY_COUNT)
        .map(|(category, _)| *category)
        .collect();
    let improvements = ranked
        .iter()
        .rev()
        .take(RANKED_CATEGORY_COUNT)
        .map(|(category, _)| *category)
        .collect();

    let category_scores: BTreeMap<Category, f64> = ranked.into_iter().collect();

    Ok(AssessmentResult {
        overall_score,
        category_scores,
        strengths,
        improvements,
        level: Level::from_score(overall_score),
        completed_at,
    })
}

/// Weight of the chosen option, rejecting indices the question does not declare.
pub fn answer_weight(question: &Question, index: usize) -> CoreResult<u8> {
    if index >= question.option_count() {
        return Err(CoreError::OptionOutOfRange {
            question_id: question.id,
            index,
            option_count: question.option_count(),
        });
    }

    question
        .weights
        .get(index)
        .copied()
        .ok_or(CoreError::WeightCountMismatch {
            question_id: question.id,
            options: question.options.len(),
            weights: question.weights.len(),
        })
}

/// Reject an empty bank or one that reuses a question id.
pub(crate) fn ensure_unique_ids(questions: &[Question]) -> CoreResult<()> {
    if questions.is_empty() {
        return Err(CoreError::EmptyQuestionBank);
    }

    let mut seen = HashSet::with_capacity(questions.len());
    match questions.iter().find(|question| !seen.insert(question.id)) {
        Some(duplicate) => Err(CoreError::DuplicateQuestion(duplicate.id)),
        None => Ok(()),
    }
}

fn validate_question(question: &Question) -> CoreResult<()> {
    if question.options.len() != question.weights.len() {
        return Err(CoreError::WeightCountMismatch {
            question_id: question.id,
            options: question.options.len(),
            weights: question.weights.len(),
        });
    }

    if let Some((index, weight)) = question
        .weights
        .iter()
        .enumerate()
        .find(|(_, weight)| !(1..=MAX_WEIGHT).contains(*weight))
    {
        return Err(CoreError::InvalidWeight {
            question_id: question.id,
            index,
            weight: *weight,
        });
    }

    Ok(())
}

pub(crate) fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::question_bank;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap()
    }

    fn uniform_answers(index: usize) -> AnswerSet {
        question_bank().iter().map(|q| (q.id, index)).collect()
    }

    #[test]
    fn all_top_answers_score_expert() {
        let result = score_assessment_at(question_bank(), &uniform_answers(3), at()).unwrap();
        assert_eq!(result.overall_score, 100.0);
        assert_eq!(result.level, Level::Expert);
        assert!(result.category_scores.values().all(|score| *score == 100.0));
        assert_eq!(result.completed_at, at());
    }

    #[test]
    fn all_bottom_answers_score_developing() {
        let result = score_assessment_at(question_bank(), &uniform_answers(0), at()).unwrap();
        assert_eq!(result.overall_score, 25.0);
        assert_eq!(result.level, Level::Developing);
        assert_eq!(result.category_scores.len(), 5);
    }

    #[test]
    fn single_answer_contributes_its_weight() {
        let mut answers = AnswerSet::new();
        answers.insert(1, 2);
        let result = score_assessment_at(question_bank(), &answers, at()).unwrap();

        // 3 out of a possible 12 * 4.
        assert!((result.overall_score - 3.0 / 48.0 * 100.0).abs() < 1e-9);
        assert_eq!(result.category_scores.len(), 1);
        assert_eq!(result.category_scores[&Category::SelfAwareness], 75.0);
    }

    #[test]
    fn unanswered_categories_are_absent() {
        let answers: AnswerSet = [(1, 3), (3, 0)].into_iter().collect();
        let result = score_assessment_at(question_bank(), &answers, at()).unwrap();

        assert_eq!(result.category_scores.len(), 2);
        assert!(!result.category_scores.contains_key(&Category::Empathy));
        assert!(!result.category_scores.contains_key(&Category::Motivation));
    }

    #[test]
    fn overall_score_is_monotonic_per_answer() {
        let base = uniform_answers(1);
        for question in question_bank() {
            let mut previous = f64::MIN;
            for index in 0..4 {
                let mut answers = base.clone();
                answers.insert(question.id, index);
                let score = score_assessment_at(question_bank(), &answers, at())
                    .unwrap()
                    .overall_score;
                assert!(score >= previous, "question {} index {}", question.id, index);
                previous = score;
            }
        }
    }

    #[test]
    fn strengths_and_improvements_follow_ranking() {
        // SA 100, SR 75, MO 50, EM 25, SS 62.5
        let answers: AnswerSet = [
            (1, 3),
            (2, 3),
            (11, 3),
            (3, 2),
            (4, 2),
            (5, 1),
            (6, 1),
            (12, 1),
            (7, 0),
            (8, 0),
            (9, 2),
            (10, 1),
        ]
        .into_iter()
        .collect();
        let result = score_assessment_at(question_bank(), &answers, at()).unwrap();

        assert_eq!(
            result.strengths,
            vec![Category::SelfAwareness, Category::SelfRegulation]
        );
        assert_eq!(result.improvements, vec![Category::Empathy, Category::Motivation]);
        assert_eq!(result.strength_labels(), vec!["Self Awareness", "Self Regulation"]);
        // With five categories the middle one is in neither list.
        assert!(!result.strengths.contains(&Category::SocialSkills));
        assert!(!result.improvements.contains(&Category::SocialSkills));
    }

    #[test]
    fn few_categories_may_overlap() {
        let answers: AnswerSet = [(1, 3)].into_iter().collect();
        let result = score_assessment_at(question_bank(), &answers, at()).unwrap();
        assert_eq!(result.strengths, vec![Category::SelfAwareness]);
        assert_eq!(result.improvements, vec![Category::SelfAwareness]);
    }

    #[test]
    fn ranked_lists_are_bounded_and_drawn_from_scores() {
        for index in 0..4 {
            let result =
                score_assessment_at(question_bank(), &uniform_answers(index), at()).unwrap();
            assert!(result.strengths.len() <= 2);
            assert!(result.improvements.len() <= 2);
            for category in result.strengths.iter().chain(result.improvements.iter()) {
                assert!(result.category_scores.contains_key(category));
            }
            for strength in &result.strengths {
                assert!(!result.improvements.contains(strength));
            }
        }
    }

    #[test]
    fn empty_bank_is_rejected() {
        let err = score_assessment_at(&[], &AnswerSet::new(), at()).unwrap_err();
        assert_eq!(err, CoreError::EmptyQuestionBank);
    }

    #[test]
    fn unknown_question_is_rejected() {
        let answers: AnswerSet = [(99, 0)].into_iter().collect();
        let err = score_assessment_at(question_bank(), &answers, at()).unwrap_err();
        assert_eq!(err, CoreError::UnknownQuestion(99));
    }

    #[test]
    fn out_of_range_option_is_rejected() {
        let answers: AnswerSet = [(4, 4)].into_iter().collect();
        let err = score_assessment_at(question_bank(), &answers, at()).unwrap_err();
        assert_eq!(
            err,
            CoreError::OptionOutOfRange {
                question_id: 4,
                index: 4,
                option_count: 4
            }
        );
    }

    #[test]
    fn invalid_weight_is_rejected() {
        let question = Question::new(1, Category::Empathy, "?", ["a", "b", "c", "d"], [1, 2, 5, 4]);
        let err = score_assessment_at(&[question], &AnswerSet::new(), at()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidWeight { weight: 5, index: 2, .. }));
    }

    #[test]
    fn duplicate_question_ids_are_rejected() {
        let first = Question::new(7, Category::Empathy, "?", ["a", "b", "c", "d"], [1, 2, 3, 4]);
        let second = Question::new(7, Category::Motivation, "?", ["a", "b", "c", "d"], [1, 2, 3, 4]);
        let answers: AnswerSet = [(7, 3)].into_iter().collect();

        let err = score_assessment_at(&[first, second], &answers, at()).unwrap_err();
        assert_eq!(err, CoreError::DuplicateQuestion(7));
    }
}
