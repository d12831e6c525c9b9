use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Category;

/// Selected option index keyed by question id.
pub type AnswerSet = BTreeMap<u32, usize>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Developing,
    Proficient,
    Advanced,
    Expert,
}

impl Level {
    /// Classify an overall score; each threshold is an inclusive lower bound.
    pub fn from_score(overall_score: f64) -> Self {
        if overall_score >= 85.0 {
            Level::Expert
        } else if overall_score >= 70.0 {
            Level::Advanced
        } else if overall_score >= 55.0 {
            Level::Proficient
        } else {
            Level::Developing
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Developing => "Developing",
            Level::Proficient => "Proficient",
            Level::Advanced => "Advanced",
            Level::Expert => "Expert",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub overall_score: f64,
    /// Only categories with at least one answered question appear here.
    pub category_scores: BTreeMap<Category, f64>,
    /// Highest scoring categories, best first.
    pub strengths: Vec<Category>,
    /// Lowest scoring categories, worst first.
    pub improvements: Vec<Category>,
    pub level: Level,
    pub completed_at: DateTime<Utc>,
}

impl AssessmentResult {
    pub fn strength_labels(&self) -> Vec<&'static str> {
        self.strengths.iter().map(Category::display_name).collect()
    }

    pub fn improvement_labels(&self) -> Vec<&'static str> {
        self.improvements.iter().map(Category::display_name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_thresholds_are_inclusive() {
        assert_eq!(Level::from_score(85.0), Level::Expert);
        assert_eq!(Level::from_score(84.99), Level::Advanced);
        assert_eq!(Level::from_score(70.0), Level::Advanced);
        assert_eq!(Level::from_score(55.0), Level::Proficient);
        assert_eq!(Level::from_score(54.9), Level::Developing);
        assert_eq!(Level::from_score(0.0), Level::Developing);
    }

    #[test]
    fn ranked_categories_render_display_labels() {
        let result = AssessmentResult {
            overall_score: 62.5,
            category_scores: BTreeMap::new(),
            strengths: vec![Category::Empathy, Category::SelfAwareness],
            improvements: vec![Category::SocialSkills, Category::Motivation],
            level: Level::Proficient,
            completed_at: Utc::now(),
        };

        assert_eq!(result.strength_labels(), vec!["Empathy", "Self Awareness"]);
        assert_eq!(result.improvement_labels(), vec!["Social Skills", "Motivation"]);
    }
}
