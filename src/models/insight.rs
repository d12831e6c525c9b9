use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{AssessmentResult, Category};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub pattern: String,
    pub description: String,
    /// Share of entries exhibiting the pattern, 0-100.
    pub frequency: f64,
}

/// Assessment scores at a point in time, the input to trend deltas.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSnapshot {
    pub date: NaiveDate,
    pub overall_score: f64,
    pub category_scores: BTreeMap<Category, f64>,
}

impl From<&AssessmentResult> for ScoreSnapshot {
    fn from(result: &AssessmentResult) -> Self {
        Self {
            date: result.completed_at.date_naive(),
            overall_score: result.overall_score,
            category_scores: result.category_scores.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryChange {
    pub category: Category,
    /// `None` when the older snapshot has no score for this category.
    pub change: Option<f64>,
    pub current: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDelta {
    pub overall_change: f64,
    pub category_changes: Vec<CategoryChange>,
    pub latest: f64,
}

/// Field used to bucket readings in a distribution summary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DistributionKey {
    Emotion,
    Source,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DistributionEntry {
    pub label: String,
    pub count: usize,
    pub percentage: f64,
}
