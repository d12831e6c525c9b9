use serde::{Deserialize, Serialize};

/// One of the five emotional-intelligence dimensions.
///
/// Declaration order matches the order in which categories first appear in the
/// built-in question bank.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    SelfAwareness,
    SelfRegulation,
    Motivation,
    Empathy,
    SocialSkills,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::SelfAwareness,
        Category::SelfRegulation,
        Category::Motivation,
        Category::Empathy,
        Category::SocialSkills,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::SelfAwareness => "self-awareness",
            Category::SelfRegulation => "self-regulation",
            Category::Motivation => "motivation",
            Category::Empathy => "empathy",
            Category::SocialSkills => "social-skills",
        }
    }

    /// Title-cased label shown next to strengths and improvements.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::SelfAwareness => "Self Awareness",
            Category::SelfRegulation => "Self Regulation",
            Category::Motivation => "Motivation",
            Category::Empathy => "Empathy",
            Category::SocialSkills => "Social Skills",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single multiple-choice questionnaire item. `weights[i]` scores `options[i]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u32,
    pub category: Category,
    pub prompt: String,
    pub options: Vec<String>,
    pub weights: Vec<u8>,
}

impl Question {
    pub fn new(
        id: u32,
        category: Category,
        prompt: &str,
        options: [&str; 4],
        weights: [u8; 4],
    ) -> Self {
        Self {
            id,
            category,
            prompt: prompt.to_string(),
            options: options.iter().map(|option| option.to_string()).collect(),
            weights: weights.to_vec(),
        }
    }

    pub fn option_count(&self) -> usize {
        self.options.len()
    }
}
