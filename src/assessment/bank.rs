//! The fixed twelve-question EQ questionnaire.
//!
//! Category counts are deliberately uneven (self-awareness and motivation have
//! three questions each, the rest two). Ranking-based strengths and improvements
//! depend on this layout, so it must not be rebalanced.

use std::sync::OnceLock;

use crate::models::{Category, Question};

const STANDARD_WEIGHTS: [u8; 4] = [1, 2, 3, 4];

static BANK: OnceLock<Vec<Question>> = OnceLock::new();

/// Shared, lazily built copy of the question bank.
pub fn question_bank() -> &'static [Question] {
    BANK.get_or_init(build_question_bank)
}

fn build_question_bank() -> Vec<Question> {
    use Category::*;

    vec![
        Question::new(
            1,
            SelfAwareness,
            "How well do you understand your own emotions when they arise?",
            [
                "I rarely notice my emotions until they become overwhelming",
                "I sometimes recognize my emotions but struggle to understand why I feel them",
                "I generally understand my emotions and can identify their triggers",
                "I have excellent awareness of my emotions and their underlying causes",
            ],
            STANDARD_WEIGHTS,
        ),
        Question::new(
            2,
            SelfAwareness,
            "When facing a stressful situation, how accurately can you predict your emotional response?",
            [
                "I have no idea how I'll react emotionally",
                "I can sometimes predict my reactions but am often surprised",
                "I usually know how I'll react emotionally to situations",
                "I can accurately predict and prepare for my emotional responses",
            ],
            STANDARD_WEIGHTS,
        ),
        Question::new(
            3,
            SelfRegulation,
            "How do you handle anger or frustration in professional settings?",
            [
                "I often express anger immediately without thinking",
                "I struggle to control my anger but sometimes manage to hold back",
                "I can usually manage my anger and express it appropriately",
                "I effectively control my anger and channel it constructively",
            ],
            STANDARD_WEIGHTS,
        ),
        Question::new(
            4,
            SelfRegulation,
            "When you make a mistake, how do you typically respond?",
            [
                "I become overwhelmed with negative emotions and shut down",
                "I feel bad but eventually move on without learning much",
                "I acknowledge the mistake, feel disappointed, but learn from it",
                "I view mistakes as learning opportunities and regulate my emotions effectively",
            ],
            STANDARD_WEIGHTS,
        ),
        Question::new(
            5,
            Motivation,
            "What drives you to achieve your goals?",
            [
                "External rewards and avoiding punishment",
                "Recognition from others and competitive success",
                "Personal satisfaction and meaningful achievement",
                "Intrinsic fulfillment and contributing to something greater",
            ],
            STANDARD_WEIGHTS,
        ),
        Question::new(
            6,
            Motivation,
            "How do you handle setbacks in pursuing your goals?",
            [
                "I give up quickly when things get difficult",
                "I persist for a while but eventually lose motivation",
                "I bounce back from setbacks with renewed determination",
                "I view setbacks as valuable feedback and maintain strong motivation",
            ],
            STANDARD_WEIGHTS,
        ),
        Question::new(
            7,
            Empathy,
            "How well can you sense what others are feeling without them telling you?",
            [
                "I rarely pick up on others' emotions unless they're very obvious",
                "I sometimes notice but often misinterpret others' emotions",
                "I'm generally good at reading others' emotional states",
                "I'm very skilled at sensing and understanding others' emotions",
            ],
            STANDARD_WEIGHTS,
        ),
        Question::new(
            8,
            Empathy,
            "When a friend is going through a difficult time, what's your typical response?",
            [
                "I feel uncomfortable and try to change the subject",
                "I offer practical advice to fix their problem",
                "I listen and try to understand their perspective",
                "I deeply connect with their emotions and provide both emotional and practical support",
            ],
            STANDARD_WEIGHTS,
        ),
        Question::new(
            9,
            SocialSkills,
            "How do you handle conflicts with colleagues or friends?",
            [
                "I avoid conflict at all costs, even when resolution is needed",
                "I tend to get defensive and focus on being right",
                "I try to find compromise while expressing my needs",
                "I skillfully navigate conflicts to find win-win solutions",
            ],
            STANDARD_WEIGHTS,
        ),
        Question::new(
            10,
            SocialSkills,
            "How effectively can you influence others to see your perspective?",
            [
                "I struggle to get others to understand my viewpoint",
                "I can sometimes convince others through persistence",
                "I'm generally able to communicate my perspective clearly",
                "I'm very skilled at influencing others through emotional intelligence",
            ],
            STANDARD_WEIGHTS,
        ),
        Question::new(
            11,
            SelfAwareness,
            "How well do you recognize your personal strengths and weaknesses?",
            [
                "I have little insight into my abilities and limitations",
                "I have some awareness but often over or underestimate myself",
                "I have a realistic understanding of my strengths and weaknesses",
                "I have excellent self-knowledge and continuously work on self-improvement",
            ],
            STANDARD_WEIGHTS,
        ),
        Question::new(
            12,
            Motivation,
            "How do you maintain motivation during long-term projects?",
            [
                "I lose steam quickly and struggle to maintain focus",
                "I need frequent external motivation to keep going",
                "I can maintain motivation with occasional self-encouragement",
                "I maintain strong intrinsic motivation throughout long projects",
            ],
            STANDARD_WEIGHTS,
        ),
    ]
}
