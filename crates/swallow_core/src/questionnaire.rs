//! The fixed swallowing-difficulty questionnaire.

use crate::sim::Question;

/// Default survey questions, in the order they are asked.
pub const DEFAULT_QUESTIONS: [&str; 7] = [
    "Did you have any difficulty swallowing during your last meal?",
    "Did you cough or feel like you were choking when swallowing?",
    "Did your voice change after eating or drinking, as if it were hoarser?",
    "Did you have to swallow several times for the food to go down?",
    "Did you use any special technique to help you swallow, such as changing your head posture or taking small sips?",
    "Did these techniques help you swallow better?",
    "Did you feel pain or discomfort when swallowing?",
];

/// Builds the default question list.
///
/// ```rust
/// use swallow_core::questionnaire::default_questions;
///
/// let questions = default_questions();
/// assert_eq!(questions.len(), 7);
/// ```
pub fn default_questions() -> Vec<Question> {
    DEFAULT_QUESTIONS.iter().copied().map(Question::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_questions_order() {
        let questions = default_questions();
        assert_eq!(questions.len(), DEFAULT_QUESTIONS.len());
        for (question, text) in questions.iter().zip(DEFAULT_QUESTIONS) {
            assert_eq!(question.as_str(), text);
        }
    }

    #[test]
    fn test_default_questions_unique() {
        let mut texts: Vec<&str> = DEFAULT_QUESTIONS.to_vec();
        texts.sort_unstable();
        texts.dedup();
        assert_eq!(texts.len(), DEFAULT_QUESTIONS.len());
    }
}
