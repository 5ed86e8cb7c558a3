//! Question and result records produced by the simulator.

use std::fmt;

use super::answer::Answer;

/// Opaque survey question text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Question(String);

impl Question {
    /// Wraps question text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Question text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Question {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Question {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One simulated answer, created once and never mutated.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnsweredQuestion {
    /// The question answered
    pub question: Question,
    /// Derived answer
    pub answer: Answer,
    /// Latency the simulation aimed for, in seconds
    pub planned_seconds: f64,
    /// Latency measured around the wait, in seconds
    pub response_time_seconds: f64,
}

/// Ordered answers plus the total measured elapsed time.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationResult {
    /// One entry per question, in question order
    pub answers: Vec<AnsweredQuestion>,
    /// Sum of the measured response times, in seconds
    pub total_elapsed_seconds: f64,
}

impl SimulationResult {
    /// Number of answered questions.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// True when no question was simulated.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Answers in question order.
    pub fn iter(&self) -> std::slice::Iter<'_, AnsweredQuestion> {
        self.answers.iter()
    }

    /// Looks up the answer recorded for `question`.
    pub fn answer_for(&self, question: &str) -> Option<&AnsweredQuestion> {
        self.answers.iter().find(|a| a.question.as_str() == question)
    }

    /// Sum of the planned latencies, in seconds.
    pub fn planned_total_seconds(&self) -> f64 {
        self.answers.iter().map(|a| a.planned_seconds).sum()
    }
}

impl<'a> IntoIterator for &'a SimulationResult {
    type Item = &'a AnsweredQuestion;
    type IntoIter = std::slice::Iter<'a, AnsweredQuestion>;

    fn into_iter(self) -> Self::IntoIter {
        self.answers.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answered(text: &str, answer: Answer, seconds: f64) -> AnsweredQuestion {
        AnsweredQuestion {
            question: Question::from(text),
            answer,
            planned_seconds: seconds,
            response_time_seconds: seconds,
        }
    }

    #[test]
    fn test_question_display() {
        let q = Question::new("Any pain?");
        assert_eq!(q.to_string(), "Any pain?");
        assert_eq!(q.as_str(), "Any pain?");
    }

    #[test]
    fn test_answer_for() {
        let result = SimulationResult {
            answers: vec![
                answered("first", Answer::Yes, 11.0),
                answered("second", Answer::No, 17.0),
            ],
            total_elapsed_seconds: 28.0,
        };

        assert_eq!(result.answer_for("second").map(|a| a.answer), Some(Answer::No));
        assert!(result.answer_for("third").is_none());
        assert_eq!(result.len(), 2);
        assert_eq!(result.planned_total_seconds(), 28.0);
    }

    #[test]
    fn test_iteration_preserves_order() {
        let result = SimulationResult {
            answers: vec![
                answered("a", Answer::Yes, 10.0),
                answered("b", Answer::Yes, 10.0),
                answered("c", Answer::No, 10.0),
            ],
            total_elapsed_seconds: 30.0,
        };

        let order: Vec<&str> = (&result).into_iter().map(|a| a.question.as_str()).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_result() {
        let result = SimulationResult::default();
        assert!(result.is_empty());
        assert_eq!(result.total_elapsed_seconds, 0.0);
    }
}
