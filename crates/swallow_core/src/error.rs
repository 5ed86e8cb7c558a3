//! Error types for the survey core.
//!
//! The core is total over its documented domains. A failed uniformity
//! gate is an ordinary [`PipelineOutcome`](crate::pipeline::PipelineOutcome),
//! never an error; the only error is a malformed simulator call.

use thiserror::Error;

/// Survey core error.
///
/// # Examples
/// ```
/// use swallow_core::SurveyError;
///
/// let err = SurveyError::LengthMismatch { questions: 7, randoms: 3 };
/// assert_eq!(
///     format!("{}", err),
///     "Length mismatch: 7 questions but 3 random values"
/// );
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SurveyError {
    /// Questions and random values must pair up one-to-one.
    #[error("Length mismatch: {questions} questions but {randoms} random values")]
    LengthMismatch {
        /// Number of questions supplied
        questions: usize,
        /// Number of random values supplied
        randoms: usize,
    },

    /// Random values must lie in [0, 1).
    #[error("Random value {value} at index {index} is outside [0, 1)")]
    OutOfRange {
        /// Position of the offending value
        index: usize,
        /// The offending value
        value: f64,
    },
}
