//! Sequential per-question simulation loop.

use std::ops::ControlFlow;

use super::answer::{planned_response_time, planned_seconds, Answer};
use super::clock::Wait;
use super::types::{AnsweredQuestion, Question, SimulationResult};
use crate::error::SurveyError;

/// Progress notification emitted while simulating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimulationEvent<'a> {
    /// About to wait on question `index`.
    Answering {
        /// Position in the question list
        index: usize,
        /// Question being answered
        question: &'a Question,
    },
    /// Question `index` has been answered and timed.
    Answered {
        /// Position in the question list
        index: usize,
        /// The finished record
        record: &'a AnsweredQuestion,
    },
}

/// Survey response simulator over a [`Wait`] capability.
///
/// Questions are processed strictly one after another: the wait for
/// question `i` completes before question `i + 1` starts. Abort is only
/// possible between questions, by stopping to drive the loop.
///
/// # Examples
///
/// ```rust
/// use swallow_core::sim::{Answer, Question, Simulator, VirtualClock};
///
/// let questions = vec![Question::from("Did you cough?")];
/// let mut simulator = Simulator::new(VirtualClock::new());
///
/// let result = simulator.simulate(&questions, &[0.5227]).unwrap();
/// assert_eq!(result.answers[0].answer, Answer::No);
/// assert!((result.total_elapsed_seconds - 15.227).abs() < 1e-6);
/// ```
#[derive(Debug)]
pub struct Simulator<W: Wait> {
    clock: W,
}

impl<W: Wait> Simulator<W> {
    /// Creates a simulator that waits on `clock`.
    pub fn new(clock: W) -> Self {
        Self { clock }
    }

    /// Borrows the underlying clock.
    pub fn clock(&self) -> &W {
        &self.clock
    }

    /// Releases the underlying clock.
    pub fn into_clock(self) -> W {
        self.clock
    }

    /// Simulates every question without progress notifications.
    ///
    /// # Errors
    ///
    /// [`SurveyError::LengthMismatch`] if `questions` and `randoms` differ
    /// in length, [`SurveyError::OutOfRange`] if a value lies outside
    /// [0, 1). Nothing is simulated in either case.
    pub fn simulate(
        &mut self,
        questions: &[Question],
        randoms: &[f64],
    ) -> Result<SimulationResult, SurveyError> {
        self.simulate_with(questions, randoms, |_| ControlFlow::Continue(()))
    }

    /// Simulates every question, reporting progress to `observer`.
    ///
    /// For index `i`, `randoms[i]` decides the answer and planned latency of
    /// `questions[i]`. The recorded response time is whatever the clock
    /// measured, and the total is the sum of those measurements.
    ///
    /// Returning [`ControlFlow::Break`] from `observer` stops the loop before
    /// the next wait. The result then holds only the questions answered so
    /// far; a break on `Answering` skips that question's wait entirely.
    pub fn simulate_with<F>(
        &mut self,
        questions: &[Question],
        randoms: &[f64],
        mut observer: F,
    ) -> Result<SimulationResult, SurveyError>
    where
        F: FnMut(SimulationEvent<'_>) -> ControlFlow<()>,
    {
        if questions.len() != randoms.len() {
            return Err(SurveyError::LengthMismatch {
                questions: questions.len(),
                randoms: randoms.len(),
            });
        }
        if let Some((index, &value)) = randoms
            .iter()
            .enumerate()
            .find(|(_, u)| !(0.0..1.0).contains(*u))
        {
            return Err(SurveyError::OutOfRange { index, value });
        }

        let mut answers = Vec::with_capacity(questions.len());
        let mut total_elapsed_seconds = 0.0;

        for (index, (question, &u)) in questions.iter().zip(randoms).enumerate() {
            if observer(SimulationEvent::Answering { index, question }).is_break() {
                break;
            }

            let answer = Answer::from_uniform(u);
            let measured = self.clock.wait(planned_response_time(u));

            let record = AnsweredQuestion {
                question: question.clone(),
                answer,
                planned_seconds: planned_seconds(u),
                response_time_seconds: measured.as_secs_f64(),
            };
            total_elapsed_seconds += record.response_time_seconds;

            let flow = observer(SimulationEvent::Answered {
                index,
                record: &record,
            });
            answers.push(record);
            if flow.is_break() {
                break;
            }
        }

        Ok(SimulationResult {
            answers,
            total_elapsed_seconds,
        })
    }
}
