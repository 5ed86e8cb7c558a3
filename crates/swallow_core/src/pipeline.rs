//! Gated generate → validate → simulate flow.
//!
//! The generator produces one value per question, the uniformity gate
//! judges the whole sequence, and the simulator runs only on a passing
//! verdict. A rejected sequence is reported as
//! [`PipelineOutcome::Rejected`], never as an error, and nothing is
//! simulated for it.

use std::ops::ControlFlow;

use crate::error::SurveyError;
use crate::rng::generate;
use crate::sim::{Question, SimulationEvent, SimulationResult, Simulator, Wait};
use crate::stats::{validate, UniformityVerdict};

/// Result of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "outcome", rename_all = "snake_case"))]
pub enum PipelineOutcome {
    /// The sequence failed the uniformity gate; no simulation took place.
    Rejected {
        /// Seed the sequence was generated from
        seed: u64,
        /// Generated sequence
        sequence: Vec<f64>,
        /// Gate verdict
        verdict: UniformityVerdict,
    },
    /// The sequence passed and drove a full simulation.
    Completed {
        /// Seed the sequence was generated from
        seed: u64,
        /// Generated sequence
        sequence: Vec<f64>,
        /// Gate verdict
        verdict: UniformityVerdict,
        /// Simulated answers
        result: SimulationResult,
    },
}

impl PipelineOutcome {
    /// Gate verdict for either outcome.
    pub fn verdict(&self) -> &UniformityVerdict {
        match self {
            PipelineOutcome::Rejected { verdict, .. } => verdict,
            PipelineOutcome::Completed { verdict, .. } => verdict,
        }
    }

    /// Seed used for the run.
    pub fn seed(&self) -> u64 {
        match self {
            PipelineOutcome::Rejected { seed, .. } => *seed,
            PipelineOutcome::Completed { seed, .. } => *seed,
        }
    }

    /// Generated sequence.
    pub fn sequence(&self) -> &[f64] {
        match self {
            PipelineOutcome::Rejected { sequence, .. } => sequence,
            PipelineOutcome::Completed { sequence, .. } => sequence,
        }
    }

    /// Simulation result, present only when the gate passed.
    pub fn result(&self) -> Option<&SimulationResult> {
        match self {
            PipelineOutcome::Rejected { .. } => None,
            PipelineOutcome::Completed { result, .. } => Some(result),
        }
    }

    /// True when the simulation ran.
    pub fn is_completed(&self) -> bool {
        matches!(self, PipelineOutcome::Completed { .. })
    }
}

/// The survey pipeline over a fixed, ordered question set.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyPipeline {
    questions: Vec<Question>,
}

impl SurveyPipeline {
    /// Creates a pipeline for `questions`.
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Questions in the order they are asked.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Runs the pipeline from `seed`, waiting on `clock`.
    pub fn run<W: Wait>(&self, seed: u64, clock: W) -> Result<PipelineOutcome, SurveyError> {
        self.run_with(seed, clock, |_| ControlFlow::Continue(()))
    }

    /// Runs the pipeline, forwarding simulation progress to `observer`.
    ///
    /// `observer` is never called when the gate rejects the sequence. A
    /// [`ControlFlow::Break`] from it stops the simulation before the next
    /// wait, as in [`Simulator::simulate_with`].
    pub fn run_with<W, F>(
        &self,
        seed: u64,
        clock: W,
        observer: F,
    ) -> Result<PipelineOutcome, SurveyError>
    where
        W: Wait,
        F: FnMut(SimulationEvent<'_>) -> ControlFlow<()>,
    {
        self.complete_with(self.prepare(seed), clock, observer)
    }

    /// Generates one value per question and evaluates the gate, without
    /// simulating anything.
    pub fn prepare(&self, seed: u64) -> GatedSequence {
        let sequence = generate(self.questions.len(), seed);
        let verdict = validate(&sequence);
        GatedSequence {
            seed,
            sequence,
            verdict,
        }
    }

    /// Finishes a prepared run: simulates on a passing verdict, otherwise
    /// reports the rejection.
    pub fn complete_with<W, F>(
        &self,
        gated: GatedSequence,
        clock: W,
        observer: F,
    ) -> Result<PipelineOutcome, SurveyError>
    where
        W: Wait,
        F: FnMut(SimulationEvent<'_>) -> ControlFlow<()>,
    {
        let GatedSequence {
            seed,
            sequence,
            verdict,
        } = gated;

        if !verdict.passed {
            return Ok(PipelineOutcome::Rejected {
                seed,
                sequence,
                verdict,
            });
        }

        let result = Simulator::new(clock).simulate_with(&self.questions, &sequence, observer)?;
        Ok(PipelineOutcome::Completed {
            seed,
            sequence,
            verdict,
            result,
        })
    }
}

/// A generated sequence together with its gate verdict.
#[derive(Debug, Clone, PartialEq)]
pub struct GatedSequence {
    /// Seed the sequence was generated from
    pub seed: u64,
    /// One value per question
    pub sequence: Vec<f64>,
    /// Gate verdict for `sequence`
    pub verdict: UniformityVerdict,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::default_questions;
    use crate::sim::{Answer, VirtualClock};
    use approx::assert_relative_eq;

    #[test]
    fn test_seed_1234_completes() {
        let pipeline = SurveyPipeline::new(default_questions());
        let mut clock = VirtualClock::new();
        let outcome = pipeline.run(1234, &mut clock).unwrap();

        assert!(outcome.is_completed());
        assert_eq!(outcome.seed(), 1234);
        assert_relative_eq!(outcome.verdict().statistic, 12.5 / 3.5, epsilon = 1e-12);

        let result = outcome.result().unwrap();
        let answers: Vec<Answer> = result.iter().map(|a| a.answer).collect();
        assert_eq!(
            answers,
            vec![
                Answer::No,
                Answer::Yes,
                Answer::Yes,
                Answer::Yes,
                Answer::Yes,
                Answer::Yes,
                Answer::Yes
            ]
        );
        assert_relative_eq!(result.total_elapsed_seconds, 93.568, epsilon = 1e-6);
        assert_eq!(clock.waits(), 7);
    }

    #[test]
    fn test_degenerate_seed_rejected_without_waiting() {
        let pipeline = SurveyPipeline::new(default_questions());
        let mut clock = VirtualClock::new();
        let mut observed = 0;
        let outcome = pipeline
            .run_with(0, &mut clock, |_| {
                observed += 1;
                ControlFlow::Continue(())
            })
            .unwrap();

        match &outcome {
            PipelineOutcome::Rejected { sequence, verdict, .. } => {
                assert_eq!(sequence, &vec![0.0; 7]);
                assert_relative_eq!(verdict.statistic, 7.0);
                assert!(!verdict.passed);
            }
            PipelineOutcome::Completed { .. } => panic!("degenerate sequence must be rejected"),
        }
        assert!(outcome.result().is_none());
        assert_eq!(observed, 0);
        assert_eq!(clock.waits(), 0);
    }

    #[test]
    fn test_empty_questionnaire_completes_trivially() {
        let pipeline = SurveyPipeline::new(Vec::new());
        let outcome = pipeline.run(42, VirtualClock::new()).unwrap();

        assert!(outcome.is_completed());
        assert_eq!(outcome.verdict().statistic, 0.0);
        assert!(outcome.sequence().is_empty());
        assert!(outcome.result().unwrap().is_empty());
    }

    #[test]
    fn test_prepare_then_complete_matches_run() {
        let pipeline = SurveyPipeline::new(default_questions());
        let gated = pipeline.prepare(1234);
        assert!(gated.verdict.passed);

        let staged = pipeline
            .complete_with(gated, VirtualClock::new(), |_| ControlFlow::Continue(()))
            .unwrap();
        assert_eq!(staged, pipeline.run(1234, VirtualClock::new()).unwrap());
    }

    #[test]
    fn test_sequence_length_matches_questions() {
        let pipeline = SurveyPipeline::new(default_questions());
        for seed in [1234u64, 5678, 9999, 0, 2500] {
            let outcome = pipeline.run(seed, VirtualClock::new()).unwrap();
            assert_eq!(outcome.sequence().len(), pipeline.questions().len());
            if let Some(result) = outcome.result() {
                assert_eq!(result.len(), pipeline.questions().len());
            }
        }
    }
}
