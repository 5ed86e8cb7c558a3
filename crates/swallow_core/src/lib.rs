//! # swallow_core: Generator, Uniformity Gate and Survey Simulator
//!
//! ## Core Layer Role
//!
//! swallow_core holds every numerically meaningful part of the swallowing
//! survey simulation:
//! - Middle-square pseudo-random sequence generation (`rng`)
//! - Two-bucket chi-square uniformity gate (`stats`)
//! - Answer and response-latency derivation with a pluggable wait (`sim`)
//! - Time-based seed derivation, isolated from the generator (`seed`)
//! - The fixed question set (`questionnaire`)
//! - The gated generate → validate → simulate flow (`pipeline`)
//!
//! ## No Hidden State
//!
//! Every component takes its inputs explicitly and returns a fresh value.
//! The generator never reads the clock; only [`seed::time_seed`] does, and
//! only the entry point is expected to call it. Blocking sleep is hidden
//! behind the [`sim::Wait`] capability so tests run on a virtual clock.
//!
//! ## Usage Examples
//!
//! ```rust
//! use swallow_core::pipeline::{PipelineOutcome, SurveyPipeline};
//! use swallow_core::questionnaire::default_questions;
//! use swallow_core::sim::VirtualClock;
//!
//! let pipeline = SurveyPipeline::new(default_questions());
//! let mut clock = VirtualClock::new();
//!
//! match pipeline.run(1234, &mut clock).unwrap() {
//!     PipelineOutcome::Completed { result, .. } => {
//!         assert_eq!(result.answers.len(), 7);
//!     }
//!     PipelineOutcome::Rejected { .. } => unreachable!("seed 1234 passes the gate"),
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for verdicts and results

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod pipeline;
pub mod questionnaire;
pub mod rng;
pub mod seed;
pub mod sim;
pub mod stats;

pub use error::SurveyError;
