//! # Survey Response Simulation
//!
//! Turns a validated random sequence into one answered question per survey
//! item. Each random value `u` fixes both the answer (`Yes` iff `u < 0.5`)
//! and the planned latency (`10 + 10u` seconds). The simulator then waits
//! that long through a [`Wait`] implementation and records the *measured*
//! elapsed time, so the result reflects timing noise rather than the plan.
//!
//! ## Module Structure
//!
//! - [`answer`]: answer and latency derivation from a single value
//! - [`clock`]: the [`Wait`] capability with real and virtual clocks
//! - [`types`]: question and result records
//! - [`simulator`]: the sequential per-question loop

pub mod answer;
pub mod clock;
pub mod simulator;
pub mod types;

pub use answer::{planned_response_time, Answer, MIN_RESPONSE_SECONDS, RESPONSE_SPAN_SECONDS};
pub use clock::{SystemClock, VirtualClock, Wait};
pub use simulator::{SimulationEvent, Simulator};
pub use types::{AnsweredQuestion, Question, SimulationResult};
