//! # Uniformity Gate
//!
//! A two-bucket chi-square goodness-of-fit test that decides whether a
//! generated sequence is uniform enough to drive the simulation.
//!
//! Values are split at the midpoint 0.5 and compared against an even
//! split. With two categories the test has one degree of freedom, so the
//! rejection threshold at the 0.05 level is [`CRITICAL_VALUE`]. Adding
//! buckets would change the degrees of freedom and therefore the critical
//! value; this module deliberately stays at two.
//!
//! ```rust
//! use swallow_core::stats::validate;
//!
//! let verdict = validate(&[0.1, 0.9, 0.2, 0.8]);
//! assert!(verdict.passed);
//! assert_eq!(verdict.statistic, 0.0);
//! ```

mod chi_square;

pub use chi_square::{chi_square, validate, UniformityVerdict, CRITICAL_VALUE, MIDPOINT};
