//! Answer and latency derivation from a single random value.

use std::fmt;
use std::time::Duration;

use crate::stats::MIDPOINT;

/// Shortest simulated response, in seconds.
pub const MIN_RESPONSE_SECONDS: f64 = 10.0;

/// Width of the response window, in seconds; latencies fall in [10, 20).
pub const RESPONSE_SPAN_SECONDS: f64 = 10.0;

/// A patient's answer to a yes/no survey question.
///
/// # Examples
/// ```
/// use swallow_core::sim::Answer;
///
/// assert_eq!(Answer::from_uniform(0.2), Answer::Yes);
/// assert_eq!(Answer::from_uniform(0.5227), Answer::No);
/// assert_eq!(format!("{}", Answer::No), "No");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Answer {
    /// Affirmative answer
    Yes,
    /// Negative answer
    No,
}

impl Answer {
    /// `Yes` for values below 0.5, `No` otherwise.
    #[inline]
    pub fn from_uniform(u: f64) -> Self {
        if u < MIDPOINT {
            Answer::Yes
        } else {
            Answer::No
        }
    }

    /// Display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Answer::Yes => "Yes",
            Answer::No => "No",
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Planned response latency in seconds for a value in [0, 1).
///
/// Strictly increasing in `u`; maps [0, 1) onto [10, 20).
///
/// # Panics
///
/// Panics if `u` is NaN, below -1 or too large for a [`Duration`].
/// [`Simulator`](super::Simulator) rejects values outside [0, 1) before
/// calling this.
///
/// # Examples
/// ```
/// use swallow_core::sim::planned_response_time;
///
/// assert!((planned_response_time(0.5227).as_secs_f64() - 15.227).abs() < 1e-6);
/// ```
#[inline]
pub fn planned_response_time(u: f64) -> Duration {
    Duration::from_secs_f64(planned_seconds(u))
}

/// Same as [`planned_response_time`] as a raw `f64`.
#[inline]
pub(crate) fn planned_seconds(u: f64) -> f64 {
    MIN_RESPONSE_SECONDS + RESPONSE_SPAN_SECONDS * u
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_answer_threshold() {
        assert_eq!(Answer::from_uniform(0.0), Answer::Yes);
        assert_eq!(Answer::from_uniform(0.4999), Answer::Yes);
        assert_eq!(Answer::from_uniform(0.5), Answer::No);
        assert_eq!(Answer::from_uniform(0.9999), Answer::No);
    }

    #[test]
    fn test_planned_seconds_bounds() {
        assert_relative_eq!(planned_seconds(0.0), 10.0);
        assert_relative_eq!(planned_seconds(0.9999), 19.999, epsilon = 1e-12);
        assert_relative_eq!(planned_seconds(0.5227), 15.227, epsilon = 1e-12);
    }

    #[test]
    fn test_planned_response_time_duration() {
        let planned = planned_response_time(0.25);
        assert_eq!(planned, Duration::from_millis(12_500));
    }

    #[test]
    fn test_answer_labels() {
        assert_eq!(Answer::Yes.to_string(), "Yes");
        assert_eq!(Answer::No.as_str(), "No");
    }
}
