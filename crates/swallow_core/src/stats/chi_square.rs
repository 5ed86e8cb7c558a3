//! Two-bucket chi-square statistic and verdict.

/// Chi-square critical value for one degree of freedom at alpha = 0.05.
pub const CRITICAL_VALUE: f64 = 3.841;

/// Boundary between the lower and upper bucket; values equal to it count as upper.
pub const MIDPOINT: f64 = 0.5;

/// Outcome of the uniformity gate.
///
/// Immutable once built. `passed` is true iff `statistic < critical_value`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniformityVerdict {
    /// Chi-square test statistic (never negative).
    pub statistic: f64,
    /// Threshold the statistic was compared against.
    pub critical_value: f64,
    /// Observed count of values below [`MIDPOINT`].
    pub below: usize,
    /// Observed count of values at or above [`MIDPOINT`].
    pub above: usize,
    /// Whether the sequence is accepted as uniform.
    pub passed: bool,
}

impl UniformityVerdict {
    /// Number of values the verdict was computed from.
    #[inline]
    pub fn sample_size(&self) -> usize {
        self.below + self.above
    }
}

/// Chi-square statistic of observed counts against a common expected count.
///
/// Returns `0.0` when `expected` is not positive, which only happens for an
/// empty sample; there is no evidence of non-uniformity to report then.
///
/// # Examples
///
/// ```rust
/// use swallow_core::stats::chi_square;
///
/// assert_eq!(chi_square(&[4, 0], 2.0), 4.0);
/// assert_eq!(chi_square(&[0, 0], 0.0), 0.0);
/// ```
pub fn chi_square(observed: &[usize], expected: f64) -> f64 {
    if expected <= 0.0 {
        return 0.0;
    }
    observed
        .iter()
        .map(|&count| {
            let diff = count as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

/// Runs the two-bucket uniformity test over `sequence`.
///
/// Expected count per bucket is `len / 2` as a float (not rounded). An
/// empty sequence passes with statistic 0.
///
/// # Examples
///
/// ```rust
/// use swallow_core::stats::validate;
///
/// let verdict = validate(&[0.1, 0.2, 0.3, 0.4]);
/// assert_eq!(verdict.statistic, 4.0);
/// assert!(!verdict.passed);
///
/// let empty = validate(&[]);
/// assert_eq!(empty.statistic, 0.0);
/// assert!(empty.passed);
/// ```
pub fn validate(sequence: &[f64]) -> UniformityVerdict {
    let below = sequence.iter().filter(|&&v| v < MIDPOINT).count();
    let above = sequence.len() - below;
    let expected = sequence.len() as f64 / 2.0;
    let statistic = chi_square(&[below, above], expected);

    UniformityVerdict {
        statistic,
        critical_value: CRITICAL_VALUE,
        below,
        above,
        passed: statistic < CRITICAL_VALUE,
    }
}
