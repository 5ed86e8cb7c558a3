//! Time-based seed derivation.
//!
//! The generator takes an explicit seed; this module is the one place that
//! reads the wall clock to produce one. Only the process entry point should
//! call [`time_seed`]; tests pass fixed seeds instead.

use chrono::{DateTime, Utc};

/// Seeds are reduced to 4 decimal digits.
pub const SEED_MODULUS: i64 = 10_000;

/// Reduces a microsecond timestamp to a seed in `0..10_000`.
///
/// Uses Euclidean remainder so timestamps before the epoch still map to a
/// non-negative seed.
///
/// # Examples
///
/// ```rust
/// use swallow_core::seed::seed_from_micros;
///
/// assert_eq!(seed_from_micros(1_700_000_001_234_567), 4567);
/// assert_eq!(seed_from_micros(-1), 9999);
/// ```
pub fn seed_from_micros(micros: i64) -> u64 {
    // rem_euclid with a positive modulus is always in 0..SEED_MODULUS
    micros.rem_euclid(SEED_MODULUS) as u64
}

/// Seed derived from a specific instant at microsecond granularity.
pub fn seed_from_datetime(at: DateTime<Utc>) -> u64 {
    seed_from_micros(at.timestamp_micros())
}

/// Seed derived from the current wall-clock time.
pub fn time_seed() -> u64 {
    seed_from_datetime(Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_seed_from_micros_keeps_last_four_digits() {
        assert_eq!(seed_from_micros(0), 0);
        assert_eq!(seed_from_micros(9_999), 9_999);
        assert_eq!(seed_from_micros(10_000), 0);
        assert_eq!(seed_from_micros(123_456_789), 6_789);
    }

    #[test]
    fn test_seed_from_micros_negative() {
        assert_eq!(seed_from_micros(-10_000), 0);
        assert_eq!(seed_from_micros(-1_234), 8_766);
    }

    #[test]
    fn test_seed_from_datetime() {
        let at = Utc.timestamp_opt(1_700_000_000, 654_321_000).unwrap();
        assert_eq!(seed_from_datetime(at), 4_321);
    }

    #[test]
    fn test_time_seed_in_range() {
        for _ in 0..10 {
            assert!(time_seed() < 10_000);
        }
    }
}
