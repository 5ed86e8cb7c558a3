//! Middle-square generator state and step function.

/// Minimum width the squared state is zero-padded to before slicing.
pub const PAD_WIDTH: u32 = 8;

/// Start of the digit window (inclusive, 0-indexed from the left).
const WINDOW_START: u32 = 2;

/// End of the digit window (exclusive).
const WINDOW_END: u32 = 6;

/// Divisor mapping a 4-digit state into [0, 1).
pub const SCALE: f64 = 10_000.0;

/// Advances a middle-square state by one step.
///
/// Equivalent to `int(str(x * x).zfill(8)[2:6])`: the square is computed
/// in `u128` so every `u64` state is accepted, and the digit window is
/// taken arithmetically instead of through a string round-trip.
///
/// # Examples
///
/// ```rust
/// use swallow_core::rng::next_state;
///
/// // 1234² = 1522756 -> "01522756" -> "5227"
/// assert_eq!(next_state(1234), 5227);
/// // 0 is absorbing
/// assert_eq!(next_state(0), 0);
/// ```
pub fn next_state(x: u64) -> u64 {
    let square = u128::from(x) * u128::from(x);
    let width = decimal_width(square).max(PAD_WIDTH);
    let trailing = width - WINDOW_END;
    let window = 10u128.pow(WINDOW_END - WINDOW_START);
    // window < 10_000 so the narrowing cast is lossless
    ((square / 10u128.pow(trailing)) % window) as u64
}

/// Number of decimal digits in `n` (`0` has one digit).
fn decimal_width(n: u128) -> u32 {
    match n.checked_ilog10() {
        Some(log) => log + 1,
        None => 1,
    }
}

/// Middle-square pseudo-random number generator.
///
/// Deterministic and cheap to clone; two generators built from the same
/// seed always produce the same sequence. Not suitable for cryptographic
/// use.
///
/// # Examples
///
/// ```rust
/// use swallow_core::rng::MiddleSquareRng;
///
/// let mut rng = MiddleSquareRng::from_seed(1234);
/// let first: Vec<f64> = rng.by_ref().take(2).collect();
/// assert_eq!(first, vec![0.5227, 0.3215]);
/// assert_eq!(rng.state(), 3215);
/// assert_eq!(rng.seed(), 1234);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiddleSquareRng {
    /// Current state, always the last emitted 4-digit window after one step.
    state: u64,
    /// Seed used for initialisation (kept for reporting).
    seed: u64,
}

impl MiddleSquareRng {
    /// Creates a generator whose first step squares `seed`.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self { state: seed, seed }
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the current internal state.
    #[inline]
    pub fn state(&self) -> u64 {
        self.state
    }

    /// True once the state has collapsed to zero; every later value is `0.0`.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.state == 0
    }

    /// Advances one step and returns the new state scaled into [0, 1).
    #[inline]
    pub fn gen_uniform(&mut self) -> f64 {
        self.state = next_state(self.state);
        self.state as f64 / SCALE
    }

    /// Fills the buffer with consecutive values in [0, 1).
    ///
    /// Empty buffers are a no-op and leave the state untouched.
    pub fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.gen_uniform();
        }
    }
}

impl Iterator for MiddleSquareRng {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        Some(self.gen_uniform())
    }
}

/// Generates `count` middle-square values from `seed`.
///
/// Always returns exactly `count` values in [0, 1); `count == 0` yields an
/// empty vector. Pure: identical arguments give identical sequences.
///
/// # Examples
///
/// ```rust
/// use swallow_core::rng::generate;
///
/// assert!(generate(0, 42).is_empty());
/// assert_eq!(generate(1, 1234), vec![0.5227]);
/// assert_eq!(generate(4, 0), vec![0.0; 4]);
/// ```
pub fn generate(count: usize, seed: u64) -> Vec<f64> {
    MiddleSquareRng::from_seed(seed).take(count).collect()
}
