//! The wait capability used to simulate response latency.
//!
//! [`SystemClock`] really blocks the calling thread; [`VirtualClock`]
//! returns immediately and only advances a counter. The simulator is
//! written against [`Wait`] and cannot tell the two apart.

use std::time::{Duration, Instant};

/// Blocks (really or virtually) for a planned duration.
pub trait Wait {
    /// Waits for `planned` and returns the elapsed time actually measured.
    ///
    /// The measured value may differ slightly from `planned`; callers must
    /// record the returned duration, not the plan.
    fn wait(&mut self, planned: Duration) -> Duration;
}

impl<W: Wait + ?Sized> Wait for &mut W {
    #[inline]
    fn wait(&mut self, planned: Duration) -> Duration {
        (**self).wait(planned)
    }
}

/// Wall-clock wait: sleeps the current thread and measures around the sleep.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Creates a wall clock.
    pub fn new() -> Self {
        Self
    }
}

impl Wait for SystemClock {
    fn wait(&mut self, planned: Duration) -> Duration {
        let start = Instant::now();
        std::thread::sleep(planned);
        start.elapsed()
    }
}

/// Zero-cost clock that advances virtual time by the planned duration.
///
/// An optional fixed `jitter` is added to every wait to stand in for
/// measurement overhead.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use swallow_core::sim::{VirtualClock, Wait};
///
/// let mut clock = VirtualClock::with_jitter(Duration::from_millis(2));
/// let measured = clock.wait(Duration::from_secs(10));
/// assert_eq!(measured, Duration::from_millis(10_002));
/// assert_eq!(clock.elapsed(), measured);
/// assert_eq!(clock.waits(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VirtualClock {
    elapsed: Duration,
    jitter: Duration,
    waits: usize,
}

impl VirtualClock {
    /// Virtual clock with no jitter; measured equals planned.
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual clock that adds `jitter` to every measured wait.
    pub fn with_jitter(jitter: Duration) -> Self {
        Self {
            jitter,
            ..Self::default()
        }
    }

    /// Total virtual time elapsed so far.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of waits performed.
    pub fn waits(&self) -> usize {
        self.waits
    }
}

impl Wait for VirtualClock {
    fn wait(&mut self, planned: Duration) -> Duration {
        let measured = planned + self.jitter;
        self.elapsed += measured;
        self.waits += 1;
        measured
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_virtual_clock_accumulates() {
        let mut clock = VirtualClock::new();
        assert_eq!(clock.wait(Duration::from_secs(10)), Duration::from_secs(10));
        assert_eq!(clock.wait(Duration::from_millis(500)), Duration::from_millis(500));
        assert_eq!(clock.elapsed(), Duration::from_millis(10_500));
        assert_eq!(clock.waits(), 2);
    }

    #[test]
    fn test_wait_through_mutable_reference() {
        fn wait_once<W: Wait>(mut clock: W) -> Duration {
            clock.wait(Duration::from_secs(1))
        }

        let mut clock = VirtualClock::new();
        assert_eq!(wait_once(&mut clock), Duration::from_secs(1));
        assert_eq!(clock.elapsed(), Duration::from_secs(1));
    }

    #[test]
    fn test_system_clock_measures_at_least_planned() {
        let mut clock = SystemClock::new();
        let planned = Duration::from_millis(5);
        let measured = clock.wait(planned);
        assert!(measured >= planned, "measured {:?} < planned {:?}", measured, planned);
    }
}
