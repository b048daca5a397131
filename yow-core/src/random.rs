//! Sources of uniformly distributed offsets.

use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

/// Supplier of uniformly distributed non-negative integers.
pub trait RandomSource {
    /// Returns the next draw.
    fn next_u64(&mut self) -> u64;
}

impl<T> RandomSource for &mut T
where
    T: RandomSource + ?Sized,
{
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }
}

/// Non-cryptographic generator backed by [`fastrand::Rng`].
#[derive(Debug)]
pub struct SeededRandom {
    rng: fastrand::Rng,
}

impl SeededRandom {
    /// Creates a generator with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Creates a generator seeded from the process id and the current time.
    ///
    /// Two runs of the program started in different seconds, or with different
    /// process ids, see different sequences.
    pub fn from_process() -> Self {
        let pid = u64::from(process::id());
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_secs());
        Self::with_seed(pid.wrapping_add(now))
    }
}

impl RandomSource for SeededRandom {
    fn next_u64(&mut self) -> u64 {
        self.rng.u64(..)
    }
}
