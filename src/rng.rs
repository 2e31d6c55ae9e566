use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Source of randomness for cue digits and cue delays
pub trait CueRng {
    /// A digit in 0..=9; repeats of the previous digit are allowed
    fn next_digit(&mut self) -> u8;

    /// A delay drawn uniformly from the inclusive millisecond range
    fn next_delay(&mut self, min_ms: u64, max_ms: u64) -> Duration;
}

fn draw_delay<R: Rng>(rng: &mut R, min_ms: u64, max_ms: u64) -> Duration {
    if max_ms <= min_ms {
        return Duration::from_millis(min_ms);
    }
    Duration::from_millis(rng.gen_range(min_ms..=max_ms))
}

/// Production randomness backed by the thread-local generator
#[derive(Debug, Default)]
pub struct ThreadCueRng {
    rng: ThreadRng,
}

impl ThreadCueRng {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl CueRng for ThreadCueRng {
    fn next_digit(&mut self) -> u8 {
        self.rng.gen_range(0..=9)
    }

    fn next_delay(&mut self, min_ms: u64, max_ms: u64) -> Duration {
        draw_delay(&mut self.rng, min_ms, max_ms)
    }
}

/// Reproducible randomness for `--seed` runs and tests
#[derive(Debug, Clone)]
pub struct SeededCueRng {
    rng: StdRng,
}

impl SeededCueRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl CueRng for SeededCueRng {
    fn next_digit(&mut self) -> u8 {
        self.rng.gen_range(0..=9)
    }

    fn next_delay(&mut self, min_ms: u64, max_ms: u64) -> Duration {
        draw_delay(&mut self.rng, min_ms, max_ms)
    }
}

impl<R: CueRng + ?Sized> CueRng for Box<R> {
    fn next_digit(&mut self) -> u8 {
        (**self).next_digit()
    }

    fn next_delay(&mut self, min_ms: u64, max_ms: u64) -> Duration {
        (**self).next_delay(min_ms, max_ms)
    }
}
