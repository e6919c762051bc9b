//! Random outcome sources for play resolution.
//!
//! Play resolution never touches a generator directly. It asks an
//! [`OutcomeSource`] for each draw, so a drive can run on seeded streams in
//! production and on scripted values in tests.
use hmac::{Hmac, Mac};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::constants::{
    DEEP_PASS_GAIN, DEEP_PASS_ROLL, PLAY_CLOCK_SECS, RUN_GAIN, SHORT_PASS_GAIN,
};

/// One method per random draw a play can make.
pub trait OutcomeSource {
    /// Seconds a play takes before any penalty.
    fn play_clock(&mut self) -> i32;
    fn short_pass_gain(&mut self) -> i32;
    /// Percentile roll deciding whether a deep pass is caught.
    fn deep_pass_roll(&mut self) -> u8;
    fn deep_pass_gain(&mut self) -> i32;
    fn run_gain(&mut self) -> i32;
}

/// RNG adapter that counts draw calls.
#[derive(Debug, Clone)]
pub struct CountingRng<R> {
    rng: R,
    draws: u64,
}

impl CountingRng<SmallRng> {
    fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            draws: 0,
        }
    }
}

impl<R: rand::RngCore> CountingRng<R> {
    /// Number of draw calls performed against this stream.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }
}

impl<R: rand::RngCore> rand::RngCore for CountingRng<R> {
    fn next_u32(&mut self) -> u32 {
        self.draws = self.draws.saturating_add(1);
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws = self.draws.saturating_add(1);
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.draws = self.draws.saturating_add(1);
        self.rng.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.draws = self.draws.saturating_add(1);
        self.rng.try_fill_bytes(dest)
    }
}

/// Per-stream draw totals, reported after a drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DrawCounts {
    pub clock: u64,
    pub yardage: u64,
}

/// Production outcome source: independent clock and yardage streams
/// derived from one user seed.
#[derive(Debug, Clone)]
pub struct SeededOutcomes {
    seed: u64,
    clock: CountingRng<SmallRng>,
    yardage: CountingRng<SmallRng>,
}

impl SeededOutcomes {
    #[must_use]
    pub fn from_user_seed(seed: u64) -> Self {
        Self {
            seed,
            clock: CountingRng::new(derive_stream_seed(seed, b"clock")),
            yardage: CountingRng::new(derive_stream_seed(seed, b"yardage")),
        }
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub const fn draws(&self) -> DrawCounts {
        DrawCounts {
            clock: self.clock.draws(),
            yardage: self.yardage.draws(),
        }
    }
}

impl OutcomeSource for SeededOutcomes {
    fn play_clock(&mut self) -> i32 {
        self.clock.gen_range(PLAY_CLOCK_SECS)
    }

    fn short_pass_gain(&mut self) -> i32 {
        self.yardage.gen_range(SHORT_PASS_GAIN)
    }

    fn deep_pass_roll(&mut self) -> u8 {
        self.yardage.gen_range(DEEP_PASS_ROLL)
    }

    fn deep_pass_gain(&mut self) -> i32 {
        self.yardage.gen_range(DEEP_PASS_GAIN)
    }

    fn run_gain(&mut self) -> i32 {
        self.yardage.gen_range(RUN_GAIN)
    }
}

fn derive_stream_seed(user_seed: u64, domain_tag: &[u8]) -> u64 {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(&user_seed.to_le_bytes()).expect("64-bit seed is valid key");
    mac.update(domain_tag);
    let digest = mac.finalize().into_bytes();
    let mut seed_bytes = [0u8; 8];
    seed_bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(seed_bytes)
}
