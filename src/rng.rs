//! # Xorshift128
//!
//! Marsaglia's xorshift128 over four 32-bit words. The engine is an owned
//! value, so callers decide whether it is seeded from the clock (normal runs)
//! or from a fixed seed (tests, `--seed`).

use rand_core::{RngCore, SeedableRng, impls};
use std::time::{SystemTime, UNIX_EPOCH};

const DEFAULT_STATE: [u32; 4] = [123456789, 362436069, 521288629, 88675123];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Xorshift {
    x: u32,
    y: u32,
    z: u32,
    w: u32,
}

impl Xorshift {
    /// Mixes `seed` into the default state: the low, `>> 16`, `>> 32` and
    /// `>> 48` slices are XORed into `x`, `y`, `z` and `w` respectively.
    pub fn with_seed(seed: u64) -> Self {
        let [x, y, z, w] = DEFAULT_STATE;
        Self {
            x: x ^ seed as u32,
            y: y ^ (seed >> 16) as u32,
            z: z ^ (seed >> 32) as u32,
            w: w ^ (seed >> 48) as u32,
        }
    }

    /// Seeds from the current clock reading. Not reproducible across runs.
    pub fn from_clock() -> Self {
        Self::with_seed(clock_seed())
    }

    /// One round of xorshift128; returns the new `w`.
    pub fn next_raw(&mut self) -> u32 {
        let t = self.x ^ (self.x << 11);
        self.x = self.y;
        self.y = self.z;
        self.z = self.w;
        self.w = (self.w ^ (self.w >> 19)) ^ (t ^ (t >> 8));
        self.w
    }

    /// Uniform integer in `[0, n)`.
    pub fn draw(&mut self, n: u64) -> u64 {
        assert!(n > 0, "draw(0) has an empty range");
        self.next_raw() as u64 % n
    }

    /// Uniform integer in `[l, r)`.
    pub fn range(&mut self, l: i64, r: i64) -> i64 {
        assert!(l < r, "range({l}, {r}) is empty");
        self.draw(r.abs_diff(l)) as i64 + l
    }

    /// Uniform index in `[0, n)`.
    pub fn index(&mut self, n: usize) -> usize {
        self.draw(n as u64) as usize
    }
}

/// Nanoseconds since the epoch, truncated to 64 bits.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

impl RngCore for Xorshift {
    fn next_u32(&mut self) -> u32 {
        self.next_raw()
    }
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

impl SeedableRng for Xorshift {
    type Seed = [u8; 16];

    /// Uses the 16 bytes as the raw little-endian words. The all-zero state is
    /// a fixed point of xorshift, so it maps to the default state instead.
    fn from_seed(seed: Self::Seed) -> Self {
        let mut words = [0u32; 4];
        for (word, chunk) in words.iter_mut().zip(seed.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        if words == [0; 4] {
            words = DEFAULT_STATE;
        }
        let [x, y, z, w] = words;
        Self { x, y, z, w }
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::with_seed(state)
    }
}
