//! # Random Testcases
//!
//! Cases `a b c d` for the greedy problem, with `1 <= a < d <= 20` and
//! `0 <= b < c < d`.

use crate::error::SamplingError;
use crate::rng::Xorshift;
use itertools::Itertools;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Case {
    pub a: i64,
    pub b: i64,
    pub c: i64,
    pub d: i64,
}

impl Case {
    /// Draws `d` in `[2, 21)`, then `a` in `[1, d)`, then pairs `(b, c)` from
    /// `[0, d)` until `b < c`. At most `max_attempts` pairs are drawn.
    pub fn random(rng: &mut Xorshift, max_attempts: usize) -> Result<Self, SamplingError> {
        let d = rng.range(2, 21);
        let a = rng.range(1, d);
        for _ in 0..max_attempts {
            let b = rng.range(0, d);
            let c = rng.range(0, d);
            if b < c {
                return Ok(Self { a, b, c, d });
            }
        }
        Err(SamplingError::AttemptsExhausted {
            attempts: max_attempts,
        })
    }

    pub fn is_valid(&self) -> bool {
        1 <= self.a
            && self.a < self.d
            && self.d <= 20
            && 0 <= self.b
            && self.b < self.c
            && self.c < self.d
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.a, self.b, self.c, self.d)
    }
}

/// Draws `t` independent cases.
pub fn generate(
    rng: &mut Xorshift,
    t: usize,
    max_attempts: usize,
) -> Result<Vec<Case>, SamplingError> {
    (0..t).map(|_| Case::random(rng, max_attempts)).collect()
}

/// The count on the first line, then one case per line.
pub fn render(cases: &[Case]) -> String {
    format!("{}\n{}", cases.len(), cases.iter().map(|c| format!("{}\n", c)).join(""))
}
