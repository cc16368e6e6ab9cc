// src/rng.rs
//! Random Number Generation for Monte Carlo Simulations
//!
//! # Design Philosophy
//!
//! Every simulation owns its generator. There is no process-wide state:
//! the same seed always reproduces the same normal stream, and two
//! simulations never interfere with each other.
//!
//! # Polar Box-Muller
//!
//! Converts pairs of uniforms on (-1, 1) into a standard normal draw by
//! rejection onto the unit disc:
//! ```text
//! s = x² + y²,  0 < s < 1
//! Z = x * √(-2 ln(s) / s)
//! ```
//! No trigonometric calls, and the rejection step removes the `ln(0)` and
//! divide-by-zero cases at the origin.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Source of independent standard normal deviates.
pub trait NormalSource {
    fn next_gaussian(&mut self) -> f64;
}

/// Polar Box-Muller generator over an arbitrary uniform integer source
///
/// Uniform draws come from `next_u32` and are mapped to `[-1, 1]` via
/// `2 * u / u_max - 1`. Only one deviate of each accepted pair is used.
#[derive(Debug, Clone)]
pub struct PolarBoxMuller<R: RngCore> {
    uniform: R,
}

impl<R: RngCore> PolarBoxMuller<R> {
    pub fn new(uniform: R) -> Self {
        Self { uniform }
    }

    #[inline]
    fn next_signed_unit(&mut self) -> f64 {
        2.0 * self.uniform.next_u32() as f64 / u32::MAX as f64 - 1.0
    }

    pub fn into_inner(self) -> R {
        self.uniform
    }
}

impl PolarBoxMuller<StdRng> {
    /// Seeded generator backed by `StdRng`
    pub fn from_seed(seed: u64) -> Self {
        Self::new(seed_rng_from_u64(seed))
    }
}

impl<R: RngCore> NormalSource for PolarBoxMuller<R> {
    fn next_gaussian(&mut self) -> f64 {
        loop {
            let x = self.next_signed_unit();
            let y = self.next_signed_unit();
            let size_squared = x * x + y * y;
            if size_squared < 1.0 && size_squared != 0.0 {
                return x * (-2.0 * size_squared.ln() / size_squared).sqrt();
            }
        }
    }
}

pub fn seed_rng_from_u64(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
