// src/math_utils.rs
//! Small numeric and timing helpers shared by the closed-form references and
//! the sweep binary.

use statrs::function::erf::erfc;
use std::f64::consts::FRAC_1_SQRT_2;
use std::time::{Duration, Instant};

/// Standard normal CDF, `Φ(x) = ½ erfc(-x / √2)`.
///
/// The `erfc` form keeps precision in the far left tail, where
/// `½ (1 + erf(x / √2))` cancels to zero well before `Φ` underflows. Knock-in
/// prices with distant barriers evaluate `Φ` at large negative arguments.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x * FRAC_1_SQRT_2)
}

/// Wall-clock stopwatch for timing one pricing run after another.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    mark: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Stopwatch {
            mark: Instant::now(),
        }
    }

    /// Milliseconds since the last mark, without moving it.
    pub fn elapsed_ms(&self) -> f64 {
        duration_ms(self.mark.elapsed())
    }

    /// Milliseconds since the last mark; the mark then moves to now.
    pub fn lap_ms(&mut self) -> f64 {
        let now = Instant::now();
        let lap = now.duration_since(self.mark);
        self.mark = now;
        duration_ms(lap)
    }
}

fn duration_ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}
