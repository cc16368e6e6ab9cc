//! Barrier Option Payoff
//!
//! # Down-and-In Call
//!
//! The contract pays `max(S_T - K, 0)` only if the monitored price touched
//! or crossed the barrier `B` from above at some observation date:
//! ```text
//! payoff = 1{∃ n ≥ 1 : S_n ≤ B} * max(S_T - K, 0)
//! ```
//!
//! Observation happens after each simulated step; the initial spot is not
//! an observation date.

/// Down-barrier knock-in call terms
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnockInCall {
    pub strike: f64,
    pub barrier: f64,
}

impl KnockInCall {
    pub fn new(strike: f64, barrier: f64) -> Self {
        Self { strike, barrier }
    }

    /// True when `s` is at or below the barrier
    #[inline]
    pub fn is_breached(&self, s: f64) -> bool {
        s <= self.barrier
    }

    /// Terminal payoff given whether the path ever knocked in
    #[inline]
    pub fn payoff(&self, activated: bool, s_t: f64) -> f64 {
        if activated && s_t > self.strike {
            s_t - self.strike
        } else {
            0.0
        }
    }

    /// Payoff over an observed path `[S_1, ..., S_T]`
    ///
    /// Returns zero for an empty path.
    pub fn calculate(&self, path: &[f64]) -> f64 {
        let activated = path.iter().any(|&s| self.is_breached(s));
        match path.last() {
            Some(&s_t) => self.payoff(activated, s_t),
            None => 0.0,
        }
    }
}
