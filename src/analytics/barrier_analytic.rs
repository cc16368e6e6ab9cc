// src/analytics/barrier_analytic.rs
//! Closed-form down-and-in call under continuous monitoring
//!
//! # Formulas (no dividends, no rebate)
//!
//! With `λ = (r + σ²/2) / σ²`:
//!
//! Barrier at or below the strike (`H ≤ K`):
//! ```text
//! y     = ln(H² / (S K)) / (σ√T) + λσ√T
//! C_di  = S (H/S)^(2λ) Φ(y) - K e^(-rT) (H/S)^(2λ-2) Φ(y - σ√T)
//! ```
//!
//! Barrier above the strike (`H > K`), via in-out parity `C_di = C - C_do`:
//! ```text
//! x₁    = ln(S/H) / (σ√T) + λσ√T
//! y₁    = ln(H/S) / (σ√T) + λσ√T
//! C_do  = S Φ(x₁) - K e^(-rT) Φ(x₁ - σ√T)
//!         - S (H/S)^(2λ) Φ(y₁) + K e^(-rT) (H/S)^(2λ-2) Φ(y₁ - σ√T)
//! ```
//!
//! A spot already at or below the barrier is knocked in, so the price is
//! the vanilla call.
//!
//! # Discrete Monitoring
//!
//! A simulator that only observes every `Δt` misses some crossings. The
//! Broadie-Glasserman-Kou correction prices a discretely monitored down
//! barrier with the continuous formula at a lowered barrier
//! `H · exp(-β σ √Δt)`, `β = -ζ(1/2)/√(2π) ≈ 0.5826`.

use crate::analytics::bs_analytic::bs_call_price;
use crate::math_utils::norm_cdf;

/// `-ζ(1/2) / √(2π)`
pub const BGK_BETA: f64 = 0.5825971579390106;

/// Continuously monitored down-and-in call price.
///
/// Requires `sigma > 0` and `t > 0`.
pub fn down_and_in_call_price(s: f64, k: f64, h: f64, r: f64, sigma: f64, t: f64) -> f64 {
    if s <= h {
        return bs_call_price(s, k, r, sigma, t);
    }
    if h <= 0.0 {
        return 0.0;
    }

    let sigma2 = sigma * sigma;
    let vol_sqrt_t = sigma * t.sqrt();
    let lambda = (r + 0.5 * sigma2) / sigma2;
    let df = (-r * t).exp();
    let ratio = h / s;
    let pow_2l = ratio.powf(2.0 * lambda);
    let pow_2l_2 = ratio.powf(2.0 * lambda - 2.0);

    if h <= k {
        let y = (h * h / (s * k)).ln() / vol_sqrt_t + lambda * vol_sqrt_t;
        s * pow_2l * norm_cdf(y) - k * df * pow_2l_2 * norm_cdf(y - vol_sqrt_t)
    } else {
        let x1 = (s / h).ln() / vol_sqrt_t + lambda * vol_sqrt_t;
        let y1 = (h / s).ln() / vol_sqrt_t + lambda * vol_sqrt_t;
        let down_and_out = s * norm_cdf(x1) - k * df * norm_cdf(x1 - vol_sqrt_t)
            - s * pow_2l * norm_cdf(y1)
            + k * df * pow_2l_2 * norm_cdf(y1 - vol_sqrt_t);
        bs_call_price(s, k, r, sigma, t) - down_and_out
    }
}

/// Continuous-formula barrier equivalent to monitoring a down barrier every `dt`
pub fn discrete_down_barrier(h: f64, sigma: f64, dt: f64) -> f64 {
    h * (-BGK_BETA * sigma * dt.sqrt()).exp()
}
