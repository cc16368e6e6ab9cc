// src/models/gbm.rs
//! Geometric Brownian motion under the risk-neutral drift.
//!
//! ```text
//! dS_t = μ S_t dt + σ S_t dW_t
//! ```
//!
//! Paths are advanced with the additive Euler-Maruyama update, not the
//! exact log-normal step:
//! ```text
//! S_{n+1} = S_n + S_n (μ Δt + σ √Δt Z_n)
//! ```

#[derive(Debug, Clone, Copy)]
pub struct Gbm {
    pub mu: f64,
    pub sigma: f64,
}

impl Gbm {
    pub fn new(mu: f64, sigma: f64) -> Self {
        Gbm { mu, sigma }
    }

    /// Freeze the step size, precomputing `μΔt` and `σ√Δt`.
    pub fn euler_step(&self, dt: f64) -> EulerStep {
        EulerStep {
            drift: self.mu * dt,
            diffusion: self.sigma * dt.sqrt(),
        }
    }
}

/// One Euler-Maruyama increment at a fixed step size
#[derive(Debug, Clone, Copy)]
pub struct EulerStep {
    drift: f64,
    diffusion: f64,
}

impl EulerStep {
    #[inline]
    pub fn advance(&self, s: f64, normal_draw: f64) -> f64 {
        s + s * (self.drift + self.diffusion * normal_draw)
    }
}
