//! # barrier-mc: Monte Carlo pricing of down-and-in barrier calls
//!
//! Simulates the underlying with an Euler-Maruyama discretization of
//! geometric Brownian motion, knocks the option in once the price touches
//! the barrier at any observation step, and reports the discounted mean
//! payoff together with its sample standard deviation.
//!
//! ## Components
//!
//! - [`rng`]: polar Box-Muller normal generator over a seeded uniform source
//! - [`mc::mc_engine`]: path simulation, barrier detection, payoff aggregation
//! - [`stats`]: mean and Bessel-corrected standard deviation
//! - [`output`]: injected reporting sinks and CSV export
//! - [`analytics`]: Black-Scholes and closed-form barrier reference prices
//!
//! ## Quick Start
//!
//! ```rust
//! use barrier_mc::mc::mc_engine::{BarrierConfig, BarrierOption};
//!
//! let cfg = BarrierConfig {
//!     n_steps: 100,
//!     num_exp: 5_000,
//!     seed: 42,
//!     ..Default::default() // S0=100, K=110, σ=0.25, r=5%, T=0.75, B=95
//! };
//!
//! let mut option = BarrierOption::new(cfg).expect("Valid configuration");
//! let (payoffs, summary) = option.simulate().expect("Simulation succeeds");
//! assert_eq!(payoffs.len(), 5_000);
//! println!(
//!     "Value: {:.4} ± {:.4}",
//!     summary.current_value, summary.standard_error
//! );
//! ```

pub mod analytics;
pub mod error;
pub mod math_utils;
pub mod mc;
pub mod models;
pub mod output;
pub mod rng;
pub mod stats;

pub use error::{SdeError, SdeResult};
pub use mc::mc_engine::{BarrierConfig, BarrierOption, SimulationSummary};
