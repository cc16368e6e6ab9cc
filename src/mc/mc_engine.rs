// src/mc/mc_engine.rs
use crate::error::{validation::*, SdeError, SdeResult};
use crate::mc::payoffs::KnockInCall;
use crate::models::gbm::Gbm;
use crate::output::{NullReporter, Reporter};
use crate::rng::{NormalSource, PolarBoxMuller};
use crate::stats;
use tracing::{debug, info, warn};

/// Simulation parameters for a down-and-in barrier call
#[derive(Debug, Clone, PartialEq)]
pub struct BarrierConfig {
    pub s0: f64,
    pub k: f64,
    pub sigma: f64,
    pub r: f64,
    pub t: f64,
    pub b: f64,
    pub n_steps: usize,
    pub num_exp: usize,
    pub seed: u64,
}

impl BarrierConfig {
    /// Positional constructor in the conventional parameter order; seed is defaulted.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        s0: f64,
        k: f64,
        sigma: f64,
        r: f64,
        t: f64,
        b: f64,
        n_steps: usize,
        num_exp: usize,
    ) -> Self {
        BarrierConfig {
            s0,
            k,
            sigma,
            r,
            t,
            b,
            n_steps,
            num_exp,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Step size `t / n_steps`
    pub fn dt(&self) -> f64 {
        self.t / self.n_steps as f64
    }

    /// Continuous discount factor `e^(-rT)`
    pub fn discount(&self) -> f64 {
        (-self.r * self.t).exp()
    }

    /// Validate the simulation parameters
    pub fn validate(&self) -> SdeResult<()> {
        validate_paths(self.num_exp)?;
        validate_steps(self.n_steps)?;
        validate_positive("s0", self.s0)?;
        validate_positive("k", self.k)?;
        validate_non_negative("sigma", self.sigma)?;
        validate_finite("r", self.r)?;
        validate_positive("t", self.t)?;
        validate_finite("t", self.t)?;
        validate_not_nan("b", self.b)?;
        Ok(())
    }
}

impl Default for BarrierConfig {
    fn default() -> Self {
        BarrierConfig {
            s0: 100.0,
            k: 110.0,
            sigma: 0.25,
            r: 0.05,
            t: 0.75,
            b: 95.0,
            n_steps: 10_000,
            num_exp: 100_000,
            seed: 12345,
        }
    }
}

/// Aggregate results of one simulation run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationSummary {
    /// Mean payoff at maturity, undiscounted
    pub average_payoff: f64,
    /// `average_payoff * e^(-rT)`
    pub current_value: f64,
    /// Sample standard deviation of payoffs times `e^(-rT)`
    pub discounted_stddev: f64,
    /// `discounted_stddev / √n`
    pub standard_error: f64,
    /// Fraction of paths that touched the barrier
    pub activation_rate: f64,
    pub experiments: usize,
}

impl SimulationSummary {
    /// Two-sided interval `current_value ± z * standard_error`
    pub fn confidence_interval(&self, z: f64) -> (f64, f64) {
        let half_width = z * self.standard_error;
        (self.current_value - half_width, self.current_value + half_width)
    }
}

/// Monte Carlo pricer for a discretely monitored down-and-in call
///
/// # Math Framework
///
/// Each experiment evolves the spot with the Euler-Maruyama scheme
/// ```text
/// S_{n+1} = S_n + S_n (r Δt + σ √Δt Z_n),   Δt = T / n_steps
/// ```
/// and marks the path as activated once `S_n ≤ B` for some `n ≥ 1`. The
/// price estimate is
/// ```text
/// V = e^(-rT) * (1/N) Σ 1{activated} max(S_T - K, 0)
/// ```
///
/// The configuration is fixed at construction. Payoffs from the most recent
/// run stay available through [`BarrierOption::payoffs`].
#[derive(Debug, Clone)]
pub struct BarrierOption {
    cfg: BarrierConfig,
    payoffs: Vec<f64>,
}

impl BarrierOption {
    pub fn new(cfg: BarrierConfig) -> SdeResult<Self> {
        cfg.validate()?;
        Ok(BarrierOption {
            cfg,
            payoffs: Vec::new(),
        })
    }

    pub fn config(&self) -> &BarrierConfig {
        &self.cfg
    }

    /// Payoff series of the last run, one entry per experiment
    pub fn payoffs(&self) -> &[f64] {
        &self.payoffs
    }

    /// Run with a polar Box-Muller stream seeded from `cfg.seed`
    pub fn simulate(&mut self) -> SdeResult<(&[f64], SimulationSummary)> {
        let mut normals = PolarBoxMuller::from_seed(self.cfg.seed);
        self.run(&mut normals, &mut NullReporter)
    }

    /// Run with a caller-supplied normal source
    pub fn simulate_with<G>(&mut self, normals: &mut G) -> SdeResult<(&[f64], SimulationSummary)>
    where
        G: NormalSource + ?Sized,
    {
        self.run(normals, &mut NullReporter)
    }

    /// Run with the seeded stream, echoing parameters and results to `reporter`
    pub fn simulate_and_report<P>(
        &mut self,
        reporter: &mut P,
    ) -> SdeResult<(&[f64], SimulationSummary)>
    where
        P: Reporter + ?Sized,
    {
        let mut normals = PolarBoxMuller::from_seed(self.cfg.seed);
        self.run(&mut normals, reporter)
    }

    /// Undiscounted sample standard deviation of the last run's payoffs
    pub fn calculate_stddev(&self) -> SdeResult<f64> {
        stats::stddev(&self.payoffs)
    }

    fn run<G, P>(
        &mut self,
        normals: &mut G,
        reporter: &mut P,
    ) -> SdeResult<(&[f64], SimulationSummary)>
    where
        G: NormalSource + ?Sized,
        P: Reporter + ?Sized,
    {
        let cfg = &self.cfg;
        let dt = cfg.dt();
        let step = Gbm::new(cfg.r, cfg.sigma).euler_step(dt);
        let option = KnockInCall::new(cfg.k, cfg.b);

        reporter
            .report_parameters(cfg, dt)
            .map_err(|e| SdeError::ReportError {
                reason: e.to_string(),
            })?;

        debug!(
            n_steps = cfg.n_steps,
            num_exp = cfg.num_exp,
            dt,
            seed = cfg.seed,
            barrier = cfg.b,
            "starting barrier simulation"
        );

        self.payoffs.clear();
        self.payoffs.reserve(cfg.num_exp);
        let mut activations = 0usize;

        for _ in 0..cfg.num_exp {
            let mut s = cfg.s0;
            let mut activated = false;

            for _ in 0..cfg.n_steps {
                s = step.advance(s, normals.next_gaussian());
                if option.is_breached(s) {
                    activated = true;
                }
            }

            if activated {
                activations += 1;
            }
            self.payoffs.push(option.payoff(activated, s));
        }

        let discount = cfg.discount();
        let average_payoff = stats::mean(&self.payoffs)?;
        let current_value = average_payoff * discount;
        let discounted_stddev = stats::stddev(&self.payoffs)? * discount;

        if !current_value.is_finite() || !discounted_stddev.is_finite() {
            warn!(current_value, discounted_stddev, "non-finite simulation result");
            return Err(SdeError::NumericalInstability {
                method: "Euler-Maruyama barrier Monte Carlo".to_string(),
                reason: format!(
                    "price {} / stddev {} is not finite",
                    current_value, discounted_stddev
                ),
            });
        }

        let n = self.payoffs.len();
        let summary = SimulationSummary {
            average_payoff,
            current_value,
            discounted_stddev,
            standard_error: discounted_stddev / (n as f64).sqrt(),
            activation_rate: activations as f64 / n as f64,
            experiments: n,
        };

        info!(
            barrier = cfg.b,
            current_value,
            discounted_stddev,
            activation_rate = summary.activation_rate,
            "barrier simulation finished"
        );

        reporter
            .report_results(&summary)
            .map_err(|e| SdeError::ReportError {
                reason: e.to_string(),
            })?;

        Ok((self.payoffs.as_slice(), summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Emits a fixed cycle of normal draws.
    struct Cycle {
        draws: Vec<f64>,
        pos: usize,
    }

    impl NormalSource for Cycle {
        fn next_gaussian(&mut self) -> f64 {
            let z = self.draws[self.pos % self.draws.len()];
            self.pos += 1;
            z
        }
    }

    fn small_cfg() -> BarrierConfig {
        BarrierConfig {
            n_steps: 50,
            num_exp: 2_000,
            seed: 7,
            ..Default::default()
        }
    }

    #[test]
    fn test_validation_rejects_degenerate_inputs() {
        let bad = [
            BarrierConfig { n_steps: 0, ..small_cfg() },
            BarrierConfig { num_exp: 0, ..small_cfg() },
            BarrierConfig { t: 0.0, ..small_cfg() },
            BarrierConfig { t: -1.0, ..small_cfg() },
            BarrierConfig { s0: 0.0, ..small_cfg() },
            BarrierConfig { k: -5.0, ..small_cfg() },
            BarrierConfig { sigma: -0.1, ..small_cfg() },
            BarrierConfig { r: f64::NAN, ..small_cfg() },
            BarrierConfig { b: f64::NAN, ..small_cfg() },
        ];
        for cfg in bad {
            assert!(BarrierOption::new(cfg.clone()).is_err(), "{:?} should fail", cfg);
        }
        assert!(BarrierOption::new(BarrierConfig { sigma: 0.0, ..small_cfg() }).is_ok());
    }

    #[test]
    fn test_zero_steps_is_configuration_error() {
        let err = BarrierOption::new(BarrierConfig { n_steps: 0, ..small_cfg() }).unwrap_err();
        assert!(matches!(err, SdeError::InvalidConfiguration { ref field, .. } if field == "n_steps"));
    }

    #[test]
    fn test_large_counts_are_accepted() {
        let many_steps = BarrierConfig { n_steps: 100_001, num_exp: 2, ..Default::default() };
        assert!(BarrierOption::new(many_steps).is_ok());

        let many_paths = BarrierConfig { num_exp: 2_000_000_000, ..Default::default() };
        assert!(BarrierOption::new(many_paths).is_ok());
    }

    #[test]
    fn test_overflowing_path_is_numerical_instability() {
        // S0 at f64::MAX overflows to +inf on the first upward step
        let cfg = BarrierConfig {
            s0: f64::MAX,
            b: f64::INFINITY,
            n_steps: 5,
            num_exp: 3,
            ..Default::default()
        };
        let mut normals = Cycle {
            draws: vec![1.0],
            pos: 0,
        };
        let mut option = BarrierOption::new(cfg).unwrap();
        let err = option.simulate_with(&mut normals).unwrap_err();
        assert!(matches!(err, SdeError::NumericalInstability { .. }), "got {:?}", err);
    }

    /// Passes draws through from a seeded stream and keeps a copy.
    struct Recording {
        inner: PolarBoxMuller<rand::rngs::StdRng>,
        draws: Vec<f64>,
    }

    impl NormalSource for Recording {
        fn next_gaussian(&mut self) -> f64 {
            let z = self.inner.next_gaussian();
            self.draws.push(z);
            z
        }
    }

    #[test]
    fn test_payoffs_match_observed_path_evaluation() {
        let cfg = BarrierConfig {
            n_steps: 20,
            num_exp: 300,
            ..Default::default()
        };
        let step = Gbm::new(cfg.r, cfg.sigma).euler_step(cfg.dt());
        let terms = KnockInCall::new(cfg.k, cfg.b);
        let (s0, n_steps) = (cfg.s0, cfg.n_steps);

        let mut normals = Recording {
            inner: PolarBoxMuller::from_seed(17),
            draws: Vec::new(),
        };
        let mut option = BarrierOption::new(cfg).unwrap();
        let (payoffs, summary) = option.simulate_with(&mut normals).unwrap();

        assert_eq!(normals.draws.len(), 300 * n_steps);
        for (payoff, draws) in payoffs.iter().zip(normals.draws.chunks(n_steps)) {
            let path: Vec<f64> = draws
                .iter()
                .scan(s0, |s, &z| {
                    *s = step.advance(*s, z);
                    Some(*s)
                })
                .collect();
            assert_eq!(payoff.to_bits(), terms.calculate(&path).to_bits());
        }
        assert!(summary.activation_rate > 0.0 && summary.activation_rate < 1.0);
    }

    #[test]
    fn test_series_length_and_non_negative() {
        let mut option = BarrierOption::new(small_cfg()).unwrap();
        let (payoffs, summary) = option.simulate().unwrap();
        assert_eq!(payoffs.len(), 2_000);
        assert!(payoffs.iter().all(|&p| p >= 0.0));
        assert_eq!(summary.experiments, 2_000);
        assert!(summary.current_value >= 0.0);
    }

    #[test]
    fn test_rerun_clears_previous_series() {
        let mut option = BarrierOption::new(small_cfg()).unwrap();
        option.simulate().unwrap();
        option.simulate().unwrap();
        assert_eq!(option.payoffs().len(), 2_000);
    }

    #[test]
    fn test_single_experiment_surfaces_divide_by_zero() {
        let mut option = BarrierOption::new(BarrierConfig { num_exp: 1, ..small_cfg() }).unwrap();
        let err = option.simulate().unwrap_err();
        assert!(matches!(err, SdeError::DivideByZero { len: 1, .. }));
    }

    #[test]
    fn test_scripted_path_knocks_in() {
        // One step down hard, then up; r = 0 so only diffusion moves the price
        let cfg = BarrierConfig {
            s0: 100.0,
            k: 100.0,
            sigma: 0.5,
            r: 0.0,
            t: 1.0,
            b: 90.0,
            n_steps: 4,
            num_exp: 2,
            seed: 0,
        };
        // σ√Δt = 0.25: 100 → 75 → 93.75 → 117.1875 → 146.484375
        let mut normals = Cycle {
            draws: vec![-1.0, 1.0, 1.0, 1.0],
            pos: 0,
        };
        let mut option = BarrierOption::new(cfg).unwrap();
        let (payoffs, summary) = option.simulate_with(&mut normals).unwrap();
        assert_eq!(payoffs, &[46.484375, 46.484375]);
        assert_eq!(summary.activation_rate, 1.0);
        assert_eq!(summary.discounted_stddev, 0.0);
        assert_eq!(normals.pos, 8);
    }

    #[test]
    fn test_initial_spot_is_not_observed() {
        // Deterministic drift upward from exactly the barrier: never at or below it again
        let cfg = BarrierConfig {
            s0: 100.0,
            k: 90.0,
            sigma: 0.0,
            r: 0.05,
            b: 100.0,
            n_steps: 20,
            num_exp: 5,
            ..Default::default()
        };
        let mut option = BarrierOption::new(cfg).unwrap();
        let (payoffs, summary) = option.simulate().unwrap();
        assert!(payoffs.iter().all(|&p| p == 0.0));
        assert_eq!(summary.activation_rate, 0.0);
    }

    #[test]
    fn test_confidence_interval_brackets_value() {
        let mut option = BarrierOption::new(small_cfg()).unwrap();
        let (_, summary) = option.simulate().unwrap();
        let (lo, hi) = summary.confidence_interval(1.96);
        assert!(lo <= summary.current_value && summary.current_value <= hi);
        assert!(
            (summary.standard_error - summary.discounted_stddev / (2_000f64).sqrt()).abs() < 1e-12
        );
    }

    #[test]
    fn test_calculate_stddev_matches_summary() {
        let mut option = BarrierOption::new(small_cfg()).unwrap();
        let (_, summary) = option.simulate().unwrap();
        let discount = option.config().discount();
        let raw = option.calculate_stddev().unwrap();
        assert!((raw * discount - summary.discounted_stddev).abs() < 1e-12);
    }
}
