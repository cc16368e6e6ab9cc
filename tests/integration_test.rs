// tests/integration_test.rs
use barrier_mc::analytics::barrier_analytic::{discrete_down_barrier, down_and_in_call_price};
use barrier_mc::analytics::bs_analytic;
use barrier_mc::mc::mc_engine::{BarrierConfig, BarrierOption};

const S0: f64 = 100.0;
const K: f64 = 110.0;
const SIGMA: f64 = 0.25;
const R: f64 = 0.05;
const T: f64 = 0.75;

fn reference_cfg(b: f64, n_steps: usize, num_exp: usize, seed: u64) -> BarrierConfig {
    BarrierConfig::new(S0, K, SIGMA, R, T, b, n_steps, num_exp).with_seed(seed)
}

#[test]
fn test_knock_in_below_vanilla() {
    let vanilla = bs_analytic::bs_call_price(S0, K, R, SIGMA, T);

    let mut option = BarrierOption::new(reference_cfg(95.0, 500, 20_000, 42)).expect("Valid configuration");
    let (payoffs, summary) = option.simulate().expect("Simulation succeeds");

    println!("\nKnock-in value (B=95): {}", summary.current_value);
    println!("Vanilla Black-Scholes: {}", vanilla);
    println!("Activation rate: {}", summary.activation_rate);

    assert_eq!(payoffs.len(), 20_000);
    assert!(summary.current_value > 0.0);
    assert!(
        summary.current_value < 0.75 * vanilla,
        "knock-in value {} should be well below vanilla {}",
        summary.current_value,
        vanilla
    );
}

#[test]
#[ignore = "full reference run: 10^9 normal draws"]
fn test_reference_scenario_full_size() {
    let vanilla = bs_analytic::bs_call_price(S0, K, R, SIGMA, T);

    let mut option = BarrierOption::new(BarrierConfig::default()).expect("Valid configuration");
    let (payoffs, summary) = option.simulate().expect("Simulation succeeds");

    assert_eq!(payoffs.len(), 100_000);
    assert!(summary.current_value >= 0.0);
    assert!(summary.current_value < vanilla);
}

#[test]
fn test_high_barrier_degenerates_to_vanilla() {
    // Every path sits below S0 + 1000 after the first step
    let mut option =
        BarrierOption::new(reference_cfg(S0 + 1_000.0, 100, 50_000, 7)).expect("Valid configuration");
    let (_, summary) = option.simulate().expect("Simulation succeeds");
    let vanilla = bs_analytic::bs_call_price(S0, K, R, SIGMA, T);

    let abs_error = (summary.current_value - vanilla).abs();
    println!("\nMC vanilla: {} ± {}", summary.current_value, summary.standard_error);
    println!("Analytic vanilla: {}", vanilla);

    assert_eq!(summary.activation_rate, 1.0);
    assert!(
        abs_error < 4.0 * summary.standard_error + 0.05,
        "MC {} vs Black-Scholes {} (se {})",
        summary.current_value,
        vanilla,
        summary.standard_error
    );
}

#[test]
fn test_matches_corrected_closed_form() {
    let n_steps = 250;
    let cfg = reference_cfg(95.0, n_steps, 40_000, 2024);
    let dt = cfg.dt();

    let mut option = BarrierOption::new(cfg).expect("Valid configuration");
    let (_, summary) = option.simulate().expect("Simulation succeeds");

    let continuous = down_and_in_call_price(S0, K, 95.0, R, SIGMA, T);
    let corrected = down_and_in_call_price(S0, K, discrete_down_barrier(95.0, SIGMA, dt), R, SIGMA, T);

    println!("\nMC (discrete, {} steps): {} ± {}", n_steps, summary.current_value, summary.standard_error);
    println!("Closed form (continuous): {}", continuous);
    println!("Closed form (shifted barrier): {}", corrected);

    // Discrete monitoring misses crossings, so the shifted barrier is the lower price
    assert!(corrected < continuous);
    assert!(
        (summary.current_value - corrected).abs() < 4.0 * summary.standard_error + 0.05,
        "MC {} vs corrected closed form {}",
        summary.current_value,
        corrected
    );
}

#[test]
fn test_terminal_mean_matches_euler_forward() {
    // Strike near zero and a barrier every path breaches: payoff + K is the terminal price
    let k = 1e-9;
    let n_steps = 50;
    let cfg = BarrierConfig {
        k,
        b: f64::INFINITY,
        n_steps,
        num_exp: 20_000,
        seed: 11,
        ..Default::default()
    };
    let dt = cfg.dt();
    let forward = cfg.s0 * (1.0 + cfg.r * dt).powi(n_steps as i32);

    let mut option = BarrierOption::new(cfg).expect("Valid configuration");
    let (_, summary) = option.simulate().expect("Simulation succeeds");
    let simulated = summary.average_payoff + k;
    let se = summary.standard_error / option.config().discount();

    assert!(
        (simulated - forward).abs() < 4.0 * se,
        "E[S_T] {} vs Euler forward {} (se {})",
        simulated,
        forward,
        se
    );
}
