// scripts/barrier_sweep.rs
use barrier_mc::analytics::bs_analytic;
use barrier_mc::math_utils::Stopwatch;
use barrier_mc::mc::mc_engine::{BarrierConfig, BarrierOption};
use barrier_mc::output::{self, TextReporter};
use std::env;
use std::io;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

const BARRIERS: [f64; 3] = [95.0, 97.0, 99.0];

struct Args {
    seed: Option<u64>,
    paths: Option<usize>,
    steps: Option<usize>,
    csv_dir: Option<PathBuf>,
}

impl Args {
    fn parse() -> Result<Self, String> {
        let mut args = Args {
            seed: None,
            paths: None,
            steps: None,
            csv_dir: None,
        };
        let mut iter = env::args().skip(1);
        while let Some(flag) = iter.next() {
            let value = iter
                .next()
                .ok_or_else(|| format!("missing value for {}", flag))?;
            match flag.as_str() {
                "--seed" => args.seed = Some(parse_num(&flag, &value)?),
                "--paths" => args.paths = Some(parse_num(&flag, &value)?),
                "--steps" => args.steps = Some(parse_num(&flag, &value)?),
                "--csv" => args.csv_dir = Some(PathBuf::from(value)),
                _ => return Err(format!("unknown argument {}", flag)),
            }
        }
        Ok(args)
    }
}

fn parse_num<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("invalid value '{}' for {}", value, flag))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let args = match Args::parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("usage: barrier_sweep [--seed N] [--paths N] [--steps N] [--csv DIR]");
            process::exit(2);
        }
    };

    let mut base = BarrierConfig::default();
    if let Some(seed) = args.seed {
        base.seed = seed;
    }
    if let Some(paths) = args.paths {
        base.num_exp = paths;
    }
    if let Some(steps) = args.steps {
        base.n_steps = steps;
    }

    if let Some(dir) = &args.csv_dir {
        if let Err(e) = std::fs::create_dir_all(dir) {
            tracing::error!("cannot create {}: {e}", dir.display());
            process::exit(1);
        }
    }

    let vanilla = bs_analytic::bs_call_price(base.s0, base.k, base.r, base.sigma, base.t);
    tracing::info!(vanilla, "Black-Scholes vanilla call reference");

    let stdout = io::stdout();
    let mut reporter = TextReporter::new(stdout.lock());

    let mut watch = Stopwatch::start();
    for barrier in BARRIERS {
        let cfg = BarrierConfig {
            b: barrier,
            ..base.clone()
        };

        let mut option = match BarrierOption::new(cfg) {
            Ok(o) => o,
            Err(e) => {
                tracing::error!("configuration error: {e}");
                process::exit(1);
            }
        };

        let summary = match option.simulate_and_report(&mut reporter) {
            Ok((_, summary)) => summary,
            Err(e) => {
                tracing::error!(barrier, "simulation failed: {e}");
                process::exit(1);
            }
        };
        tracing::info!(
            barrier,
            elapsed_ms = watch.lap_ms(),
            "run complete"
        );

        if let Some(dir) = &args.csv_dir {
            let payoffs_file = dir.join(format!("payoffs_b{}.csv", barrier));
            let summary_file = dir.join(format!("summary_b{}.csv", barrier));
            let written = output::write_payoffs_to_csv(&payoffs_file, option.payoffs())
                .and_then(|_| output::write_summary_to_csv(&summary_file, option.config(), &summary));
            match written {
                Ok(()) => tracing::info!("results written to {}", dir.display()),
                Err(e) => {
                    tracing::error!("csv export failed: {e}");
                    process::exit(1);
                }
            }
        }
    }
}
