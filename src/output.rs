// src/output.rs
//! Reporting sinks and CSV export.
//!
//! The simulator never prints. It hands the parameter echo and the result
//! summary to a [`Reporter`], so callers decide where text goes.

use crate::mc::mc_engine::{BarrierConfig, SimulationSummary};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Receives the parameter echo before a run and the summary after it.
pub trait Reporter {
    fn report_parameters(&mut self, cfg: &BarrierConfig, dt: f64) -> io::Result<()>;
    fn report_results(&mut self, summary: &SimulationSummary) -> io::Result<()>;
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report_parameters(&mut self, _cfg: &BarrierConfig, _dt: f64) -> io::Result<()> {
        Ok(())
    }

    fn report_results(&mut self, _summary: &SimulationSummary) -> io::Result<()> {
        Ok(())
    }
}

/// Plain-text report written to any `io::Write`
pub struct TextReporter<W: Write> {
    out: W,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn report_parameters(&mut self, cfg: &BarrierConfig, dt: f64) -> io::Result<()> {
        writeln!(self.out, "Simulation Parameters:")?;
        writeln!(self.out, "S0 (Initial Stock Price): {}", cfg.s0)?;
        writeln!(self.out, "K (Strike Price): {}", cfg.k)?;
        writeln!(self.out, "sigma (Volatility): {}", cfg.sigma)?;
        writeln!(self.out, "r (Risk-Free Rate): {}", cfg.r)?;
        writeln!(self.out, "t (Time to Maturity): {}", cfg.t)?;
        writeln!(self.out, "b (Barrier): {}", cfg.b)?;
        writeln!(self.out, "n_steps (Number of Steps): {}", cfg.n_steps)?;
        writeln!(self.out, "num_exp (Number of Experiments): {}", cfg.num_exp)?;
        writeln!(self.out, "seed: {}", cfg.seed)?;
        writeln!(self.out, "dt (Time Increment): {}", dt)?;
        writeln!(self.out)?;
        self.out.flush()
    }

    fn report_results(&mut self, summary: &SimulationSummary) -> io::Result<()> {
        writeln!(self.out, "Results:")?;
        writeln!(
            self.out,
            "Average Payoff (Undiscounted): {:.6}",
            summary.average_payoff
        )?;
        writeln!(
            self.out,
            "Current Value of Payoff (Discounted): {:.6}",
            summary.current_value
        )?;
        writeln!(
            self.out,
            "Standard Deviation of Current Value of Payoff (Discounted): {:.6}",
            summary.discounted_stddev
        )?;
        writeln!(self.out, "Standard Error: {:.6}", summary.standard_error)?;
        writeln!(
            self.out,
            "Barrier Activation Rate: {:.4}",
            summary.activation_rate
        )?;
        writeln!(self.out, "------------------------------------------")?;
        self.out.flush()
    }
}

pub fn write_payoffs_to_csv<P: AsRef<Path>>(filename: P, payoffs: &[f64]) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(filename)?);
    writeln!(file, "exp_num,payoff")?;
    for (i, payoff) in payoffs.iter().enumerate() {
        writeln!(file, "{},{}", i + 1, payoff)?;
    }
    file.flush()
}

pub fn write_summary_to_csv<P: AsRef<Path>>(
    filename: P,
    cfg: &BarrierConfig,
    summary: &SimulationSummary,
) -> io::Result<()> {
    let mut file = File::create(filename)?;
    let rows: [(&str, String); 11] = [
        ("s0", cfg.s0.to_string()),
        ("k", cfg.k.to_string()),
        ("sigma", cfg.sigma.to_string()),
        ("r", cfg.r.to_string()),
        ("t", cfg.t.to_string()),
        ("b", cfg.b.to_string()),
        ("n_steps", cfg.n_steps.to_string()),
        ("num_exp", cfg.num_exp.to_string()),
        ("average_payoff", summary.average_payoff.to_string()),
        ("current_value", summary.current_value.to_string()),
        ("discounted_stddev", summary.discounted_stddev.to_string()),
    ];
    for (key, value) in &rows {
        writeln!(file, "{},{}", key, value)?;
    }
    Ok(())
}
