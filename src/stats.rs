// src/stats.rs
//! Sample statistics over payoff series.
//!
//! Free functions with no dependency on simulation state, so any caller can
//! reduce an arbitrary numeric sequence with them.

use crate::error::{SdeError, SdeResult};

/// Arithmetic mean.
///
/// # Errors
/// `DivideByZero` when `values` is empty.
pub fn mean(values: &[f64]) -> SdeResult<f64> {
    if values.is_empty() {
        return Err(SdeError::DivideByZero {
            operation: "mean".to_string(),
            len: 0,
        });
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation with Bessel's correction
///
/// ```text
/// s = √( Σ(xᵢ - x̄)² / (n - 1) )
/// ```
///
/// # Errors
/// `DivideByZero` when fewer than two values are given.
pub fn stddev(values: &[f64]) -> SdeResult<f64> {
    if values.len() < 2 {
        return Err(SdeError::DivideByZero {
            operation: "stddev".to_string(),
            len: values.len(),
        });
    }
    let m = mean(values)?;
    let sum_sq = values.iter().map(|x| (x - m).powi(2)).sum::<f64>();
    Ok((sum_sq / (values.len() - 1) as f64).sqrt())
}
