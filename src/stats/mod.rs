//! Descriptive statistics for the analysis pipeline.
//!
//! Mean uses Kahan compensated summation and the deviation uses Welford's
//! online algorithm, so the results stay stable on salary-scale magnitudes.

pub mod sample;
pub mod ttest;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Descriptive summary
// ---------------------------------------------------------------------------

/// Descriptive summary of one variable.
///
/// `std_dev` is the n−1 (Bessel-corrected) estimator for BOTH the
/// population and the sample summaries. Using the sample estimator for the
/// "population" is a known quirk of the upstream analysis, reproduced
/// deliberately because the reported significance values depend on it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Descriptive {
    pub n: usize,
    pub mean: f64,
    pub std_dev: f64,
}

/// Summarize a variable. `None` for fewer than two values (the deviation is
/// undefined there).
pub fn describe(values: &[f64]) -> Option<Descriptive> {
    Some(Descriptive {
        n: values.len(),
        mean: mean(values)?,
        std_dev: sample_std_dev(values)?,
    })
}

/// Arithmetic mean via Kahan compensated summation.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sum = 0.0;
    let mut compensation = 0.0;
    for &v in values {
        let y = v - compensation;
        let t = sum + y;
        compensation = (t - sum) - y;
        sum = t;
    }
    Some(sum / values.len() as f64)
}

/// Sample standard deviation (n−1 denominator) via Welford's algorithm.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mut mean = 0.0;
    let mut m2 = 0.0;
    for (i, &v) in values.iter().enumerate() {
        let delta = v - mean;
        mean += delta / (i + 1) as f64;
        m2 += delta * (v - mean);
    }
    Some((m2 / (values.len() - 1) as f64).sqrt())
}

/// Quantile by R-7 linear interpolation (the pandas/numpy default):
/// `h = (n − 1)·p`, interpolate between the bracketing order statistics.
pub fn quantile(values: &[f64], p: f64) -> Option<f64> {
    if values.is_empty() || !(0.0..=1.0).contains(&p) {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let h = (sorted.len() - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(sorted.len() - 1);
    Some(sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo]))
}
