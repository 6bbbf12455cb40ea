//! Mean / standard deviation aggregation
//!
//! Shared by the sector statistics and the eye-region spread. The n = 0
//! case deliberately yields a NaN mean (0/0) instead of an error: empty
//! regions are an expected condition and the NaN propagates into the
//! result record, where downstream formatting renders it as unavailable.

/// Mean and sample standard deviation of a value set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleStats {
    /// Arithmetic mean; NaN for an empty input
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator); 0 for n <= 1
    pub stdv: f64,
}

/// Compute mean and sample standard deviation.
///
/// Never panics: an empty slice yields `mean = NaN, stdv = 0`, a single
/// value yields `stdv = 0`.
pub fn skew(values: &[f64]) -> SampleStats {
    let n = values.len();
    let sum: f64 = values.iter().sum();
    let mean = sum / n as f64;

    let sum_squared: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
    let stdv = if n <= 1 {
        0.0
    } else {
        ((1.0 / (n as f64 - 1.0)) * sum_squared).sqrt()
    };

    SampleStats { mean, stdv }
}
