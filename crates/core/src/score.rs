// score.rs
// Residual standard deviation between a fitted model and observed values.

use crate::fit::QuarticModel;

/// Score one axis: the population standard deviation of the residuals
/// `p(t) − observed[t]` over `t = 0..m`.
///
/// Only the length of the observed vector matters for the evaluation
/// range; it is independent of how long the reference trajectory was.
/// An empty observation vector has no defined deviation, so the
/// documented sentinel `0.0` is returned — the caller never sees NaN.
pub fn score(model: &QuarticModel, observed: &[f64]) -> f64 {
    if observed.is_empty() {
        return 0.0;
    }

    let residuals: Vec<f64> = observed
        .iter()
        .enumerate()
        .map(|(t, value)| model.predict(t as f64) - value)
        .collect();

    std_deviation(&residuals)
}

/// Population standard deviation (divisor n, not n − 1).
fn std_deviation(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values
        .iter()
        .map(|v| {
            let d = v - mean;
            d * d
        })
        .sum::<f64>()
        / n;

    variance.sqrt()
}
