// fit.rs
// Quartic least-squares fit of a trajectory against its implicit time axis.

use nalgebra::{DMatrix, DVector};
use tracing::warn;

use crate::error::FitError;
use crate::trajectory::{project, Axis, Sample};

/// Polynomial degree of the time fit. Fixed by the service contract.
const DEGREE: usize = 4;

/// Singular-value cutoff for the SVD solve. Singular values below this
/// are treated as rank deficiency and zeroed instead of amplified.
const SVD_EPS: f64 = 1e-10;

/// Degree-4 polynomial model of one axis as a function of time, with
/// the constant term dropped: coefficients ordered `[c4, c3, c2, c1]`.
///
/// The constant term IS part of the least-squares solve but is
/// discarded from the returned model, and [`QuarticModel::predict`]
/// has no constant term either. The two halves are internally
/// consistent; callers must not re-add an offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuarticModel {
    pub coefficients: [f64; 4],
}

impl QuarticModel {
    /// Evaluate the model at time index `t`:
    /// `p(t) = c4·t⁴ + c3·t³ + c2·t² + c1·t`
    pub fn predict(&self, t: f64) -> f64 {
        let [c4, c3, c2, c1] = self.coefficients;
        c4 * t.powi(4) + c3 * t.powi(3) + c2 * t.powi(2) + c1 * t
    }
}

/// Fit all three axes of a reference trajectory to quartic functions
/// of time, `t = 0, 1, .., n-1`.
///
/// Fewer than DEGREE + 1 samples cannot determine the fit uniquely;
/// that is a known numerical-quality limitation, not a failure — the
/// solve proceeds and the condition is logged. Only an empty reference
/// is rejected.
pub fn fit(
    reference: &[Sample],
) -> Result<(QuarticModel, QuarticModel, QuarticModel), FitError> {
    if reference.is_empty() {
        return Err(FitError::EmptyReference);
    }
    if reference.len() <= DEGREE {
        warn!(
            samples = reference.len(),
            "reference trajectory underdetermines the degree-{} fit; \
             coefficients may be unstable",
            DEGREE
        );
    }

    let fit_x = fit_axis(&project(reference, Axis::X));
    let fit_y = fit_axis(&project(reference, Axis::Y));
    let fit_z = fit_axis(&project(reference, Axis::Z));

    Ok((fit_x, fit_y, fit_z))
}

/// Least-squares quartic fit of one axis vector against `t = 0..n-1`.
///
/// Solves the full 5-column Vandermonde system (t⁴ down to t⁰) via
/// SVD, then discards the constant term. The singular-value cutoff
/// makes rank-deficient systems (short or constant inputs) yield the
/// minimum-norm solution with finite coefficients instead of failing.
fn fit_axis(values: &[f64]) -> QuarticModel {
    let n = values.len();

    let vandermonde = DMatrix::from_fn(n, DEGREE + 1, |row, col| {
        (row as f64).powi((DEGREE - col) as i32)
    });
    let rhs = DVector::from_column_slice(values);

    let svd = vandermonde.svd(true, true);
    // solve() only errors when the U/V factors were not computed;
    // both are requested above.
    let solution = svd
        .solve(&rhs, SVD_EPS)
        .unwrap_or_else(|_| DVector::zeros(DEGREE + 1));

    // Highest degree first; the trailing t⁰ coefficient is dropped.
    QuarticModel {
        coefficients: [solution[0], solution[1], solution[2], solution[3]],
    }
}
