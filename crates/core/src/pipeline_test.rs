//! End-to-end pipeline tests: projection → fit → projection → score,
//! exercising the scenarios the service contract promises.

use crate::{fit, project, score, Axis, Sample};

fn score_all(reference: &[Sample], recent: &[Sample]) -> (f64, f64, f64) {
    let (fit_x, fit_y, fit_z) = fit(reference).unwrap();
    (
        score(&fit_x, &project(recent, Axis::X)),
        score(&fit_y, &project(recent, Axis::Y)),
        score(&fit_z, &project(recent, Axis::Z)),
    )
}

fn linear_trajectory(n: usize) -> Vec<Sample> {
    (0..n)
        .map(|t| {
            let t = t as f64;
            Sample(t, t, t)
        })
        .collect()
}

#[test]
fn test_linear_motion_scores_zero_on_all_axes() {
    let trajectory = linear_trajectory(6);
    let (ex, ey, ez) = score_all(&trajectory, &trajectory);

    assert!(ex < 1e-7, "error_x = {}", ex);
    assert!(ey < 1e-7, "error_y = {}", ey);
    assert!(ez < 1e-7, "error_z = {}", ez);
}

#[test]
fn test_stationary_reference_constant_offset_recent() {
    // Reference never moves; recent sits at x = 10. The residuals on x
    // are a constant -10, and a constant has zero deviation around its
    // own mean — the literal formula, not intuition, decides this.
    let reference = vec![Sample(0.0, 0.0, 0.0); 5];
    let recent = vec![Sample(10.0, 0.0, 0.0), Sample(10.0, 0.0, 0.0)];

    let (ex, ey, ez) = score_all(&reference, &recent);

    assert!(ex < 1e-9, "error_x = {}", ex);
    assert!(ey < 1e-9, "error_y = {}", ey);
    assert!(ez < 1e-9, "error_z = {}", ez);
}

#[test]
fn test_perfect_quartic_scores_zero() {
    // Reference and recent both generated from the same
    // quartic-minus-constant; the fitted model reproduces it, so the
    // residual spread vanishes.
    let trajectory: Vec<Sample> = (0..9)
        .map(|t| {
            let t = t as f64;
            let v = 0.003 * t.powi(4) - 0.04 * t.powi(3) + 0.5 * t.powi(2) + 2.0 * t;
            Sample(v, v, v)
        })
        .collect();

    let (ex, ey, ez) = score_all(&trajectory, &trajectory);
    assert!(ex < 1e-7, "error_x = {}", ex);
    assert!(ey < 1e-7, "error_y = {}", ey);
    assert!(ez < 1e-7, "error_z = {}", ez);
}

#[test]
fn test_diverging_recent_scores_high() {
    // Linear reference, quadratic recent: residuals grow with t, so
    // their spread is clearly non-zero.
    let reference = linear_trajectory(8);
    let recent: Vec<Sample> = (0..8)
        .map(|t| {
            let t = t as f64;
            Sample(t * t, t, t)
        })
        .collect();

    let (ex, ey, ez) = score_all(&reference, &recent);

    assert!(ex > 1.0, "error_x = {}", ex);
    assert!(ey < 1e-7);
    assert!(ez < 1e-7);
}

#[test]
fn test_score_depends_only_on_recent_length() {
    // The same motion described by more reference samples fits to the
    // same line, so the score over a fixed recent window is unchanged.
    let recent = linear_trajectory(3);

    let (short, _, _) = score_all(&linear_trajectory(6), &recent);
    let (long, _, _) = score_all(&linear_trajectory(12), &recent);

    assert!((short - long).abs() < 1e-9, "{} vs {}", short, long);
}

#[test]
fn test_empty_recent_scores_sentinel_on_all_axes() {
    let reference = linear_trajectory(6);
    let (ex, ey, ez) = score_all(&reference, &[]);

    assert_eq!((ex, ey, ez), (0.0, 0.0, 0.0));
}

#[test]
fn test_permuting_reference_changes_the_score() {
    // Sequence order defines the time axis, so the pipeline must not
    // be permutation-invariant.
    let reference: Vec<Sample> = (0..7)
        .map(|t| {
            let t = t as f64;
            Sample(t * t, t, t)
        })
        .collect();
    let permuted: Vec<Sample> = reference.iter().rev().copied().collect();
    let recent = linear_trajectory(5);

    let (original, _, _) = score_all(&reference, &recent);
    let (shuffled, _, _) = score_all(&permuted, &recent);

    assert!(
        (original - shuffled).abs() > 1e-3,
        "permutation left the score unchanged: {} vs {}",
        original,
        shuffled
    );
}
