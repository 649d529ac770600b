/// Minimal error taxonomy for the fitting pipeline.
///
/// Short-but-nonempty reference trajectories are a warning-level
/// condition handled inside the fitter, not an error. Only inputs the
/// solver cannot be handed at all surface here.
use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FitError {
    /// The reference trajectory had no samples; there is nothing to fit.
    #[error("reference trajectory is empty")]
    EmptyReference,
}
