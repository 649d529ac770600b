//! Drift Core
//!
//! Pure computational core for trajectory deviation scoring: axis
//! projection, quartic least-squares fitting against an implicit time
//! axis, and residual standard-deviation scoring. No transport
//! knowledge, no retained state; every function here is a pure
//! function of its input.

pub mod error;
pub mod fit;
pub mod score;
pub mod trajectory;

#[cfg(test)]
mod pipeline_test;

pub use error::FitError;
pub use fit::{fit, QuarticModel};
pub use score::score;
pub use trajectory::{project, Axis, Sample, Trajectory};
