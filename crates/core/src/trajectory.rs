// trajectory.rs
// Ordered 3D position samples over an implicit uniform time axis.

use serde::{Deserialize, Serialize};

/// One 3D position sample. Wire form is a 3-element JSON array
/// `[x, y, z]`; there is no timestamp field — position in the parent
/// sequence IS the time index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample(pub f64, pub f64, pub f64);

/// Ordered, finite sequence of samples, assumed equally spaced in
/// time. Order is significant end to end: it defines the time axis.
pub type Trajectory = Vec<Sample>;

/// Coordinate axis selector for projections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

impl Sample {
    /// Coordinate along one axis.
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.0,
            Axis::Y => self.1,
            Axis::Z => self.2,
        }
    }
}

/// Project one axis out of a trajectory.
///
/// Order- and length-preserving: the result has one value per sample,
/// in sample order.
pub fn project(trajectory: &[Sample], axis: Axis) -> Vec<f64> {
    trajectory.iter().map(|s| s.along(axis)).collect()
}
