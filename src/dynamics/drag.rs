//! Direction-dependent linear drag

use nalgebra::{Matrix3, Vector3};

use crate::config::VehicleParams;

/// Pair of drag diagonals, one per velocity sign
#[derive(Debug, Clone, PartialEq)]
pub struct DragModel {
    positive: Vector3<f64>,
    negative: Vector3<f64>,
}

impl DragModel {
    pub fn new(positive: Vector3<f64>, negative: Vector3<f64>) -> Self {
        Self { positive, negative }
    }

    pub fn from_params(params: &VehicleParams) -> Self {
        Self::new(Vector3::from(params.drag_pos), Vector3::from(params.drag_neg))
    }

    /// Drag matrix active at the given body velocity
    ///
    /// Starts from the negative set and overwrites each axis whose velocity
    /// is >= 0 with the positive coefficient. Selection follows the current
    /// state, not the commanded velocity.
    pub fn active(&self, body_velocity: &Vector3<f64>) -> Matrix3<f64> {
        let mut diag = self.negative;
        for (i, v) in body_velocity.iter().enumerate() {
            if *v >= 0.0 {
                diag[i] = self.positive[i];
            }
        }
        Matrix3::from_diagonal(&diag)
    }
}
