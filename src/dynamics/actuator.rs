//! Thruster allocation and saturation
//!
//! A commanded body wrench is decomposed into per-thruster commands with
//! the right pseudo-inverse of the allocation matrix, clipped to each
//! thruster's limit, and recomposed. Clipping in actuator space distorts the
//! wrench the way real saturation does, unlike a plain wrench clip.

use nalgebra::{Matrix3x4, Matrix4x3, Vector4};

use crate::common::{Effort, EscapeError, EscapeResult};
use crate::config::VehicleParams;

/// Allocation matrix `B`, its pseudo-inverse and per-thruster limits
#[derive(Debug, Clone, PartialEq)]
pub struct ActuatorMap {
    b: Matrix3x4<f64>,
    inv_b: Matrix4x3<f64>,
    thrust_max: Vector4<f64>,
}

impl ActuatorMap {
    /// Build from an explicit allocation matrix
    pub fn new(b: Matrix3x4<f64>, thrust_max: Vector4<f64>) -> EscapeResult<Self> {
        let b_bt_inv = (b * b.transpose()).try_inverse().ok_or_else(|| {
            EscapeError::NumericalError("thruster allocation matrix is rank deficient".to_string())
        })?;
        let inv_b = b.transpose() * b_bt_inv;

        Ok(Self { b, inv_b, thrust_max })
    }

    /// Build from the thruster layout in the vehicle parameters
    pub fn from_params(params: &VehicleParams) -> EscapeResult<Self> {
        let mut b = Matrix3x4::zeros();
        for (j, thruster) in params.thrusters.iter().enumerate() {
            let (s, c) = thruster.angle.sin_cos();
            b[(0, j)] = c;
            b[(1, j)] = s;
            b[(2, j)] = thruster.x * s - thruster.y * c;
        }
        Self::new(b, Vector4::from(params.thrust_max))
    }

    pub fn b(&self) -> &Matrix3x4<f64> {
        &self.b
    }

    pub fn inv_b(&self) -> &Matrix4x3<f64> {
        &self.inv_b
    }

    pub fn thrust_max(&self) -> &Vector4<f64> {
        &self.thrust_max
    }

    /// Per-thruster commands for a wrench, before clipping
    pub fn allocate(&self, effort: &Effort) -> Vector4<f64> {
        self.inv_b * effort
    }

    /// Wrench actually produced once every thruster is clipped to its limit
    pub fn saturate(&self, effort: &Effort) -> Effort {
        let commands = self.allocate(effort);
        let clipped = commands.zip_map(&self.thrust_max, |u, limit| u.max(-limit).min(limit));
        self.b * clipped
    }

    /// Largest wrench magnitude along one body axis that saturates no thruster
    pub fn peak_wrench(&self, axis: usize) -> f64 {
        self.inv_b
            .column(axis)
            .iter()
            .zip(self.thrust_max.iter())
            .filter(|(share, _)| share.abs() > f64::EPSILON)
            .map(|(share, limit)| limit / share.abs())
            .fold(f64::INFINITY, f64::min)
    }
}
