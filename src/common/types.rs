//! Common types used throughout escape_planner

use nalgebra::{Matrix3x6, Matrix6, Vector3, Vector6};

use crate::common::error::{EscapeError, EscapeResult};

/// Number of state dimensions: `[x, y, heading, surge, sway, yaw_rate]`
pub const NSTATES: usize = 6;
/// Number of control dimensions: `[force_x, force_y, torque_z]`
pub const NCONTROLS: usize = 3;

/// World-frame pose followed by body-frame velocity
pub type State = Vector6<f64>;

/// Body-frame wrench before actuator saturation
pub type Effort = Vector3<f64>;

/// Cost-to-go weighting returned by the local policy
pub type CostToGo = Matrix6<f64>;

/// Feedback gain mapping a state error to a corrective wrench
pub type FeedbackGain = Matrix3x6<f64>;

/// Named indices into a [`State`]
pub mod idx {
    pub const X: usize = 0;
    pub const Y: usize = 1;
    pub const HEADING: usize = 2;
    pub const SURGE: usize = 3;
    pub const SWAY: usize = 4;
    pub const YAW_RATE: usize = 5;
}

/// Build a state from a planner buffer, rejecting anything that is not 6 long
pub fn state_from_slice(values: &[f64]) -> EscapeResult<State> {
    if values.len() != NSTATES {
        return Err(EscapeError::DimensionMismatch {
            what: "state",
            expected: NSTATES,
            actual: values.len(),
        });
    }
    Ok(State::from_column_slice(values))
}

/// Build a control effort from a planner buffer, rejecting anything that is not 3 long
pub fn effort_from_slice(values: &[f64]) -> EscapeResult<Effort> {
    if values.len() != NCONTROLS {
        return Err(EscapeError::DimensionMismatch {
            what: "effort",
            expected: NCONTROLS,
            actual: values.len(),
        });
    }
    Ok(Effort::from_column_slice(values))
}

/// Closed interval `[min, max]` on one state dimension
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Interval of half-width `half_width` around `center`
    pub fn centered(center: f64, half_width: f64) -> Self {
        Self {
            min: center - half_width,
            max: center + half_width,
        }
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    pub fn center(&self) -> f64 {
        0.5 * (self.min + self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_slice() {
        let state = state_from_slice(&[1.0, 2.0, 0.5, 0.1, 0.0, -0.2]).unwrap();
        assert_eq!(state[idx::Y], 2.0);
        assert_eq!(state[idx::YAW_RATE], -0.2);
    }

    #[test]
    fn test_slice_dimension_mismatch() {
        let err = state_from_slice(&[0.0; 5]).unwrap_err();
        assert!(matches!(
            err,
            EscapeError::DimensionMismatch { what: "state", expected: 6, actual: 5 }
        ));

        let err = effort_from_slice(&[0.0; 4]).unwrap_err();
        assert!(matches!(
            err,
            EscapeError::DimensionMismatch { what: "effort", expected: 3, actual: 4 }
        ));
    }

    #[test]
    fn test_interval() {
        let interval = Interval::centered(1.0, 3.0);
        assert_eq!(interval, Interval::new(-2.0, 4.0));
        assert!((interval.width() - 6.0).abs() < 1e-12);
        assert!((interval.center() - 1.0).abs() < 1e-12);
        assert!(interval.contains(-2.0));
        assert!(!interval.contains(4.5));
    }
}
