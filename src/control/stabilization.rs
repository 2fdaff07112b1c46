//! Fixed-form local stabilization policy
//!
//! Returns a constant cost-to-go weighting and the feedback gain
//!
//!   K = [ kp * R(heading)^T | kd ]
//!
//! which maps a 6-dim state error to a body-frame corrective wrench. No
//! Riccati equation is solved; the planner evaluates this at every tree
//! expansion.

use nalgebra::{Matrix3, Matrix6, Vector3, Vector6};

use crate::common::{
    effort_from_slice, idx, state_from_slice, CostToGo, Effort, EscapeResult, FeedbackGain, LocalPolicy, State,
};
use crate::config::GainParams;
use crate::dynamics::rotation;

/// Proportional/damping gains plus the constant cost-to-go
#[derive(Debug, Clone, PartialEq)]
pub struct StabilizationPolicy {
    kp: Matrix3<f64>,
    kd: Matrix3<f64>,
    s: CostToGo,
}

impl StabilizationPolicy {
    pub fn new(kp: Matrix3<f64>, kd: Matrix3<f64>, s: CostToGo) -> Self {
        Self { kp, kd, s }
    }

    pub fn from_params(params: &GainParams) -> Self {
        Self::new(
            Matrix3::from_diagonal(&Vector3::from(params.kp)),
            Matrix3::from_diagonal(&Vector3::from(params.kd)),
            Matrix6::from_diagonal(&Vector6::from(params.s)),
        )
    }

    pub fn cost_to_go(&self) -> &CostToGo {
        &self.s
    }

    /// `effort` is unused; it is part of the signature the planner calls
    pub fn gains(&self, state: &State, _effort: &Effort) -> (CostToGo, FeedbackGain) {
        let r = rotation(state[idx::HEADING]);
        let mut k = FeedbackGain::zeros();
        k.fixed_columns_mut::<3>(0).copy_from(&(self.kp * r.transpose()));
        k.fixed_columns_mut::<3>(3).copy_from(&self.kd);
        (self.s, k)
    }

    pub fn gains_slice(&self, state: &[f64], effort: &[f64]) -> EscapeResult<(CostToGo, FeedbackGain)> {
        let state = state_from_slice(state)?;
        let effort = effort_from_slice(effort)?;
        Ok(self.gains(&state, &effort))
    }
}

impl Default for StabilizationPolicy {
    fn default() -> Self {
        Self::from_params(&GainParams::default())
    }
}

impl LocalPolicy for StabilizationPolicy {
    fn gains(&self, state: &State, effort: &Effort) -> (CostToGo, FeedbackGain) {
        StabilizationPolicy::gains(self, state, effort)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::EscapeError;
    use approx::assert_relative_eq;

    #[test]
    fn test_gain_at_zero_heading() {
        let policy = StabilizationPolicy::default();
        let (s, k) = policy.gains(&State::zeros(), &Effort::zeros());

        assert_eq!(s, Matrix6::identity());
        let expected = FeedbackGain::new(
            150.0, 0.0, 0.0, 150.0, 0.0, 0.0,
            0.0, 150.0, 0.0, 0.0, 150.0, 0.0,
            0.0, 0.0, 1000.0, 0.0, 0.0, 1.0,
        );
        assert_relative_eq!(k, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_position_gain_rotates_into_body_frame() {
        let policy = StabilizationPolicy::default();
        let state = State::new(3.0, -1.0, std::f64::consts::FRAC_PI_2, 0.0, 0.0, 0.0);
        let (_, k) = policy.gains(&state, &Effort::zeros());

        // World +y error while facing +y is a pure surge correction
        let error = State::new(0.0, 1.0, 0.0, 0.0, 0.0, 0.0);
        let wrench = k * error;
        assert_relative_eq!(wrench, Vector3::new(150.0, 0.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn test_cost_to_go_constant_and_effort_ignored() {
        let policy = StabilizationPolicy::default();
        let state = State::new(1.0, 2.0, 0.7, 0.3, -0.1, 0.05);
        let (s1, k1) = policy.gains(&state, &Effort::zeros());
        let (s2, k2) = policy.gains(&state, &Effort::new(500.0, -20.0, 3.0));
        assert_eq!(s1, *policy.cost_to_go());
        assert_eq!(s1, s2);
        assert_eq!(k1, k2);
    }

    #[test]
    fn test_damping_block_independent_of_heading() {
        let policy = StabilizationPolicy::default();
        for i in 0..12 {
            let state = State::new(0.0, 0.0, i as f64 * 0.5, 0.0, 0.0, 0.0);
            let (_, k) = policy.gains(&state, &Effort::zeros());
            assert_eq!(k.fixed_columns::<3>(3).into_owned(), Matrix3::from_diagonal(&Vector3::new(150.0, 150.0, 1.0)));
        }
    }

    #[test]
    fn test_gains_slice_checks_dimensions() {
        let policy = StabilizationPolicy::default();
        let (_, k) = policy.gains_slice(&[0.0; 6], &[0.0; 3]).unwrap();
        assert_eq!(k.shape(), (3, 6));

        let err = policy.gains_slice(&[0.0; 7], &[0.0; 3]).unwrap_err();
        assert!(matches!(err, EscapeError::DimensionMismatch { what: "state", .. }));
    }
}
