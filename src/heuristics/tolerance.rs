//! Goal acceptance for the escape behavior
//!
//! Only arrival position is enforced. Heading and all three velocities carry
//! an infinite tolerance.

use crate::common::{idx, State, NSTATES};
use crate::config::PlanningParams;
use crate::dynamics::wrap_angle;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalTolerance {
    goal_buffer: [f64; NSTATES],
    error_tol: [f64; NSTATES],
}

impl GoalTolerance {
    /// `[r, r, inf, inf, inf, inf]` for both the goal buffer and the error tolerance
    pub fn from_free_radius(free_radius: f64) -> Self {
        let inf = f64::INFINITY;
        let goal_buffer = [free_radius, free_radius, inf, inf, inf, inf];
        Self {
            goal_buffer,
            error_tol: goal_buffer,
        }
    }

    pub fn from_params(params: &PlanningParams) -> Self {
        Self::from_free_radius(params.free_radius)
    }

    pub fn goal_buffer(&self) -> &[f64; NSTATES] {
        &self.goal_buffer
    }

    pub fn error_tol(&self) -> &[f64; NSTATES] {
        &self.error_tol
    }

    /// True when every dimension of `state` is within `error_tol` of `goal`
    pub fn is_reached(&self, goal: &State, state: &State) -> bool {
        within(&self.error_tol, goal, state)
    }
}

fn within(tol: &[f64; NSTATES], goal: &State, state: &State) -> bool {
    (0..NSTATES).all(|i| {
        if tol[i].is_infinite() {
            return true;
        }
        let mut err = goal[i] - state[i];
        if i == idx::HEADING {
            err = wrap_angle(err);
        }
        err.abs() <= tol[i]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_buffer_shape() {
        let tol = GoalTolerance::from_free_radius(4.0);
        assert_eq!(tol.goal_buffer()[..2], [4.0, 4.0]);
        assert!(tol.goal_buffer()[2..].iter().all(|t| t.is_infinite()));
        assert_eq!(tol.error_tol(), tol.goal_buffer());
    }

    #[test]
    fn test_only_position_matters() {
        let tol = GoalTolerance::from_free_radius(1.0);
        let goal = State::new(10.0, 10.0, 0.0, 0.0, 0.0, 0.0);

        let near = State::new(10.5, 9.2, PI, 2.0, -1.0, 0.7);
        assert!(tol.is_reached(&goal, &near));

        let far = State::new(11.5, 10.0, 0.0, 0.0, 0.0, 0.0);
        assert!(!tol.is_reached(&goal, &far));
    }

    #[test]
    fn test_unconstrained_dims_tolerate_nan() {
        let tol = GoalTolerance::from_free_radius(1.0);
        let state = State::new(0.0, 0.0, f64::NAN, f64::NAN, 0.0, 0.0);
        assert!(tol.is_reached(&State::zeros(), &state));
    }

    #[test]
    fn test_nan_position_never_reached() {
        let tol = GoalTolerance::from_free_radius(1.0);
        let state = State::new(f64::NAN, 0.0, 0.0, 0.0, 0.0, 0.0);
        assert!(!tol.is_reached(&State::zeros(), &state));
    }
}
