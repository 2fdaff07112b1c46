//! Planar 3-DOF boat model
//!
//!   pose_dot = R(heading) * nu
//!   M * nu_dot + D(nu) * nu = B * sat(invB * tau)
//!
//! with pose = [x, y, heading], nu = [surge, sway, yaw_rate] and a drag
//! matrix D chosen per axis by the sign of nu.
//!
//! Integration is explicit first-order Euler. Large `dt` against large drag
//! over inertia can make the velocity update overshoot and diverge.

use nalgebra::Vector3;
use tracing::trace;

use crate::common::{effort_from_slice, idx, state_from_slice, DynamicsModel, Effort, EscapeError, EscapeResult, State};
use crate::config::VehicleParams;
use crate::dynamics::{rotation, ActuatorMap, DragModel};

/// Forward dynamics handed to the planner
#[derive(Debug, Clone, PartialEq)]
pub struct BoatDynamics {
    inv_m: Vector3<f64>,
    drag: DragModel,
    actuators: ActuatorMap,
}

impl BoatDynamics {
    pub fn new(inv_m: Vector3<f64>, drag: DragModel, actuators: ActuatorMap) -> Self {
        Self { inv_m, drag, actuators }
    }

    pub fn from_params(params: &VehicleParams) -> EscapeResult<Self> {
        if params.mass <= 0.0 || params.inertia <= 0.0 {
            return Err(EscapeError::NumericalError(format!(
                "inertia must be positive (mass {}, inertia {})",
                params.mass, params.inertia
            )));
        }
        let inv_m = Vector3::new(1.0 / params.mass, 1.0 / params.mass, 1.0 / params.inertia);
        Ok(Self::new(
            inv_m,
            DragModel::from_params(params),
            ActuatorMap::from_params(params)?,
        ))
    }

    pub fn actuators(&self) -> &ActuatorMap {
        &self.actuators
    }

    pub fn drag(&self) -> &DragModel {
        &self.drag
    }

    /// Continuous-time state derivative
    pub fn derivative(&self, state: &State, effort: &Effort) -> State {
        let nu: Vector3<f64> = state.fixed_rows::<3>(3).into_owned();
        let r = rotation(state[idx::HEADING]);
        let d = self.drag.active(&nu);
        let tau = self.actuators.saturate(effort);

        let pose_dot = r * nu;
        let nu_dot = self.inv_m.component_mul(&(tau - d * nu));

        let mut xdot = State::zeros();
        xdot.fixed_rows_mut::<3>(0).copy_from(&pose_dot);
        xdot.fixed_rows_mut::<3>(3).copy_from(&nu_dot);
        xdot
    }

    /// One explicit Euler step
    pub fn step(&self, state: &State, effort: &Effort, dt: f64) -> State {
        state + self.derivative(state, effort) * dt
    }

    /// Step on planner-owned buffers, checking their lengths first
    pub fn step_slice(&self, state: &[f64], effort: &[f64], dt: f64) -> EscapeResult<State> {
        let state = state_from_slice(state)?;
        let effort = effort_from_slice(effort)?;
        let next = self.step(&state, &effort, dt);
        trace!(?next, dt, "boat step");
        Ok(next)
    }
}

impl DynamicsModel for BoatDynamics {
    fn step(&self, state: &State, effort: &Effort, dt: f64) -> State {
        BoatDynamics::step(self, state, effort, dt)
    }
}
