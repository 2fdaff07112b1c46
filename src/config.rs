//! Physical and planning constants for the escape behavior
//!
//! Everything the dynamics, policy, heuristic and planner assembly need is
//! bundled in [`EscapeParams`]. The bundle is immutable once built and is
//! passed explicitly into each component constructor.
//!
//! Parameters can be loaded from TOML; any omitted key keeps the value of
//! the reference boat.

use std::f64::consts::PI;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::common::{EscapeError, EscapeResult};
use crate::dynamics::ActuatorMap;

/// One fixed-direction thruster in the body frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThrusterParams {
    /// Longitudinal position [m]
    pub x: f64,
    /// Lateral position [m]
    pub y: f64,
    /// Thrust direction [rad]
    pub angle: f64,
}

impl ThrusterParams {
    pub fn new(x: f64, y: f64, angle: f64) -> Self {
        Self { x, y, angle }
    }
}

/// Rigid-body, actuator and drag constants of the vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleParams {
    /// Mass [kg]
    pub mass: f64,
    /// Yaw moment of inertia [kg*m^2]
    pub inertia: f64,
    /// Thruster layout: back-left, back-right, front-left, front-right
    pub thrusters: [ThrusterParams; 4],
    /// Per-thruster saturation [N]
    pub thrust_max: [f64; 4],
    /// Drag diagonal used when the velocity component is >= 0
    pub drag_pos: [f64; 3],
    /// Drag diagonal used when the velocity component is < 0
    pub drag_neg: [f64; 3],
    /// Top body velocities going forward [m/s, m/s, rad/s]
    pub velmax_pos: [f64; 3],
    /// Top body velocities going in reverse (negative)
    pub velmax_neg: [f64; 3],
}

impl Default for VehicleParams {
    fn default() -> Self {
        Self {
            mass: 500.0,
            inertia: 400.0,
            thrusters: [
                ThrusterParams::new(-1.9, 1.0, -PI / 4.0),
                ThrusterParams::new(-1.9, -1.0, PI / 4.0),
                ThrusterParams::new(1.6, 0.6, -3.0 * PI / 4.0),
                ThrusterParams::new(1.6, -0.6, 3.0 * PI / 4.0),
            ],
            thrust_max: [220.0; 4],
            // Peak single-axis wrench over the velocity limits, see `with_drag_from_limits`
            drag_pos: [248.9, 591.1, 844.5],
            drag_neg: [777.8, 591.1, 844.5],
            velmax_pos: [2.5, 1.0, 0.7],
            velmax_neg: [-0.8, -1.0, -0.7],
        }
    }
}

impl VehicleParams {
    /// Recompute drag so that steady-state speed under peak single-axis
    /// thrust equals the corresponding velocity limit
    pub fn with_drag_from_limits(mut self) -> EscapeResult<Self> {
        let actuators = ActuatorMap::from_params(&self)?;
        for axis in 0..3 {
            let peak = actuators.peak_wrench(axis);
            let (pos, neg) = (self.velmax_pos[axis].abs(), self.velmax_neg[axis].abs());
            if pos <= 0.0 || neg <= 0.0 {
                return Err(EscapeError::InvalidParameter(format!(
                    "velocity limits on axis {} must be non-zero",
                    axis
                )));
            }
            self.drag_pos[axis] = peak / pos;
            self.drag_neg[axis] = peak / neg;
        }
        Ok(self)
    }
}

/// Tuned constants of the local stabilization policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GainParams {
    /// Proportional gain on world-frame pose error
    pub kp: [f64; 3],
    /// Damping gain on body-frame velocity error
    pub kd: [f64; 3],
    /// Cost-to-go weighting diagonal
    pub s: [f64; 6],
}

impl Default for GainParams {
    fn default() -> Self {
        Self {
            kp: [150.0, 150.0, 1000.0],
            kd: [150.0, 150.0, 1.0],
            s: [1.0; 6],
        }
    }
}

/// Planner-facing constants: timing, tolerances and sampling scope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanningParams {
    /// Steering horizon per tree extension [s]
    pub horizon: f64,
    /// Integration step [s]
    pub dt: f64,
    /// Floating-point resolution for planner comparisons
    pub fpr: f64,
    /// Acceptance radius around the goal position [m]
    pub free_radius: f64,
    /// Sample-space buffer distance [m]
    pub ss_buff: f64,
    /// Sample-space scale factor applied to `ss_buff`
    pub sf: f64,
    /// Forward velocity bounds used for sampling
    pub velmax_pos_plan: [f64; 3],
    /// Reverse velocity bounds used for sampling
    pub velmax_neg_plan: [f64; 3],
    /// Minimum planning time [s]
    pub min_time: f64,
    /// Maximum planning time [s]
    pub max_time: f64,
    /// Tree size cap
    pub max_nodes: usize,
    /// Verbose planner logging
    pub printing: bool,
}

impl Default for PlanningParams {
    fn default() -> Self {
        Self {
            horizon: 2.0,
            dt: 0.1,
            fpr: 0.0,
            free_radius: 4.0,
            ss_buff: 1.0,
            sf: 3.0,
            velmax_pos_plan: [1.2, 0.6, 0.25],
            velmax_neg_plan: [-0.6, -0.6, -0.25],
            min_time: 0.0,
            max_time: 5.0,
            max_nodes: 10_000,
            printing: false,
        }
    }
}

/// Complete parameter bundle for the escape behavior
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EscapeParams {
    pub vehicle: VehicleParams,
    pub gains: GainParams,
    pub planning: PlanningParams,
}

impl EscapeParams {
    /// Parse parameters from a TOML document
    pub fn from_toml_str(text: &str) -> EscapeResult<Self> {
        let params: EscapeParams = toml::from_str(text)?;
        params.validate()?;
        Ok(params)
    }

    /// Load parameters from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> EscapeResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Check every invariant the components rely on
    pub fn validate(&self) -> EscapeResult<()> {
        let v = &self.vehicle;
        let p = &self.planning;

        let checks = [
            (v.mass > 0.0 && v.inertia > 0.0, "mass and inertia must be positive"),
            (
                v.thrust_max.iter().all(|&t| t > 0.0),
                "thrust_max must be positive for every thruster",
            ),
            (
                v.drag_pos.iter().chain(v.drag_neg.iter()).all(|&d| d >= 0.0),
                "drag coefficients must be non-negative",
            ),
            (p.dt > 0.0, "dt must be positive"),
            (p.horizon > 0.0, "horizon must be positive"),
            (
                p.sf * p.ss_buff > 0.0 && (p.sf * p.ss_buff).is_finite(),
                "sf * ss_buff must be positive and finite",
            ),
            (
                velocity_limits_ok(&p.velmax_pos_plan, &p.velmax_neg_plan),
                "plan velocity limits must be finite with forward >= -|reverse|",
            ),
            (p.free_radius > 0.0, "free_radius must be positive"),
            (
                p.min_time >= 0.0 && p.max_time >= p.min_time,
                "planning time bounds must satisfy 0 <= min_time <= max_time",
            ),
            (p.max_nodes > 0, "max_nodes must be positive"),
        ];

        for (ok, msg) in checks.iter() {
            if !ok {
                warn!(reason = *msg, "rejected escape parameters");
                return Err(EscapeError::InvalidParameter(msg.to_string()));
            }
        }
        Ok(())
    }
}

/// Finite per-axis limits whose interval `[-|neg|, pos]` is non-empty
pub(crate) fn velocity_limits_ok(pos: &[f64; 3], neg: &[f64; 3]) -> bool {
    pos.iter()
        .zip(neg.iter())
        .all(|(&hi, &lo)| hi.is_finite() && lo.is_finite() && hi >= -lo.abs())
}
