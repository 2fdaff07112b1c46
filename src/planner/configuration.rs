//! Planner configuration assembly
//!
//! Binds the dynamics model, the local policy, the sampling heuristic and
//! the tolerances to the timing constants and the externally supplied slots
//! (feasibility predicate, error function, clock). Pure composition.

use std::sync::Arc;

use tracing::info;

use crate::common::{Effort, ErrorMetric, EscapeResult, FeasibilityCheck, State, TimeSource};
use crate::config::EscapeParams;
use crate::control::StabilizationPolicy;
use crate::dynamics::BoatDynamics;
use crate::heuristics::{EscapeSampleSpace, GoalTolerance};
use crate::planner::{Constraints, DependencySlot};

/// Immutable configuration handed to the kinodynamic planner
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    pub(crate) constraints: Constraints,
    pub(crate) dynamics: BoatDynamics,
    pub(crate) policy: StabilizationPolicy,
    pub(crate) sample_space: EscapeSampleSpace,
    pub(crate) tolerance: GoalTolerance,
    pub(crate) horizon: f64,
    pub(crate) dt: f64,
    pub(crate) fpr: f64,
    pub(crate) erf: DependencySlot<dyn ErrorMetric>,
    pub(crate) min_time: f64,
    pub(crate) max_time: f64,
    pub(crate) max_nodes: usize,
    pub(crate) sys_time: DependencySlot<dyn TimeSource>,
    pub(crate) printing: bool,
}

impl PlannerConfig {
    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    pub fn dynamics(&self) -> &BoatDynamics {
        &self.dynamics
    }

    pub fn policy(&self) -> &StabilizationPolicy {
        &self.policy
    }

    pub fn sample_space(&self) -> &EscapeSampleSpace {
        &self.sample_space
    }

    pub fn tolerance(&self) -> &GoalTolerance {
        &self.tolerance
    }

    pub fn error_tol(&self) -> &[f64; 6] {
        self.tolerance.error_tol()
    }

    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn fpr(&self) -> f64 {
        self.fpr
    }

    pub fn min_time(&self) -> f64 {
        self.min_time
    }

    pub fn max_time(&self) -> f64 {
        self.max_time
    }

    pub fn max_nodes(&self) -> usize {
        self.max_nodes
    }

    pub fn printing(&self) -> bool {
        self.printing
    }

    /// Fail with the name of the first slot still unset
    pub fn ensure_ready(&self) -> EscapeResult<()> {
        self.constraints.is_feasible.require("is_feasible")?;
        self.erf.require("erf")?;
        self.sys_time.require("sys_time")?;
        Ok(())
    }

    pub fn is_feasible(&self, state: &State, effort: &Effort) -> EscapeResult<bool> {
        self.constraints.is_feasible(state, effort)
    }

    pub fn error(&self, target: &State, state: &State) -> EscapeResult<State> {
        Ok(self.erf.require("erf")?.error(target, state))
    }

    pub fn now(&self) -> EscapeResult<f64> {
        Ok(self.sys_time.require("sys_time")?.now())
    }
}

/// Builder for [`PlannerConfig`]
pub struct PlannerBuilder {
    params: EscapeParams,
    is_feasible: DependencySlot<dyn FeasibilityCheck>,
    erf: DependencySlot<dyn ErrorMetric>,
    sys_time: DependencySlot<dyn TimeSource>,
}

impl PlannerBuilder {
    pub fn new(params: EscapeParams) -> Self {
        Self {
            params,
            is_feasible: DependencySlot::Unset,
            erf: DependencySlot::Unset,
            sys_time: DependencySlot::Unset,
        }
    }

    pub fn feasibility<F: FeasibilityCheck + 'static>(mut self, check: F) -> Self {
        self.is_feasible = DependencySlot::set(Arc::new(check));
        self
    }

    pub fn error_metric<E: ErrorMetric + 'static>(mut self, metric: E) -> Self {
        self.erf = DependencySlot::set(Arc::new(metric));
        self
    }

    pub fn time_source<T: TimeSource + 'static>(mut self, clock: T) -> Self {
        self.sys_time = DependencySlot::set(Arc::new(clock));
        self
    }

    /// Assemble without requiring the external slots
    ///
    /// The result mirrors a configuration whose placeholders are still
    /// unset; any call that reaches one of them fails.
    pub fn build_unchecked(self) -> EscapeResult<PlannerConfig> {
        self.params.validate()?;
        let p = &self.params.planning;

        let tolerance = GoalTolerance::from_params(p);
        let config = PlannerConfig {
            constraints: Constraints::new(*tolerance.goal_buffer(), self.is_feasible),
            dynamics: BoatDynamics::from_params(&self.params.vehicle)?,
            policy: StabilizationPolicy::from_params(&self.params.gains),
            sample_space: EscapeSampleSpace::from_params(p)?,
            tolerance,
            horizon: p.horizon,
            dt: p.dt,
            fpr: p.fpr,
            erf: self.erf,
            min_time: p.min_time,
            max_time: p.max_time,
            max_nodes: p.max_nodes,
            sys_time: self.sys_time,
            printing: p.printing,
        };

        info!(
            horizon = config.horizon,
            dt = config.dt,
            max_time = config.max_time,
            max_nodes = config.max_nodes,
            is_feasible = config.constraints.is_feasible.is_set(),
            erf = config.erf.is_set(),
            sys_time = config.sys_time.is_set(),
            "assembled escape planner configuration"
        );
        Ok(config)
    }

    /// Assemble and require every external slot to be bound
    pub fn build(self) -> EscapeResult<PlannerConfig> {
        let config = self.build_unchecked()?;
        config.ensure_ready()?;
        Ok(config)
    }
}
