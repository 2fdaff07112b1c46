//! Local steering rollout
//!
//! Drives the dynamics model toward a target state with the local policy,
//! the same extension step the planner performs between tree nodes:
//!
//!   (S, K) = policy(x, u)
//!   u      = K * erf(target, x)
//!   x      = dynamics(x, u, dt)

use tracing::debug;

use crate::common::{Effort, EscapeError, EscapeResult, State};
use crate::planner::PlannerConfig;

/// Why a rollout stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RolloutOutcome {
    /// The target is within `error_tol`
    Reached,
    /// The feasibility predicate rejected the next step
    Infeasible,
    /// The requested duration ran out first
    Exhausted,
    /// The clock passed `max_time`
    TimedOut,
}

#[derive(Debug, Clone)]
pub struct Rollout {
    pub states: Vec<State>,
    /// `efforts[i]` takes `states[i]` to `states[i + 1]`
    pub efforts: Vec<Effort>,
    /// Simulated time of each state [s]
    pub times: Vec<f64>,
    pub outcome: RolloutOutcome,
    /// Clock time spent [s]
    pub elapsed: f64,
}

impl Rollout {
    pub fn final_state(&self) -> &State {
        // states always holds at least the start
        &self.states[self.states.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn x_coords(&self) -> Vec<f64> {
        self.states.iter().map(|s| s[0]).collect()
    }

    pub fn y_coords(&self) -> Vec<f64> {
        self.states.iter().map(|s| s[1]).collect()
    }
}

impl PlannerConfig {
    /// Steer from `from` toward `target` for at most `duration` seconds
    pub fn steer(&self, from: &State, target: &State, duration: f64) -> EscapeResult<Rollout> {
        let erf = self.erf.require("erf")?;
        let feasible = self.constraints.is_feasible.require("is_feasible")?;
        let clock = self.sys_time.require("sys_time")?;
        if !duration.is_finite() {
            return Err(EscapeError::InvalidParameter(format!(
                "steering duration must be finite, got {}",
                duration
            )));
        }

        let start = clock.now();
        let n_steps = if duration > 0.0 {
            (duration / self.dt).ceil() as usize
        } else {
            0
        };

        let mut x = *from;
        let mut u = Effort::zeros();
        let mut rollout = Rollout {
            states: vec![x],
            efforts: Vec::with_capacity(n_steps.min(self.max_nodes)),
            times: vec![0.0],
            outcome: RolloutOutcome::Exhausted,
            elapsed: 0.0,
        };

        if self.tolerance.is_reached(target, &x) {
            rollout.outcome = RolloutOutcome::Reached;
        } else {
            for i in 0..n_steps {
                if clock.now() - start > self.max_time {
                    rollout.outcome = RolloutOutcome::TimedOut;
                    break;
                }

                let (_, k) = self.policy.gains(&x, &u);
                u = k * erf.error(target, &x);
                let next = self.dynamics.step(&x, &u, self.dt);

                if !feasible.is_feasible(&next, &u) {
                    rollout.outcome = RolloutOutcome::Infeasible;
                    break;
                }

                x = next;
                rollout.states.push(x);
                rollout.efforts.push(u);
                rollout.times.push((i + 1) as f64 * self.dt);

                if self.tolerance.is_reached(target, &x) {
                    rollout.outcome = RolloutOutcome::Reached;
                    break;
                }
            }
        }

        rollout.elapsed = clock.now() - start;
        if self.printing {
            debug!(
                outcome = ?rollout.outcome,
                steps = rollout.efforts.len(),
                final_x = x[0],
                final_y = x[1],
                "steer rollout finished"
            );
        }
        Ok(rollout)
    }
}
