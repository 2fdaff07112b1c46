//! Common traits defining the seams between this behavior and the planner

use crate::common::types::*;
use crate::heuristics::SampleSpace;

/// Forward model the planner uses to simulate candidate steps
pub trait DynamicsModel: Send + Sync {
    /// Propagate `state` under `effort` for `dt` seconds
    fn step(&self, state: &State, effort: &Effort, dt: f64) -> State;
}

/// Local feedback policy used to steer between sampled states
pub trait LocalPolicy: Send + Sync {
    /// Cost-to-go weighting and feedback gain at the given linearization point
    fn gains(&self, state: &State, effort: &Effort) -> (CostToGo, FeedbackGain);
}

/// Scopes the planner's random sampling for one planning request
pub trait SampleSpaceHeuristic: Send + Sync {
    fn sample_space(&self, seed: &State, goal: &State) -> SampleSpace;
}

/// Externally supplied feasibility predicate
pub trait FeasibilityCheck: Send + Sync {
    fn is_feasible(&self, state: &State, effort: &Effort) -> bool;
}

/// Externally supplied error function, `target - state` in some metric
pub trait ErrorMetric: Send + Sync {
    fn error(&self, target: &State, state: &State) -> State;
}

/// Externally supplied clock, in seconds
pub trait TimeSource: Send + Sync {
    fn now(&self) -> f64;
}

impl<F> FeasibilityCheck for F
where
    F: Fn(&State, &Effort) -> bool + Send + Sync,
{
    fn is_feasible(&self, state: &State, effort: &Effort) -> bool {
        self(state, effort)
    }
}

impl<F> ErrorMetric for F
where
    F: Fn(&State, &State) -> State + Send + Sync,
{
    fn error(&self, target: &State, state: &State) -> State {
        self(target, state)
    }
}

impl<F> TimeSource for F
where
    F: Fn() -> f64 + Send + Sync,
{
    fn now(&self) -> f64 {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closures_fill_slots() {
        let feasible = |state: &State, _effort: &Effort| state[idx::X] < 10.0;
        assert!(feasible.is_feasible(&State::zeros(), &Effort::zeros()));

        let metric = |target: &State, state: &State| target - state;
        let err = metric.error(&State::repeat(1.0), &State::zeros());
        assert_eq!(err, State::repeat(1.0));

        let clock = || 42.0;
        assert_eq!(TimeSource::now(&clock), 42.0);
    }
}
