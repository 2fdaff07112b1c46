//! Plan acceptance constraints handed to the planner

use crate::common::{Effort, EscapeResult, FeasibilityCheck, State, NCONTROLS, NSTATES};
use crate::planner::DependencySlot;

#[derive(Debug, Clone)]
pub struct Constraints {
    pub nstates: usize,
    pub ncontrols: usize,
    /// Per-dimension acceptance around the goal
    pub goal_buffer: [f64; NSTATES],
    pub is_feasible: DependencySlot<dyn FeasibilityCheck>,
}

impl Constraints {
    pub fn new(goal_buffer: [f64; NSTATES], is_feasible: DependencySlot<dyn FeasibilityCheck>) -> Self {
        Self {
            nstates: NSTATES,
            ncontrols: NCONTROLS,
            goal_buffer,
            is_feasible,
        }
    }

    pub fn is_feasible(&self, state: &State, effort: &Effort) -> EscapeResult<bool> {
        Ok(self.is_feasible.require("is_feasible")?.is_feasible(state, effort))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::EscapeError;
    use std::sync::Arc;

    #[test]
    fn test_dimensions() {
        let c = Constraints::new([1.0; NSTATES], DependencySlot::Unset);
        assert_eq!((c.nstates, c.ncontrols), (6, 3));
    }

    #[test]
    fn test_unset_predicate() {
        let c = Constraints::new([1.0; NSTATES], DependencySlot::Unset);
        let err = c.is_feasible(&State::zeros(), &Effort::zeros()).unwrap_err();
        assert!(matches!(err, EscapeError::UnconfiguredDependency("is_feasible")));
    }

    #[test]
    fn test_set_predicate() {
        let slot: DependencySlot<dyn FeasibilityCheck> =
            DependencySlot::set(Arc::new(|s: &State, _: &Effort| s[0] < 1.0));
        let c = Constraints::new([1.0; NSTATES], slot);
        assert!(c.is_feasible(&State::zeros(), &Effort::zeros()).unwrap());
        assert!(!c.is_feasible(&State::repeat(2.0), &Effort::zeros()).unwrap());
    }
}
