//! Dependency slots the planner requires but this behavior does not fill
//!
//! A slot is either `Unset` or holds a shared implementation. Reading an
//! unset slot is an error naming the slot, never a silent default.

use std::fmt;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::common::{idx, Effort, ErrorMetric, EscapeError, EscapeResult, FeasibilityCheck, State, TimeSource};
use crate::dynamics::wrap_angle;

pub enum DependencySlot<T: ?Sized> {
    Unset,
    Set(Arc<T>),
}

impl<T: ?Sized> DependencySlot<T> {
    pub fn set(value: Arc<T>) -> Self {
        DependencySlot::Set(value)
    }

    pub fn is_set(&self) -> bool {
        matches!(self, DependencySlot::Set(_))
    }

    /// Borrow the implementation or fail with `UnconfiguredDependency(name)`
    pub fn require(&self, name: &'static str) -> EscapeResult<&T> {
        match self {
            DependencySlot::Set(value) => Ok(value.as_ref()),
            DependencySlot::Unset => Err(EscapeError::UnconfiguredDependency(name)),
        }
    }
}

impl<T: ?Sized> Default for DependencySlot<T> {
    fn default() -> Self {
        DependencySlot::Unset
    }
}

impl<T: ?Sized> Clone for DependencySlot<T> {
    fn clone(&self) -> Self {
        match self {
            DependencySlot::Unset => DependencySlot::Unset,
            DependencySlot::Set(value) => DependencySlot::Set(Arc::clone(value)),
        }
    }
}

impl<T: ?Sized> fmt::Debug for DependencySlot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DependencySlot::Unset => write!(f, "Unset"),
            DependencySlot::Set(_) => write!(f, "Set"),
        }
    }
}

/// `target - state` with the heading difference wrapped into (-pi, pi]
#[derive(Debug, Clone, Copy, Default)]
pub struct WrappedStateError;

impl ErrorMetric for WrappedStateError {
    fn error(&self, target: &State, state: &State) -> State {
        let mut err = target - state;
        err[idx::HEADING] = wrap_angle(err[idx::HEADING]);
        err
    }
}

/// Wall clock in seconds since the Unix epoch
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> f64 {
        // A clock set before 1970 reads as zero
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0)
    }
}

/// Accepts every state; for open water with nothing to hit
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysFeasible;

impl FeasibilityCheck for AlwaysFeasible {
    fn is_feasible(&self, _state: &State, _effort: &Effort) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_unset_slot_fails_fast() {
        let slot: DependencySlot<dyn TimeSource> = DependencySlot::Unset;
        assert!(!slot.is_set());
        assert!(matches!(
            slot.require("sys_time"),
            Err(EscapeError::UnconfiguredDependency("sys_time"))
        ));
    }

    #[test]
    fn test_set_slot() {
        let slot: DependencySlot<dyn TimeSource> = DependencySlot::set(Arc::new(|| 3.5));
        assert!(slot.is_set());
        assert_eq!(slot.require("sys_time").unwrap().now(), 3.5);
        assert_eq!(format!("{:?}", slot.clone()), "Set");
    }

    #[test]
    fn test_wrapped_state_error() {
        let target = State::new(1.0, 2.0, PI - 0.1, 0.0, 0.0, 0.0);
        let state = State::new(0.0, 0.0, -PI + 0.1, 0.5, 0.0, 0.0);
        let err = WrappedStateError.error(&target, &state);
        assert!((err[idx::X] - 1.0).abs() < 1e-12);
        assert!((err[idx::HEADING] + 0.2).abs() < 1e-9);
        assert!((err[idx::SURGE] + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_system_clock_advances() {
        let clock = SystemClock;
        let t0 = clock.now();
        assert!(t0 > 0.0);
        assert!(clock.now() >= t0);
    }
}
