//! Seed-centered sample space for the escape behavior
//!
//! Samples spread outward from where the vehicle is now rather than toward
//! the goal, so the box ignores the goal entirely:
//!
//! - x, y: `seed ± sf * ss_buff`
//! - heading: the full circle
//! - velocities: `[-|reverse limit|, forward limit]` per axis

use std::f64::consts::PI;

use rand::Rng;

use crate::common::{EscapeError, EscapeResult, Interval, SampleSpaceHeuristic, State, NSTATES};
use crate::config::{velocity_limits_ok, PlanningParams};

/// Axis-aligned box over the 6 state dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSpace {
    pub bounds: [Interval; NSTATES],
}

impl SampleSpace {
    pub fn new(bounds: [Interval; NSTATES]) -> Self {
        Self { bounds }
    }

    pub fn contains(&self, state: &State) -> bool {
        self.bounds
            .iter()
            .zip(state.iter())
            .all(|(interval, &value)| interval.contains(value))
    }

    /// Uniform draw inside the box; a zero-width interval yields its min.
    /// Fails on non-finite or inverted bounds instead of panicking in `rand`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> EscapeResult<State> {
        let mut state = State::zeros();
        for (i, interval) in self.bounds.iter().enumerate() {
            if !(interval.min.is_finite() && interval.max.is_finite()) || interval.max < interval.min {
                return Err(EscapeError::InvalidParameter(format!(
                    "cannot sample dimension {} from [{}, {}]",
                    i, interval.min, interval.max
                )));
            }
            state[i] = if interval.max > interval.min {
                rng.gen_range(interval.min..=interval.max)
            } else {
                interval.min
            };
        }
        Ok(state)
    }

    /// Tuple form `[(min, max); 6]` the planner's sampler consumes
    pub fn as_tuples(&self) -> [(f64, f64); NSTATES] {
        let mut out = [(0.0, 0.0); NSTATES];
        for (slot, interval) in out.iter_mut().zip(self.bounds.iter()) {
            *slot = (interval.min, interval.max);
        }
        out
    }
}

/// Heuristic scoping the planner's sampler around the seed state
#[derive(Debug, Clone, PartialEq)]
pub struct EscapeSampleSpace {
    half_width: f64,
    velmax_pos: [f64; 3],
    velmax_neg: [f64; 3],
}

impl EscapeSampleSpace {
    /// `sf * ss_buff` must be positive and finite, otherwise the position box
    /// collapses or cannot be sampled
    pub fn new(sf: f64, ss_buff: f64, velmax_pos: [f64; 3], velmax_neg: [f64; 3]) -> EscapeResult<Self> {
        let half_width = sf * ss_buff;
        if !(half_width > 0.0 && half_width.is_finite()) {
            return Err(EscapeError::InvalidParameter(format!(
                "sample space half-width sf * ss_buff = {} must be positive and finite",
                half_width
            )));
        }
        if !velocity_limits_ok(&velmax_pos, &velmax_neg) {
            return Err(EscapeError::InvalidParameter(format!(
                "velocity limits {:?} / {:?} must be finite with forward >= -|reverse|",
                velmax_pos, velmax_neg
            )));
        }
        Ok(Self {
            half_width,
            velmax_pos,
            velmax_neg,
        })
    }

    pub fn from_params(params: &PlanningParams) -> EscapeResult<Self> {
        Self::new(params.sf, params.ss_buff, params.velmax_pos_plan, params.velmax_neg_plan)
    }

    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    /// `goal` is accepted for the planner's signature but does not shape the box
    pub fn sample_space(&self, seed: &State, _goal: &State) -> SampleSpace {
        let velocity = |i: usize| Interval::new(-self.velmax_neg[i].abs(), self.velmax_pos[i]);
        SampleSpace::new([
            Interval::centered(seed[0], self.half_width),
            Interval::centered(seed[1], self.half_width),
            Interval::new(-PI, PI),
            velocity(0),
            velocity(1),
            velocity(2),
        ])
    }
}

impl SampleSpaceHeuristic for EscapeSampleSpace {
    fn sample_space(&self, seed: &State, goal: &State) -> SampleSpace {
        EscapeSampleSpace::sample_space(self, seed, goal)
    }
}
