//! End-to-end checks of the escape planner pieces through the trait seams
//! the external planner uses.

use std::f64::consts::PI;
use std::sync::Arc;
use std::thread;

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use escape_planner::planner::{AlwaysFeasible, RolloutOutcome, WrappedStateError};
use escape_planner::{
    DynamicsModel, Effort, EscapeError, EscapeParams, LocalPolicy, PlannerBuilder, PlannerConfig,
    SampleSpaceHeuristic, State,
};

const PARAMS: &str = r#"
[planning]
ss_buff = 1.0
sf = 3.0
free_radius = 1.0
max_time = 5.0

[gains]
kp = [150.0, 150.0, 1000.0]
kd = [150.0, 150.0, 1.0]
"#;

fn config() -> PlannerConfig {
    PlannerBuilder::new(EscapeParams::from_toml_str(PARAMS).unwrap())
        .feasibility(AlwaysFeasible)
        .error_metric(WrappedStateError)
        .time_source(|| 0.0)
        .build()
        .unwrap()
}

#[test]
fn sample_space_example_at_origin() {
    let config = config();
    let heuristic: &dyn SampleSpaceHeuristic = config.sample_space();
    let ss = heuristic.sample_space(&State::zeros(), &State::new(50.0, 50.0, 1.0, 0.0, 0.0, 0.0));
    let tuples = ss.as_tuples();
    assert_eq!(tuples[0], (-3.0, 3.0));
    assert_eq!(tuples[1], (-3.0, 3.0));
    assert_eq!(tuples[2], (-PI, PI));
}

#[test]
fn coasting_boat_slows_down() {
    let config = config();
    let model: &dyn DynamicsModel = config.dynamics();
    let next = model.step(&State::new(0.0, 0.0, 0.0, 1.0, 0.0, 0.0), &Effort::zeros(), 1.0);
    assert!(next[0] > 0.0);
    assert!(next[3].abs() < 1.0);
}

#[test]
fn policy_gain_shape_and_constant_weighting() {
    let config = config();
    let policy: &dyn LocalPolicy = config.policy();
    let mut rng = StdRng::seed_from_u64(3);
    let space = config.sample_space().sample_space(&State::zeros(), &State::zeros());
    for _ in 0..20 {
        let state = space.sample(&mut rng).unwrap();
        let (s, k) = policy.gains(&state, &Effort::zeros());
        assert_eq!(k.shape(), (3, 6));
        assert_eq!(s, nalgebra::Matrix6::identity());
    }
}

#[test]
fn steering_from_sampled_states_reaches_goal() {
    let config = config();
    let goal = State::new(6.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    let space = config.sample_space().sample_space(&State::zeros(), &goal);
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..5 {
        let start = space.sample(&mut rng).unwrap();
        let rollout = config.steer(&start, &goal, 120.0).unwrap();
        assert_eq!(rollout.outcome, RolloutOutcome::Reached);
        let end = rollout.final_state();
        assert!((end[0] - goal[0]).abs() <= 1.0);
        assert!((end[1] - goal[1]).abs() <= 1.0);
    }
}

#[test]
fn concurrent_evaluation_matches_serial() {
    let config = Arc::new(config());
    let state = State::new(1.0, -2.0, 0.4, 0.8, -0.3, 0.1);
    let effort = Effort::new(300.0, -150.0, 60.0);
    let expected = config.dynamics().step(&state, &effort, config.dt());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let config = Arc::clone(&config);
            thread::spawn(move || {
                let next = config.dynamics().step(&state, &effort, config.dt());
                let (_, k) = config.policy().gains(&next, &effort);
                (next, k)
            })
        })
        .collect();

    for handle in handles {
        let (next, k) = handle.join().unwrap();
        assert_relative_eq!(next, expected, epsilon = 1e-15);
        assert_eq!(k.shape(), (3, 6));
    }
}

#[test]
fn missing_clock_is_reported_by_name() {
    let err = PlannerBuilder::new(EscapeParams::default())
        .feasibility(AlwaysFeasible)
        .error_metric(WrappedStateError)
        .build()
        .unwrap_err();
    assert!(matches!(err, EscapeError::UnconfiguredDependency("sys_time")));
}
