// Escape behavior demo
//
// Builds the escape planner configuration, draws random start states from
// the seed-centered sample space and steers each one toward the goal with
// the local policy. Optionally plots every rollout.
//
// author: Ryohei Sasaki (@rsasaki0109)

use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use escape_planner::planner::{AlwaysFeasible, RolloutOutcome, SystemClock, WrappedStateError};
use escape_planner::utils::{colors, PathStyle, Visualizer};
use escape_planner::{EscapeParams, EscapeResult, PlannerBuilder, State};

#[derive(Parser, Debug)]
#[command(about = "Steer a boat out of a confined region with the escape planner pieces")]
struct Args {
    /// TOML parameter file; built-in boat parameters when omitted
    #[arg(short, long)]
    params: Option<PathBuf>,

    /// Seed pose as x y heading
    #[arg(long, num_args = 3, default_values_t = [0.0, 0.0, 0.0], allow_negative_numbers = true)]
    seed: Vec<f64>,

    /// Goal position as x y
    #[arg(long, num_args = 2, default_values_t = [20.0, 0.0], allow_negative_numbers = true)]
    goal: Vec<f64>,

    /// Number of sampled start states
    #[arg(short, long, default_value_t = 10)]
    samples: usize,

    /// Steering budget per rollout [s]
    #[arg(long, default_value_t = 60.0)]
    duration: f64,

    /// RNG seed
    #[arg(long, default_value_t = 0)]
    rng_seed: u64,

    /// Write a PNG of the rollouts here
    #[arg(long)]
    plot: Option<String>,
}

fn main() -> EscapeResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let params = match &args.params {
        Some(path) => EscapeParams::from_file(path)?,
        None => EscapeParams::default(),
    };
    let config = PlannerBuilder::new(params)
        .feasibility(AlwaysFeasible)
        .error_metric(WrappedStateError)
        .time_source(SystemClock)
        .build()?;

    let seed = State::new(args.seed[0], args.seed[1], args.seed[2], 0.0, 0.0, 0.0);
    let goal = State::new(args.goal[0], args.goal[1], 0.0, 0.0, 0.0, 0.0);
    let space = config.sample_space().sample_space(&seed, &goal);
    info!(bounds = ?space.as_tuples(), "sample space");

    let mut vis = Visualizer::new();
    vis.set_title("Escape rollouts")
        .plot_sample_space(&space)
        .plot_seed(&seed)
        .plot_goal(&goal);

    let mut rng = StdRng::seed_from_u64(args.rng_seed);
    let mut reached = 0;

    for i in 0..args.samples {
        let start = space.sample(&mut rng)?;
        let rollout = config.steer(&start, &goal, args.duration)?;
        let end = rollout.final_state();
        let miss = (end[0] - goal[0]).hypot(end[1] - goal[1]);

        match rollout.outcome {
            RolloutOutcome::Reached => reached += 1,
            RolloutOutcome::TimedOut => warn!(sample = i, "rollout hit max_time"),
            _ => {}
        }
        info!(
            sample = i,
            outcome = ?rollout.outcome,
            steps = rollout.efforts.len(),
            end_x = end[0],
            end_y = end[1],
            miss,
            "steered sampled start toward goal"
        );

        let style = if rollout.outcome == RolloutOutcome::Reached {
            PathStyle::new(colors::REACHED, &format!("Sample {}", i))
        } else {
            PathStyle::new(colors::UNREACHED, &format!("Sample {}", i)).with_line_width(1.0)
        };
        vis.plot_rollout(&rollout, &style);
        vis.plot_vehicle(end, 0.5);
    }

    info!(reached, samples = args.samples, "escape demo finished");

    if let Some(path) = &args.plot {
        vis.save_png(path, 800, 800)?;
        info!(path = %path, "saved rollout plot");
    }
    Ok(())
}
