//! Command line entrypoints.
use crate::*;
use clap::Parser;
use skirmish_battle::*;
use skirmish_core::*;
use skirmish_dp::*;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub enum Mode {
    #[command(about = "Solve the battle by policy iteration and save artifacts")]
    Train {
        #[arg(long, default_value_t = DISCOUNT)]
        gamma: f64,
        #[arg(long, default_value_t = EVALUATION_TOLERANCE)]
        tolerance: f64,
        #[arg(long = "max-iters", default_value_t = EVALUATION_ITERATIONS)]
        max_iters: usize,
        #[arg(long = "max-outer", default_value_t = IMPROVEMENT_ITERATIONS)]
        max_outer: usize,
        #[arg(long, value_enum, default_value_t = Sweep::GaussSeidel)]
        sweep: Sweep,
        #[arg(long, value_enum, default_value_t = Adversary::Uniform)]
        opponent: Adversary,
        #[arg(long, default_value = "artifacts")]
        outdir: PathBuf,
    },
    #[command(about = "Estimate a saved policy's win rate by rollout", alias = "eval")]
    Evaluate {
        #[arg(long, default_value = "artifacts")]
        artifacts: PathBuf,
        #[arg(long, default_value_t = ROLLOUT_EPISODES)]
        episodes: usize,
        #[arg(long = "max-steps", default_value_t = ROLLOUT_STEPS)]
        max_steps: usize,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = Adversary::Uniform)]
        opponent: Adversary,
    },
    #[command(about = "Show the saved decision and action values of one state")]
    Inspect {
        #[arg(required = true)]
        state: StateId,
        #[arg(long, default_value = "artifacts")]
        artifacts: PathBuf,
    },
}

impl Mode {
    pub fn run() -> anyhow::Result<()> {
        match Self::parse() {
            Self::Train {
                gamma,
                tolerance,
                max_iters,
                max_outer,
                sweep,
                opponent,
                outdir,
            } => Session {
                gamma,
                tolerance,
                max_iters,
                max_outer,
                sweep,
                opponent,
                outdir,
            }
            .train()
            .map(|_| ()),
            Self::Evaluate {
                artifacts,
                episodes,
                max_steps,
                seed,
                opponent,
            } => Self::evaluate(&artifacts, episodes, max_steps, seed, opponent),
            Self::Inspect { state, artifacts } => Self::inspect(state, &artifacts),
        }
    }

    fn evaluate(
        dir: &Path,
        episodes: usize,
        max_steps: usize,
        seed: Option<u64>,
        opponent: Adversary,
    ) -> anyhow::Result<()> {
        let policy = PolicyTable::load(dir)?;
        log::info!("evaluating {} decisions against {:?}", policy.len(), opponent);
        let record = Rollout::new(Arena::new(opponent.opponent()), policy)
            .with_episodes(episodes)
            .with_horizon(max_steps)
            .play(seed);
        println!("{}", record);
        Ok(())
    }

    fn inspect(state: StateId, dir: &Path) -> anyhow::Result<()> {
        let battle = Battle::try_from(state)?;
        let summary = Summary::load(dir)?;
        let policy = PolicyTable::load(dir)?;
        let values = ValueTable::load(dir)?;
        let arena = Arena::new(summary.opponent.opponent()).with_accuracy(summary.accuracy)?;
        let evaluation = Evaluation::<GaussSeidel>::default().with_discount(summary.gamma);
        println!("state      {}", state);
        println!("battle     {}", battle);
        println!("terminal   {}", battle.is_terminal());
        println!("value      {:+.6}", values.get(state));
        match policy.get(state) {
            Some(action) => println!("decision   {}", action),
            None => println!("decision   -"),
        }
        for action in arena.choices(state) {
            let q = evaluation.q(&arena, state, action, values.values());
            println!("Q({:<6})  {:+.6}", action.to_string(), q);
            for outcome in arena.transitions(state, action) {
                let next = Battle::try_from(outcome.next)?;
                println!("    {}  {}", outcome, next);
            }
        }
        Ok(())
    }
}
