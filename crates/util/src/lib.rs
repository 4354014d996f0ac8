//! Core type aliases, traits, and constants for skirmish.
//!
//! This crate provides the foundational types and configuration parameters
//! shared by the dynamic-programming engine, the battle model, and the
//! training pipeline.

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Dense index of an enumerated MDP state.
pub type StateId = usize;
/// Rewards, returns, action values, and state values.
pub type Utility = f64;
/// Transition probabilities and policy weights.
pub type Probability = f64;
/// Hit points of a single battler, measured in bins.
pub type Health = u8;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// BATTLE RULES
// Three elements in a rock-paper-scissors cycle, three HP bins per battler.
// ============================================================================
/// Number of elemental types (Fire, Water, Grass).
pub const N_ELEMENTS: usize = 3;
/// Number of HP bins, including the fainted bin 0.
pub const N_HEALTH: usize = 3;
/// Full health of a fresh battler.
pub const MAX_HEALTH: Health = (N_HEALTH - 1) as Health;
/// Probability that a move connects. Switching always succeeds.
pub const ACCURACY: Probability = 0.9;
/// Damage multiplier when the attacker's element beats the defender's.
pub const ADVANTAGE: Health = 2;
/// Base power of the light move.
pub const LIGHT_POWER: Health = 1;
/// Base power of the heavy move.
pub const HEAVY_POWER: Health = 2;
/// Reward for defeating the opponent's whole team.
pub const REWARD_WIN: Utility = 1.0;
/// Reward for losing the agent's whole team.
pub const REWARD_LOSS: Utility = -1.0;

// ============================================================================
// DYNAMIC PROGRAMMING
// Policy evaluation runs Bellman sweeps to a fixed point; policy iteration
// alternates evaluation and greedy improvement until the policy is stable.
// ============================================================================
/// Discount factor (γ). Must stay below 1 for the backup to contract.
pub const DISCOUNT: Utility = 0.98;
/// Stop evaluating once the largest per-sweep change falls below this.
pub const EVALUATION_TOLERANCE: Utility = 1e-10;
/// Hard cap on Bellman sweeps per evaluation.
pub const EVALUATION_ITERATIONS: usize = 50_000;
/// Hard cap on evaluation/improvement rounds.
pub const IMPROVEMENT_ITERATIONS: usize = 1_000;
/// Slack allowed when checking that outcome probabilities sum to one.
pub const PROBABILITY_TOLERANCE: Probability = 1e-9;

// ============================================================================
// ROLLOUTS
// Monte Carlo estimate of a saved policy's win rate.
// ============================================================================
/// Episodes played by the evaluation entrypoint.
pub const ROLLOUT_EPISODES: usize = 2_000;
/// Steps after which an unfinished episode is truncated and scored a draw.
pub const ROLLOUT_STEPS: usize = 200;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Interval between progress log messages during long evaluations.
pub const SWEEP_LOG_INTERVAL: std::time::Duration = std::time::Duration::from_secs(10);

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
