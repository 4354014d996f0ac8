use crate::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use skirmish_core::*;
use skirmish_dp::*;

/// What one [`Episode::step`] reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub next: StateId,
    pub reward: Utility,
    pub terminated: bool,
    pub truncated: bool,
}

/// Sampled play against an [`Arena`].
///
/// Holds its own seeded generator so a rollout is reproducible from
/// the seed given to [`Episode::reset`]. Episodes start from a fresh
/// full-health battle and are truncated after `horizon` steps.
#[derive(Debug)]
pub struct Episode<O> {
    arena: Arena<O>,
    rng: SmallRng,
    state: StateId,
    steps: usize,
    horizon: usize,
}

impl<O> Episode<O>
where
    O: Opponent,
{
    pub fn new(arena: Arena<O>) -> Self {
        let mut rng = SmallRng::seed_from_u64(rand::random());
        let state = StateId::from(Battle::sample(&mut rng));
        Self {
            arena,
            rng,
            state,
            steps: 0,
            horizon: ROLLOUT_STEPS,
        }
    }
    pub fn with_horizon(self, horizon: usize) -> Self {
        Self { horizon, ..self }
    }
    pub fn arena(&self) -> &Arena<O> {
        &self.arena
    }
    pub fn state(&self) -> StateId {
        self.state
    }
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Starts a new battle. A seed restarts the generator, `None`
    /// continues the current stream.
    pub fn reset(&mut self, seed: Option<u64>) -> StateId {
        if let Some(seed) = seed {
            self.rng = SmallRng::seed_from_u64(seed);
        }
        self.steps = 0;
        self.state = StateId::from(Battle::sample(&mut self.rng));
        self.state
    }

    /// A uniformly random legal action, if the battle is still running.
    pub fn explore(&mut self) -> Option<Action> {
        self.arena.choices(self.state).choose(&mut self.rng).copied()
    }

    /// Plays one round and samples where it lands.
    pub fn step(&mut self, action: Action) -> Transition {
        let outcomes = self.arena.transitions(self.state, action).collect::<Vec<_>>();
        let draw = self.rng.random::<Probability>();
        let outcome = Self::sample(&outcomes, draw).unwrap_or(Outcome::idle(self.state));
        self.state = outcome.next;
        self.steps += 1;
        Transition {
            next: outcome.next,
            reward: outcome.reward,
            terminated: outcome.terminal,
            truncated: !outcome.terminal && self.steps >= self.horizon,
        }
    }

    /// Inverse-CDF pick with `draw` in `[0, 1)`. Falls back to the last
    /// outcome when rounding leaves the cumulative mass short of `draw`.
    pub fn sample(outcomes: &[Outcome], draw: Probability) -> Option<Outcome> {
        let mut cumulative = 0.0;
        outcomes
            .iter()
            .find(|o| {
                cumulative += o.probability;
                draw <= cumulative
            })
            .or(outcomes.last())
            .copied()
    }
}
