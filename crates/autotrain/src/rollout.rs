use crate::*;
use serde::Serialize;
use skirmish_battle::*;
use skirmish_core::*;

/// Tally of finished episodes from the agent's point of view.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Record {
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
}

impl Record {
    pub fn total(&self) -> usize {
        self.wins + self.losses + self.draws
    }
    /// Scores a terminal reward by its sign.
    pub fn score(&mut self, reward: Utility) {
        match reward {
            r if r > 0.0 => self.wins += 1,
            r if r < 0.0 => self.losses += 1,
            _ => self.draws += 1,
        }
    }
    fn rate(&self, n: usize) -> f64 {
        n as f64 / self.total().max(1) as f64
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Episodes: {}", self.total())?;
        writeln!(f, "Wins:     {:<6} ({:.3})", self.wins, self.rate(self.wins))?;
        writeln!(f, "Losses:   {:<6} ({:.3})", self.losses, self.rate(self.losses))?;
        write!(f, "Draws:    {:<6} ({:.3})", self.draws, self.rate(self.draws))
    }
}

/// Monte Carlo estimate of a saved policy's results.
///
/// Every episode opens on a random full-health battle. The agent plays
/// the table's action where it has one and a random legal action
/// otherwise. Episodes still running at the horizon count as draws.
pub struct Rollout<O> {
    episode: Episode<O>,
    policy: PolicyTable,
    episodes: usize,
}

impl<O> Rollout<O>
where
    O: Opponent,
{
    pub fn new(arena: Arena<O>, policy: PolicyTable) -> Self {
        Self {
            episode: Episode::new(arena),
            policy,
            episodes: ROLLOUT_EPISODES,
        }
    }
    pub fn with_episodes(self, episodes: usize) -> Self {
        Self { episodes, ..self }
    }
    pub fn with_horizon(self, horizon: usize) -> Self {
        Self {
            episode: self.episode.with_horizon(horizon),
            ..self
        }
    }

    /// Plays every episode. A seed makes the whole run reproducible.
    pub fn play(&mut self, seed: Option<u64>) -> Record {
        let mut record = Record::default();
        for i in 0..self.episodes {
            self.episode.reset(if i == 0 { seed } else { None });
            self.run(&mut record);
        }
        log::info!("{} episodes, {} wins", record.total(), record.wins);
        record
    }

    fn run(&mut self, record: &mut Record) {
        loop {
            let state = self.episode.state();
            let action = self.policy.get(state).or_else(|| self.episode.explore());
            let Some(action) = action else {
                record.score(0.0);
                return;
            };
            let step = self.episode.step(action);
            if step.terminated {
                record.score(step.reward);
                return;
            }
            if step.truncated {
                record.draws += 1;
                return;
            }
        }
    }
}
