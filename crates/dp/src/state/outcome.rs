use crate::*;
use skirmish_core::*;

/// One branch of a transition distribution.
///
/// For a fixed `(state, action)` the outcomes returned by a [`Model`]
/// carry probabilities summing to one, and no two outcomes share the same
/// `(next, reward, terminal)` key once [`Outcome::merge`] has run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    pub probability: Probability,
    pub next: StateId,
    pub reward: Utility,
    pub terminal: bool,
}

impl Outcome {
    /// Self-loop out of a terminal state. Terminal states pay nothing.
    pub fn absorbing(state: StateId) -> Self {
        Self {
            probability: 1.0,
            next: state,
            reward: 0.0,
            terminal: true,
        }
    }
    /// Zero-reward self-loop that leaves the game running.
    pub fn idle(state: StateId) -> Self {
        Self {
            probability: 1.0,
            next: state,
            reward: 0.0,
            terminal: false,
        }
    }
    /// Probability-weighted Bellman term `p · (r + γ·V(s'))`.
    /// Terminal outcomes do not bootstrap.
    pub fn backup(&self, discount: Utility, values: &Values) -> Utility {
        match self.terminal {
            true => self.probability * self.reward,
            false => self.probability * (self.reward + discount * values.get(self.next)),
        }
    }
    /// Collapses outcomes sharing `(next, reward, terminal)` into one entry
    /// with summed probability, keeping first-appearance order.
    pub fn merge(outcomes: impl IntoIterator<Item = Self>) -> Vec<Self> {
        let mut merged = Vec::<Self>::new();
        for outcome in outcomes {
            match merged.iter_mut().find(|o| o.key() == outcome.key()) {
                Some(existing) => existing.probability += outcome.probability,
                None => merged.push(outcome),
            }
        }
        merged
    }
    /// Total probability mass of a distribution.
    pub fn mass(outcomes: &[Self]) -> Probability {
        outcomes.iter().map(|o| o.probability).sum()
    }
    /// Rewards compare by bit pattern; adding zero folds -0.0 into 0.0.
    fn key(&self) -> (StateId, u64, bool) {
        (self.next, (self.reward + 0.0).to_bits(), self.terminal)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.4} → {:>5} {:>+5.1}{}",
            self.probability,
            self.next,
            self.reward,
            if self.terminal { " ■" } else { "" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(probability: Probability, next: StateId, reward: Utility, terminal: bool) -> Outcome {
        Outcome {
            probability,
            next,
            reward,
            terminal,
        }
    }

    #[test]
    fn merge_sums_duplicates_in_order() {
        let merged = Outcome::merge([
            outcome(0.25, 7, 0.0, false),
            outcome(0.25, 3, 1.0, true),
            outcome(0.50, 7, 0.0, false),
        ]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0], outcome(0.75, 7, 0.0, false));
        assert_eq!(merged[1], outcome(0.25, 3, 1.0, true));
    }

    #[test]
    fn merge_keeps_distinct_rewards_apart() {
        let merged = Outcome::merge([
            outcome(0.5, 4, 1.0, true),
            outcome(0.5, 4, 0.0, true),
        ]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn merge_treats_signed_zero_rewards_alike() {
        let merged = Outcome::merge([
            outcome(0.5, 4, 0.0, false),
            outcome(0.5, 4, -0.0, false),
        ]);
        assert_eq!(merged.len(), 1);
        assert!((Outcome::mass(&merged) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn terminal_outcomes_do_not_bootstrap() {
        let ref values = Values::from(vec![10.0, 10.0]);
        assert_eq!(outcome(0.5, 1, 1.0, true).backup(0.9, values), 0.5);
        assert_eq!(outcome(0.5, 1, 1.0, false).backup(0.9, values), 0.5 * (1.0 + 9.0));
    }
}
