use crate::*;
use skirmish_core::*;

/// Outcome of one evaluation/improvement round.
///
/// `values` is the value function of the policy *before* improvement,
/// `changed` counts states whose greedy action moved.
#[derive(Debug, Clone)]
pub struct Step {
    pub values: Values,
    pub changed: usize,
}

/// Result of [`PolicyIteration::solve`].
///
/// - `profile` — deterministic policy for every decision state
/// - `values` — value function from the final evaluation
/// - `epochs` — evaluation/improvement rounds run
/// - `stable` — false if the round cap stopped the solver first
#[derive(Debug, Clone)]
pub struct Solution<E> {
    pub profile: Profile<E>,
    pub values: Values,
    pub epochs: usize,
    pub stable: bool,
}

impl<E> Solution<E>
where
    E: MdpEdge,
{
    /// Action distribution chosen at `state`.
    pub fn lookup(&self, state: StateId) -> &[(E, Probability)] {
        self.profile.policy(state)
    }
    /// Chosen action at `state`, if it has a decision.
    pub fn action(&self, state: StateId) -> Option<E> {
        self.profile.greedy(state)
    }
    pub fn value(&self, state: StateId) -> Utility {
        self.values.get(state)
    }
    /// Sparse `state → action` table over decision states.
    pub fn decisions(&self) -> impl Iterator<Item = (StateId, E)> + '_ {
        self.profile.decisions()
    }
}
