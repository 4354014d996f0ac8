use crate::*;
use skirmish_core::*;

/// A policy for every enumerated state, stored densely by state id.
///
/// An empty entry means there is no decision to make (terminal or
/// unreachable state). Such states contribute nothing to evaluation and
/// are skipped by improvement. Ids beyond the table read as empty too.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile<E>(Vec<Policy<E>>);

impl<E> Profile<E>
where
    E: MdpEdge,
{
    /// Uniform distribution over the legal actions of each listed state.
    pub fn uniform<M>(model: &M, states: &[StateId]) -> Self
    where
        M: Model<E = E>,
    {
        let mut table = vec![Policy::new(); model.n()];
        for &state in states.iter().filter(|s| **s < model.n()) {
            let choices = model.choices(state);
            let weight = 1.0 / choices.len().max(1) as Probability;
            table[state] = choices.into_iter().map(|e| (e, weight)).collect();
        }
        Self(table)
    }
    /// Number of states covered, decisions or not.
    pub fn n(&self) -> usize {
        self.0.len()
    }
    /// Action distribution at `state`.
    pub fn policy(&self, state: StateId) -> &[(E, Probability)] {
        self.0.get(state).map(Vec::as_slice).unwrap_or_default()
    }
    /// Replaces the distribution at `state`. Ids beyond the table are ignored.
    pub fn set(&mut self, state: StateId, policy: Policy<E>) {
        if let Some(slot) = self.0.get_mut(state) {
            *slot = policy;
        }
    }
    /// Replaces the distribution at `state` with a deterministic choice.
    pub fn decide(&mut self, state: StateId, edge: E) {
        self.set(state, vec![(edge, 1.0)]);
    }
    /// Most probable action at `state`, earliest edge on ties.
    pub fn greedy(&self, state: StateId) -> Option<E> {
        self.policy(state)
            .iter()
            .fold(None, |best: Option<(E, Probability)>, &(e, p)| match best {
                Some((_, b)) if b >= p => best,
                _ => Some((e, p)),
            })
            .map(|(e, _)| e)
    }
    /// Sparse deterministic view: the most probable action of every state
    /// that has a decision.
    pub fn decisions(&self) -> impl Iterator<Item = (StateId, E)> + '_ {
        (0..self.n()).filter_map(|state| self.greedy(state).map(|e| (state, e)))
    }
}

impl<E> From<Vec<Policy<E>>> for Profile<E> {
    fn from(table: Vec<Policy<E>>) -> Self {
        Self(table)
    }
}
