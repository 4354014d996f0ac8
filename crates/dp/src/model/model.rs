use crate::*;
use skirmish_core::StateId;

/// The explicit transition function of a finite MDP.
///
/// States are dense ids in `0..n()`. For every `(state, edge)` the model
/// returns the complete distribution over successors, so exact dynamic
/// programming never has to sample.
///
/// # Required Methods
///
/// - `n()` — Size of the state space
/// - `actions()` — Every edge the agent could ever take, in tie-break order
/// - `choices(state)` — Legal edges at `state`; empty means no decision
/// - `transitions(state, edge)` — Outcome distribution
///
/// # Totality
///
/// `transitions` must never fail. Terminal states return a single
/// absorbing outcome, and models decide for themselves how to answer an
/// edge outside `choices(state)`.
pub trait Model: Send + Sync {
    /// Action type for this model.
    type E: MdpEdge;

    /// Number of enumerated states.
    fn n(&self) -> usize;
    /// The full action set, in enumeration order.
    fn actions(&self) -> Vec<Self::E>;
    /// Legal actions at a state, in enumeration order.
    fn choices(&self, state: StateId) -> Vec<Self::E>;
    /// Distribution over `(next, reward, terminal)` after taking `edge`.
    fn transitions(&self, state: StateId, edge: Self::E) -> impl Iterator<Item = Outcome>;

    /// All state ids in enumeration order.
    fn states(&self) -> Vec<StateId> {
        (0..self.n()).collect()
    }
}
