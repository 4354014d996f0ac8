use crate::*;
use skirmish_core::StateId;

/// A [`Model`] memoised into dense tables indexed by state id and action.
///
/// Every `(state, action)` pair over the full action set is resolved once,
/// illegal actions included, so the table answers exactly what the source
/// model would. Policy evaluation revisits each pair thousands of times,
/// which makes the one-off cost negligible.
#[derive(Debug, Clone)]
pub struct Tabular<E> {
    actions: Vec<E>,
    choices: Vec<Vec<E>>,
    table: Vec<Vec<Vec<Outcome>>>,
}

impl<M> From<&M> for Tabular<M::E>
where
    M: Model,
{
    fn from(model: &M) -> Self {
        let actions = model.actions();
        let choices = (0..model.n())
            .map(|state| model.choices(state))
            .collect::<Vec<_>>();
        let table = (0..model.n())
            .map(|state| {
                actions
                    .iter()
                    .map(|edge| model.transitions(state, *edge).collect())
                    .collect()
            })
            .collect::<Vec<_>>();
        log::debug!(
            "tabulated {} states × {} actions ({} outcomes)",
            table.len(),
            actions.len(),
            table.iter().flatten().map(Vec::len).sum::<usize>()
        );
        Self {
            actions,
            choices,
            table,
        }
    }
}

impl<E> Model for Tabular<E>
where
    E: MdpEdge,
{
    type E = E;
    fn n(&self) -> usize {
        self.table.len()
    }
    fn actions(&self) -> Vec<Self::E> {
        self.actions.clone()
    }
    fn choices(&self, state: StateId) -> Vec<Self::E> {
        self.choices.get(state).cloned().unwrap_or_default()
    }
    /// Pairs the source model never saw fall back to an idle self-loop.
    fn transitions(&self, state: StateId, edge: Self::E) -> impl Iterator<Item = Outcome> {
        let row = self
            .actions
            .iter()
            .position(|a| *a == edge)
            .and_then(|i| self.table.get(state).and_then(|row| row.get(i)));
        let idle = row.is_none().then(|| Outcome::idle(state));
        row.into_iter().flatten().copied().chain(idle)
    }
}
