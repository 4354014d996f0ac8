//! Double-buffered sweep.

use super::*;

/// Jacobi sweep.
///
/// Every backup of a pass reads the previous pass's table and the updates
/// are committed together, so no state depends on another within a pass.
/// With the `server` feature the state loop runs on the rayon pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct Jacobi;

impl Jacobi {
    fn commit(values: &mut Values, updates: Vec<(StateId, Utility)>) -> Utility {
        updates
            .into_iter()
            .map(|(state, update)| values.set(state, update))
            .fold(0.0, Utility::max)
    }
}

impl SweepScheme for Jacobi {
    #[cfg(feature = "server")]
    fn sweep<M>(
        model: &M,
        states: &[StateId],
        profile: &Profile<M::E>,
        values: &mut Values,
        discount: Utility,
    ) -> Utility
    where
        M: Model,
    {
        use rayon::iter::IntoParallelRefIterator;
        use rayon::iter::ParallelIterator;
        let ref prior = values.clone();
        let updates = states
            .par_iter()
            .filter(|state| !profile.policy(**state).is_empty())
            .map(|&state| {
                let policy = profile.policy(state);
                (state, policy_value(model, state, policy, prior, discount))
            })
            .collect::<Vec<_>>();
        Self::commit(values, updates)
    }
    #[cfg(not(feature = "server"))]
    fn sweep<M>(
        model: &M,
        states: &[StateId],
        profile: &Profile<M::E>,
        values: &mut Values,
        discount: Utility,
    ) -> Utility
    where
        M: Model,
    {
        let ref prior = values.clone();
        let updates = states
            .iter()
            .filter(|state| !profile.policy(**state).is_empty())
            .map(|&state| {
                let policy = profile.policy(state);
                (state, policy_value(model, state, policy, prior, discount))
            })
            .collect::<Vec<_>>();
        Self::commit(values, updates)
    }
}
