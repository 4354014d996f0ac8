//! In-place sweep.

use super::*;

/// Gauss–Seidel sweep.
///
/// Each new value is written immediately, so later states in the same
/// pass already read it. Usually converges in fewer passes than
/// [`Jacobi`], at the cost of depending on enumeration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussSeidel;

impl SweepScheme for GaussSeidel {
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
        let mut delta: Utility = 0.0;
        for &state in states {
            let policy = profile.policy(state);
            if policy.is_empty() {
                continue;
            }
            let update = policy_value(model, state, policy, values, discount);
            delta = delta.max(values.set(state, update));
        }
        delta
    }
}
