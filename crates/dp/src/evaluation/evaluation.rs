use crate::*;
use skirmish_core::*;
use std::marker::PhantomData;

/// Iterative policy evaluation.
///
/// Repeats Bellman sweeps of scheme `S` from an all-zero table until the
/// largest per-sweep change drops below `tolerance`, or `iterations`
/// sweeps have run. Hitting the cap is not an error: with `discount < 1`
/// the backup is a contraction and the cap is only a safety net, so the
/// values reached so far are returned.
///
/// - `discount` — γ, defaults to [`DISCOUNT`]
/// - `tolerance` — τ, defaults to [`EVALUATION_TOLERANCE`]
/// - `iterations` — K, defaults to [`EVALUATION_ITERATIONS`]
#[derive(Debug, Clone, Copy)]
pub struct Evaluation<S> {
    discount: Utility,
    tolerance: Utility,
    iterations: usize,
    scheme: PhantomData<fn() -> S>,
}

impl<S> Default for Evaluation<S>
where
    S: SweepScheme,
{
    fn default() -> Self {
        Self {
            discount: DISCOUNT,
            tolerance: EVALUATION_TOLERANCE,
            iterations: EVALUATION_ITERATIONS,
            scheme: PhantomData,
        }
    }
}

impl<S> Evaluation<S>
where
    S: SweepScheme,
{
    pub fn with_discount(self, discount: Utility) -> Self {
        Self { discount, ..self }
    }
    pub fn with_tolerance(self, tolerance: Utility) -> Self {
        Self { tolerance, ..self }
    }
    pub fn with_iterations(self, iterations: usize) -> Self {
        Self { iterations, ..self }
    }
    pub fn discount(&self) -> Utility {
        self.discount
    }
    pub fn tolerance(&self) -> Utility {
        self.tolerance
    }
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Value function of `profile` over `states`.
    pub fn evaluate<M>(&self, model: &M, states: &[StateId], profile: &Profile<M::E>) -> Values
    where
        M: Model,
    {
        self.observe(model, states, profile, None)
    }

    /// [`Evaluation::evaluate`], reporting sweeps to `metrics`.
    pub fn observe<M>(
        &self,
        model: &M,
        states: &[StateId],
        profile: &Profile<M::E>,
        metrics: Option<&Metrics>,
    ) -> Values
    where
        M: Model,
    {
        let mut values = Values::zeros(model.n());
        let mut delta = Utility::INFINITY;
        for sweep in 1..=self.iterations {
            delta = S::sweep(model, states, profile, &mut values, self.discount);
            if let Some(metrics) = metrics {
                metrics.add_sweeps(1);
                metrics.add_backups(states.len());
                if let Some(line) = metrics.checkpoint() {
                    log::info!("{}", line);
                }
            }
            if delta < self.tolerance {
                log::debug!("evaluation converged after {} sweeps (Δ {:.2e})", sweep, delta);
                return values;
            }
        }
        log::warn!(
            "evaluation stopped at the {} sweep cap (Δ {:.2e} ≥ τ {:.2e})",
            self.iterations,
            delta,
            self.tolerance
        );
        values
    }

    /// Action value `Q(s,a)` under `values` with this discount.
    pub fn q<M>(&self, model: &M, state: StateId, edge: M::E, values: &Values) -> Utility
    where
        M: Model,
    {
        action_value(model, state, edge, values, self.discount)
    }
}
