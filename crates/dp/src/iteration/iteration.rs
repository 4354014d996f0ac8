use crate::*;
use skirmish_core::*;

/// Policy iteration over a finite [`Model`].
///
/// Starts from the uniform policy over legal actions, then alternates:
/// 1. evaluate the current profile with [`Evaluation`]
/// 2. at every decision state, pick `argmax_a Q(s,a)` under those values,
///    breaking ties by the earliest action in `choices(state)`
/// 3. make the profile deterministic on that action
///
/// and stops at the first round in which no state's greedy action differs
/// from its previous most-probable action. By the policy improvement
/// theorem each round never lowers any state's value, and the policy
/// space is finite, so the loop terminates. `iterations` is a safety cap.
#[derive(Debug)]
pub struct PolicyIteration<S> {
    evaluation: Evaluation<S>,
    iterations: usize,
    metrics: Metrics,
}

impl<S> Default for PolicyIteration<S>
where
    S: SweepScheme,
{
    fn default() -> Self {
        Self {
            evaluation: Evaluation::default(),
            iterations: IMPROVEMENT_ITERATIONS,
            metrics: Metrics::default(),
        }
    }
}

impl<S> PolicyIteration<S>
where
    S: SweepScheme,
{
    pub fn with_evaluation(self, evaluation: Evaluation<S>) -> Self {
        Self { evaluation, ..self }
    }
    pub fn with_iterations(self, iterations: usize) -> Self {
        Self { iterations, ..self }
    }
    pub fn evaluation(&self) -> &Evaluation<S> {
        &self.evaluation
    }
    pub fn iterations(&self) -> usize {
        self.iterations
    }
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Runs rounds until the policy is stable or the cap is reached.
    pub fn solve<M>(&self, model: &M, states: &[StateId]) -> Solution<M::E>
    where
        M: Model,
    {
        let mut profile = Profile::uniform(model, states);
        let mut values = Values::zeros(model.n());
        for epoch in 1..=self.iterations {
            let step = self.step(model, states, &mut profile);
            values = step.values;
            if step.changed == 0 {
                log::info!("policy stable after {} epochs", epoch);
                return Solution {
                    profile,
                    values,
                    epochs: epoch,
                    stable: true,
                };
            }
        }
        log::warn!("policy still changing after the {} epoch cap", self.iterations);
        Solution {
            profile,
            values,
            epochs: self.iterations,
            stable: false,
        }
    }

    /// One round: evaluate `profile`, then improve it in place.
    pub fn step<M>(&self, model: &M, states: &[StateId], profile: &mut Profile<M::E>) -> Step
    where
        M: Model,
    {
        let values = self
            .evaluation
            .observe(model, states, profile, Some(&self.metrics));
        let changed = self.improve(model, states, profile, &values);
        self.metrics.inc_epoch();
        log::info!("{}changed {}", self.metrics.format(), changed);
        Step { values, changed }
    }

    /// Greedy improvement against `values`. Returns how many states'
    /// most-probable action changed.
    pub fn improve<M>(
        &self,
        model: &M,
        states: &[StateId],
        profile: &mut Profile<M::E>,
        values: &Values,
    ) -> usize
    where
        M: Model,
    {
        let mut changed = 0;
        for &state in states {
            let ref choices = model.choices(state);
            let Some((best, _)) = self.greedy(model, state, choices, values) else {
                continue;
            };
            let prior = profile.greedy(state).or_else(|| choices.first().copied());
            profile.decide(state, best);
            if prior != Some(best) {
                changed += 1;
            }
        }
        changed
    }

    /// Best action among `choices` and its value. The first maximum wins.
    pub fn greedy<M>(
        &self,
        model: &M,
        state: StateId,
        choices: &[M::E],
        values: &Values,
    ) -> Option<(M::E, Utility)>
    where
        M: Model,
    {
        choices
            .iter()
            .map(|&edge| (edge, self.evaluation.q(model, state, edge, values)))
            .fold(None, |best, (edge, q)| match best {
                Some((_, b)) if b >= q => best,
                _ => Some((edge, q)),
            })
    }
}
