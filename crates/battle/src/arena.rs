use crate::*;
use skirmish_core::*;
use skirmish_dp::*;

/// The battle's transition model.
///
/// One MDP step is a full round: the agent acts, then, if the battle is
/// still running, the injected [`Opponent`] responds. Moves land with
/// probability `accuracy` and otherwise deal nothing; switches always
/// happen. Each agent branch × opponent reply × opponent branch becomes
/// one outcome, and outcomes landing on the same `(next, reward, terminal)`
/// are merged.
///
/// The model is total. Terminal states absorb, and an action the agent
/// may not take leaves the state as it is with no reward.
#[derive(Debug, Clone)]
pub struct Arena<O> {
    opponent: O,
    accuracy: Probability,
}

impl Default for Arena<Uniform> {
    fn default() -> Self {
        Self::new(Uniform)
    }
}

impl<O> Arena<O>
where
    O: Opponent,
{
    pub fn new(opponent: O) -> Self {
        Self {
            opponent,
            accuracy: ACCURACY,
        }
    }
    /// Overrides the hit chance. Must lie in `[0, 1]`.
    pub fn with_accuracy(self, accuracy: Probability) -> anyhow::Result<Self> {
        anyhow::ensure!(
            (0.0..=1.0).contains(&accuracy),
            "accuracy {} outside [0, 1]",
            accuracy
        );
        Ok(Self { accuracy, ..self })
    }
    pub fn opponent(&self) -> &O {
        &self.opponent
    }
    pub fn accuracy(&self) -> Probability {
        self.accuracy
    }

    /// One side's half of a round: hit and miss branches of `action`,
    /// zero-probability branches dropped.
    pub fn phase(&self, battle: &Battle, side: Side, action: Action) -> Vec<(Probability, Battle)> {
        let hit = action.accuracy(self.accuracy);
        [(hit, true), (1.0 - hit, false)]
            .into_iter()
            .filter(|(p, _)| *p > 0.0)
            .map(|(p, landed)| (p, battle.act(side, action, landed)))
            .collect()
    }

    /// Full round from a running battle. Legality is not checked here.
    pub fn simulate(&self, battle: Battle, action: Action) -> Vec<Outcome> {
        let mut outcomes = Vec::new();
        for (p, after) in self.phase(&battle, Side::Agent, action) {
            if after.is_terminal() {
                outcomes.push(Self::outcome(p, after));
                continue;
            }
            let response = self
                .opponent
                .respond(&after)
                .into_iter()
                .filter(|(_, q)| *q > 0.0)
                .collect::<Vec<_>>();
            if response.is_empty() {
                outcomes.push(Self::outcome(p, after));
                continue;
            }
            for (reply, q) in response {
                for (r, end) in self.phase(&after, Side::Opponent, reply) {
                    outcomes.push(Self::outcome(p * q * r, end));
                }
            }
        }
        Outcome::merge(outcomes)
    }

    /// Memoises the model and runs policy iteration over every state.
    pub fn solve<S>(&self, solver: &PolicyIteration<S>) -> Solution<Action>
    where
        S: SweepScheme,
    {
        let ref table = Tabular::from(self);
        log::info!("solving {} battle states", table.n());
        solver.solve(table, &table.states())
    }

    fn outcome(probability: Probability, battle: Battle) -> Outcome {
        Outcome {
            probability,
            next: StateId::from(battle),
            reward: battle.reward(),
            terminal: battle.is_terminal(),
        }
    }
}

impl<O> Model for Arena<O>
where
    O: Opponent,
{
    type E = Action;
    fn n(&self) -> usize {
        codec::num_states()
    }
    fn actions(&self) -> Vec<Self::E> {
        Action::all().to_vec()
    }
    fn choices(&self, state: StateId) -> Vec<Self::E> {
        Battle::try_from(state)
            .map(|battle| battle.choices(Side::Agent))
            .unwrap_or_default()
    }
    fn transitions(&self, state: StateId, edge: Self::E) -> impl Iterator<Item = Outcome> {
        let outcomes = match Battle::try_from(state) {
            Err(e) => {
                log::warn!("idling on {}: {}", state, e);
                vec![Outcome::idle(state)]
            }
            Ok(battle) if battle.is_terminal() => vec![Outcome::absorbing(state)],
            Ok(battle) if !battle.choices(Side::Agent).contains(&edge) => {
                vec![Outcome::idle(state)]
            }
            Ok(battle) => self.simulate(battle, edge),
        };
        outcomes.into_iter()
    }
}
