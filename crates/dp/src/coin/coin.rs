use crate::*;
use skirmish_core::*;

/// A three-state gamble with known optimal play.
///
/// From [`Coin::START`] the agent either stops and banks `STOP` for sure,
/// or flips a coin that lands heads with probability `bias`. Heads wins
/// `HEADS` and ends the game. Tails costs `TAILS` and returns to the
/// start. Both other states are terminal.
///
/// Under always-flip the start value solves
/// `V = bias·HEADS + (1-bias)·(TAILS + γV)`, so flipping beats stopping
/// exactly when that fixed point exceeds `STOP`.
#[derive(Debug, Clone, Copy)]
pub struct Coin {
    bias: Probability,
}

impl Coin {
    pub const START: StateId = 0;
    pub const BANKED: StateId = 1;
    pub const WON: StateId = 2;

    pub const STOP: Utility = 0.5;
    pub const HEADS: Utility = 1.0;
    pub const TAILS: Utility = -0.1;

    pub fn with_bias(bias: Probability) -> Self {
        Self {
            bias: bias.clamp(0.0, 1.0),
        }
    }
    pub fn bias(&self) -> Probability {
        self.bias
    }
}

impl Default for Coin {
    fn default() -> Self {
        Self::with_bias(0.6)
    }
}

impl Model for Coin {
    type E = CoinEdge;
    fn n(&self) -> usize {
        3
    }
    fn actions(&self) -> Vec<Self::E> {
        vec![CoinEdge::Stop, CoinEdge::Flip]
    }
    fn choices(&self, state: StateId) -> Vec<Self::E> {
        match state {
            Self::START => self.actions(),
            _ => vec![],
        }
    }
    fn transitions(&self, state: StateId, edge: Self::E) -> impl Iterator<Item = Outcome> {
        let outcomes = match (state, edge) {
            (Self::START, CoinEdge::Stop) => vec![Outcome {
                probability: 1.0,
                next: Self::BANKED,
                reward: Self::STOP,
                terminal: true,
            }],
            (Self::START, CoinEdge::Flip) => vec![
                Outcome {
                    probability: self.bias,
                    next: Self::WON,
                    reward: Self::HEADS,
                    terminal: true,
                },
                Outcome {
                    probability: 1.0 - self.bias,
                    next: Self::START,
                    reward: Self::TAILS,
                    terminal: false,
                },
            ],
            (Self::BANKED | Self::WON, _) => vec![Outcome::absorbing(state)],
            _ => vec![Outcome::idle(state)],
        };
        outcomes.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: Utility = 1e-8;

    /// Start value when stopping with probability `stop`, flipping otherwise.
    fn mixed(bias: Probability, stop: Probability) -> Utility {
        let flip = bias * Coin::HEADS + (1.0 - bias) * Coin::TAILS;
        (stop * Coin::STOP + (1.0 - stop) * flip) / (1.0 - (1.0 - stop) * (1.0 - bias) * DISCOUNT)
    }
    /// Start value when stopping and flipping are equally likely.
    fn uniform(bias: Probability) -> Utility {
        mixed(bias, 0.5)
    }
    /// Start value when always flipping.
    fn flipping(bias: Probability) -> Utility {
        let flip = bias * Coin::HEADS + (1.0 - bias) * Coin::TAILS;
        flip / (1.0 - (1.0 - bias) * DISCOUNT)
    }

    #[test]
    fn distributions_are_normalized() {
        let ref coin = Coin::default();
        for state in coin.states() {
            for edge in coin.actions() {
                let outcomes = coin.transitions(state, edge).collect::<Vec<_>>();
                assert!((Outcome::mass(&outcomes) - 1.0).abs() < PROBABILITY_TOLERANCE);
            }
        }
    }

    #[test]
    fn terminal_states_absorb() {
        let ref coin = Coin::default();
        for state in [Coin::BANKED, Coin::WON] {
            assert!(coin.choices(state).is_empty());
            let outcomes = coin.transitions(state, CoinEdge::Flip).collect::<Vec<_>>();
            assert_eq!(outcomes, vec![Outcome::absorbing(state)]);
        }
    }

    macro_rules! coin {
        ($S:ident) => {
            paste::paste! {
                #[test]
                fn [<$S:snake _evaluates_uniform_policy>]() {
                    let ref coin = Coin::default();
                    let ref states = coin.states();
                    let ref profile = Profile::uniform(coin, states);
                    let values = Evaluation::<$S>::default().evaluate(coin, states, profile);
                    let v = values.get(Coin::START);
                    assert!((v - uniform(0.6)).abs() < EPSILON, "{:.10} ≠ {:.10}", v, uniform(0.6));
                    assert_eq!(values.get(Coin::BANKED), 0.0);
                    assert_eq!(values.get(Coin::WON), 0.0);
                }

                #[test]
                fn [<$S:snake _evaluates_stochastic_policy>]() {
                    let ref coin = Coin::default();
                    let ref states = coin.states();
                    let ref profile = Profile::from(vec![
                        vec![(CoinEdge::Stop, 0.7), (CoinEdge::Flip, 0.3)],
                        vec![],
                        vec![],
                    ]);
                    let values = Evaluation::<$S>::default().evaluate(coin, states, profile);
                    let v = values.get(Coin::START);
                    assert!((v - mixed(0.6, 0.7)).abs() < EPSILON, "{:.10} ≠ {:.10}", v, mixed(0.6, 0.7));
                }

                #[test]
                fn [<$S:snake _ignores_zero_weight_entries>]() {
                    let ref coin = Coin::default();
                    let ref states = coin.states();
                    let mut profile = Profile::uniform(coin, states);
                    profile.set(Coin::START, vec![(CoinEdge::Stop, 0.0), (CoinEdge::Flip, 1.0)]);
                    let values = Evaluation::<$S>::default().evaluate(coin, states, &profile);
                    assert!((values.get(Coin::START) - mixed(0.6, 0.0)).abs() < EPSILON);
                    assert!((mixed(0.6, 0.0) - flipping(0.6)).abs() < 1e-12);
                }

                #[test]
                fn [<$S:snake _prefers_flipping_a_favourable_coin>]() {
                    let ref coin = Coin::default();
                    let solution = PolicyIteration::<$S>::default().solve(coin, &coin.states());
                    assert!(solution.stable);
                    assert_eq!(solution.epochs, 2);
                    assert_eq!(solution.action(Coin::START), Some(CoinEdge::Flip));
                    assert_eq!(solution.lookup(Coin::START), &[(CoinEdge::Flip, 1.0)]);
                    assert!((solution.value(Coin::START) - flipping(0.6)).abs() < EPSILON);
                }

                #[test]
                fn [<$S:snake _stops_on_an_unfavourable_coin>]() {
                    let ref coin = Coin::with_bias(0.1);
                    let solution = PolicyIteration::<$S>::default().solve(coin, &coin.states());
                    assert!(solution.stable);
                    assert_eq!(solution.epochs, 1);
                    assert_eq!(solution.action(Coin::START), Some(CoinEdge::Stop));
                    // the first round already agreed with the uniform
                    // policy's tie-break, so values are still the uniform ones
                    assert!((solution.value(Coin::START) - uniform(0.1)).abs() < EPSILON);
                }
            }
        };
    }

    coin!(GaussSeidel);
    coin!(Jacobi);

    #[test]
    fn improvement_never_lowers_values() {
        let ref coin = Coin::with_bias(0.35);
        let ref states = coin.states();
        let solver = PolicyIteration::<GaussSeidel>::default();
        let mut profile = Profile::uniform(coin, states);
        let before = solver.step(coin, states, &mut profile).values;
        let after = solver.evaluation().evaluate(coin, states, &profile);
        for state in coin.states() {
            assert!(after.get(state) >= before.get(state) - EPSILON);
        }
        assert_eq!(solver.metrics().epoch(), 1);
    }

    #[test]
    fn round_cap_reports_unstable() {
        let ref coin = Coin::default();
        let solution = PolicyIteration::<GaussSeidel>::default()
            .with_iterations(1)
            .solve(coin, &coin.states());
        assert!(!solution.stable);
        assert_eq!(solution.epochs, 1);
        assert_eq!(solution.action(Coin::START), Some(CoinEdge::Flip));
    }

    #[test]
    fn evaluation_cap_returns_partial_values() {
        let ref coin = Coin::default();
        let ref states = coin.states();
        let ref profile = Profile::uniform(coin, states);
        let values = Evaluation::<GaussSeidel>::default()
            .with_iterations(1)
            .evaluate(coin, states, profile);
        // one sweep from zero: 0.5·STOP + 0.5·(bias·HEADS + (1-bias)·TAILS)
        assert!((values.get(Coin::START) - (0.25 + 0.5 * 0.56)).abs() < EPSILON);
    }

    #[test]
    fn tabulated_solution_matches_direct() {
        let ref coin = Coin::with_bias(0.45);
        let ref table = Tabular::from(coin);
        let direct = PolicyIteration::<Jacobi>::default().solve(coin, &coin.states());
        let cached = PolicyIteration::<Jacobi>::default().solve(table, &table.states());
        assert_eq!(direct.profile, cached.profile);
        assert!(direct.values.distance(&cached.values) < EPSILON);
    }
}
