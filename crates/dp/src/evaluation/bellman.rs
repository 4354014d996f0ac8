use crate::*;
use skirmish_core::*;

/// Action value `Q(s,a) = Σ p·(r + γ·V(s'))` under the current values.
pub fn action_value<M>(
    model: &M,
    state: StateId,
    edge: M::E,
    values: &Values,
    discount: Utility,
) -> Utility
where
    M: Model,
{
    model
        .transitions(state, edge)
        .map(|outcome| outcome.backup(discount, values))
        .sum()
}

/// Expected one-step backup `Σ_a π(s,a)·Q(s,a)` of a stochastic policy.
///
/// Entries with non-positive probability are skipped, so a zero weight
/// can never turn an unbounded action value into a NaN.
pub fn policy_value<M>(
    model: &M,
    state: StateId,
    policy: &[(M::E, Probability)],
    values: &Values,
    discount: Utility,
) -> Utility
where
    M: Model,
{
    policy
        .iter()
        .filter(|(_, p)| *p > 0.0)
        .map(|(edge, p)| p * action_value(model, state, *edge, values, discount))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values() -> Values {
        Values::from(vec![2.0, 0.0, 0.0])
    }

    #[test]
    fn action_value_bootstraps_through_tails() {
        let ref coin = Coin::default();
        let ref values = values();
        let q = action_value(coin, Coin::START, CoinEdge::Flip, values, DISCOUNT);
        let expected = 0.6 * Coin::HEADS + 0.4 * (Coin::TAILS + DISCOUNT * 2.0);
        assert!((q - expected).abs() < 1e-12);
    }

    #[test]
    fn zero_weight_entries_are_skipped() {
        let ref coin = Coin::default();
        let ref values = values();
        let flip = policy_value(coin, Coin::START, &[(CoinEdge::Flip, 1.0)], values, DISCOUNT);
        let padded = policy_value(
            coin,
            Coin::START,
            &[(CoinEdge::Stop, 0.0), (CoinEdge::Flip, 1.0)],
            values,
            DISCOUNT,
        );
        assert_ne!(flip, 0.0);
        assert_eq!(padded, flip);
    }

    #[test]
    fn negative_weight_entries_are_skipped() {
        let ref coin = Coin::default();
        let ref values = values();
        let flip = policy_value(coin, Coin::START, &[(CoinEdge::Flip, 1.0)], values, DISCOUNT);
        let skewed = policy_value(
            coin,
            Coin::START,
            &[(CoinEdge::Stop, -0.5), (CoinEdge::Flip, 1.0)],
            values,
            DISCOUNT,
        );
        assert_eq!(skewed, flip);
    }

    #[test]
    fn mixed_policies_weigh_action_values() {
        let ref coin = Coin::default();
        let ref values = values();
        let stop = action_value(coin, Coin::START, CoinEdge::Stop, values, DISCOUNT);
        let flip = action_value(coin, Coin::START, CoinEdge::Flip, values, DISCOUNT);
        let mixed = policy_value(
            coin,
            Coin::START,
            &[(CoinEdge::Stop, 0.7), (CoinEdge::Flip, 0.3)],
            values,
            DISCOUNT,
        );
        assert!((mixed - (0.7 * stop + 0.3 * flip)).abs() < 1e-12);
    }
}
