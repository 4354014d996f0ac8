use skirmish_core::*;

/// State-value function over the full enumerated state space.
///
/// Dense and indexed by [`StateId`]. Ids outside the table read as zero,
/// the same value unreachable and terminal states hold.
#[derive(Debug, Clone, PartialEq)]
pub struct Values(Vec<Utility>);

impl Values {
    /// All-zero table for `n` states.
    pub fn zeros(n: usize) -> Self {
        Self(vec![0.0; n])
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn get(&self, state: StateId) -> Utility {
        self.0.get(state).copied().unwrap_or_default()
    }
    pub fn as_slice(&self) -> &[Utility] {
        &self.0
    }
    pub fn iter(&self) -> impl Iterator<Item = (StateId, Utility)> + '_ {
        self.0.iter().copied().enumerate()
    }
    /// Largest absolute difference between two tables (sup norm).
    pub fn distance(&self, other: &Self) -> Utility {
        (0..self.len().max(other.len()))
            .map(|s| (self.get(s) - other.get(s)).abs())
            .fold(0.0, Utility::max)
    }
    /// Writes one entry, returning the absolute change.
    pub(crate) fn set(&mut self, state: StateId, value: Utility) -> Utility {
        match self.0.get_mut(state) {
            Some(slot) => {
                let delta = (value - *slot).abs();
                *slot = value;
                delta
            }
            None => 0.0,
        }
    }
}

impl From<Vec<Utility>> for Values {
    fn from(values: Vec<Utility>) -> Self {
        Self(values)
    }
}
impl From<Values> for Vec<Utility> {
    fn from(values: Values) -> Self {
        values.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_states_read_as_zero() {
        let values = Values::from(vec![1.0, -2.0]);
        assert_eq!(values.get(1), -2.0);
        assert_eq!(values.get(5), 0.0);
    }

    #[test]
    fn set_reports_change() {
        let mut values = Values::zeros(2);
        assert_eq!(values.set(1, -0.5), 0.5);
        assert_eq!(values.set(1, 0.25), 0.75);
        assert_eq!(values.set(9, 1.0), 0.0);
        assert_eq!(values.as_slice(), &[0.0, 0.25]);
    }

    #[test]
    fn distance_is_sup_norm() {
        let a = Values::from(vec![0.0, 1.0, 2.0]);
        let b = Values::from(vec![0.5, 1.0, -1.0]);
        assert_eq!(a.distance(&b), 3.0);
        assert_eq!(b.distance(&a), 3.0);
    }
}
