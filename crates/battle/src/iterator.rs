use crate::*;
use skirmish_core::StateId;

/// Walks every battle in increasing id order, which is lexicographic over
/// the codec digits. Holds only a cursor, so a fresh iterator restarts
/// the enumeration.
#[derive(Debug, Default, Clone)]
pub struct BattleIterator {
    next: StateId,
}

impl Iterator for BattleIterator {
    type Item = Battle;
    fn next(&mut self) -> Option<Self::Item> {
        let battle = Battle::try_from(self.next).ok()?;
        self.next += 1;
        Some(battle)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = codec::num_states().saturating_sub(self.next);
        (n, Some(n))
    }
}

impl ExactSizeIterator for BattleIterator {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumeration_is_lexicographic() {
        let battles = Battle::all().collect::<Vec<_>>();
        assert_eq!(battles.len(), codec::num_states());
        assert!(battles.windows(2).all(|w| w[0].digits() < w[1].digits()));
        assert_eq!(battles[0].digits(), [0; 8]);
    }

    #[test]
    fn restarts() {
        let mut first = Battle::all();
        first.next();
        first.next();
        assert_eq!(first.len(), codec::num_states() - 2);
        assert_eq!(Battle::all().next(), Battle::try_from(0 as StateId).ok());
    }
}
