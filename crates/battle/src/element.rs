use skirmish_core::*;

/// Elemental type of a battler.
///
/// Advantage runs in a cycle: Fire beats Grass, Grass beats Water,
/// Water beats Fire. Discriminants are the codec digits.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Element {
    #[default]
    Fire = 0,
    Water = 1,
    Grass = 2,
}

impl Element {
    pub const fn all() -> [Self; N_ELEMENTS] {
        [Self::Fire, Self::Water, Self::Grass]
    }
    pub const fn beats(&self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Fire, Self::Grass) | (Self::Grass, Self::Water) | (Self::Water, Self::Fire)
        )
    }
    /// Damage multiplier for an attack from `self` into `defender`.
    pub const fn multiplier(&self, defender: Self) -> Health {
        if self.beats(defender) { ADVANTAGE } else { 1 }
    }
    pub fn sample<R: rand::Rng>(rng: &mut R) -> Self {
        Self::all()[rng.random_range(0..N_ELEMENTS)]
    }
}

impl TryFrom<u8> for Element {
    type Error = anyhow::Error;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Self::Fire),
            1 => Ok(Self::Water),
            2 => Ok(Self::Grass),
            n => Err(anyhow::anyhow!("element {} out of range 0..{}", n, N_ELEMENTS)),
        }
    }
}
impl From<Element> for u8 {
    fn from(element: Element) -> u8 {
        element as u8
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Fire => write!(f, "Fire"),
            Self::Water => write!(f, "Water"),
            Self::Grass => write!(f, "Grass"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advantage_is_a_cycle() {
        for attacker in Element::all() {
            let beaten = Element::all()
                .into_iter()
                .filter(|d| attacker.beats(*d))
                .collect::<Vec<_>>();
            assert_eq!(beaten.len(), 1);
            assert!(!beaten[0].beats(attacker));
            assert!(!attacker.beats(attacker));
        }
        assert_eq!(Element::Fire.multiplier(Element::Grass), 2);
        assert_eq!(Element::Grass.multiplier(Element::Fire), 1);
        assert_eq!(Element::Water.multiplier(Element::Water), 1);
    }

    #[test]
    fn rejects_unknown_digits() {
        assert_eq!(Element::try_from(2).ok(), Some(Element::Grass));
        assert!(Element::try_from(3).is_err());
    }
}
