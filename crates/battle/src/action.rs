use skirmish_core::*;
use skirmish_dp::MdpEdge;

/// What a side does on its turn.
///
/// Discriminants are the persisted action ids; declaration order is the
/// tie-break order during improvement.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Action {
    Light = 0,
    Heavy = 1,
    Switch = 2,
}

impl MdpEdge for Action {}

impl Action {
    pub const fn all() -> [Self; 3] {
        [Self::Light, Self::Heavy, Self::Switch]
    }
    /// Base power of an attacking move.
    pub const fn power(&self) -> Option<Health> {
        match self {
            Self::Light => Some(LIGHT_POWER),
            Self::Heavy => Some(HEAVY_POWER),
            Self::Switch => None,
        }
    }
    /// Moves can miss; switching always happens.
    pub const fn accuracy(&self, accuracy: Probability) -> Probability {
        match self {
            Self::Switch => 1.0,
            _ => accuracy,
        }
    }
}

impl TryFrom<u8> for Action {
    type Error = anyhow::Error;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Self::Light),
            1 => Ok(Self::Heavy),
            2 => Ok(Self::Switch),
            n => Err(anyhow::anyhow!("unknown action id {}", n)),
        }
    }
}
impl From<Action> for u8 {
    fn from(action: Action) -> u8 {
        action as u8
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Heavy => write!(f, "heavy"),
            Self::Switch => write!(f, "switch"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_stable() {
        for action in Action::all() {
            assert_eq!(Action::try_from(u8::from(action)).ok(), Some(action));
        }
        assert!(Action::try_from(3).is_err());
        assert_eq!(Action::Heavy.power(), Some(2));
        assert_eq!(Action::Switch.accuracy(0.9), 1.0);
    }
}
