/// The two sides of a battle.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Side {
    Agent,
    Opponent,
}

impl Side {
    pub const fn other(&self) -> Self {
        match self {
            Self::Agent => Self::Opponent,
            Self::Opponent => Self::Agent,
        }
    }
}
