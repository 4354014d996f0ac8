use crate::*;
use skirmish_core::*;

/// The active battler and the one waiting on the bench.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Team {
    active: Mon,
    bench: Mon,
}

impl Team {
    pub const fn new(active: Mon, bench: Mon) -> Self {
        Self { active, bench }
    }
    pub const fn active(&self) -> Mon {
        self.active
    }
    pub const fn bench(&self) -> Mon {
        self.bench
    }
    /// Both battlers fainted.
    pub const fn is_defeated(&self) -> bool {
        self.active.is_fainted() && self.bench.is_fainted()
    }
    /// Switching needs a living battler on both slots.
    pub const fn can_switch(&self) -> bool {
        !self.active.is_fainted() && !self.bench.is_fainted()
    }
    /// Legal actions for this team, ignoring whether the battle is over.
    pub fn choices(&self) -> Vec<Action> {
        match self.can_switch() {
            true => vec![Action::Light, Action::Heavy, Action::Switch],
            false => vec![Action::Light, Action::Heavy],
        }
    }
    pub const fn switched(self) -> Self {
        Self {
            active: self.bench,
            bench: self.active,
        }
    }
    /// Takes `damage` on the active battler. If it faints and the bench is
    /// still standing, the bench comes in for free.
    pub const fn struck(self, damage: Health) -> Self {
        let hurt = Self {
            active: self.active.damaged(damage),
            bench: self.bench,
        };
        match hurt.active.is_fainted() && !hurt.bench.is_fainted() {
            true => hurt.switched(),
            false => hurt,
        }
    }
    pub fn sample<R: rand::Rng>(rng: &mut R) -> Self {
        Self::new(Mon::fresh(Element::sample(rng)), Mon::fresh(Element::sample(rng)))
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.active, self.bench)
    }
}
