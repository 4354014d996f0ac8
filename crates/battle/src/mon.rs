use crate::*;
use skirmish_core::*;

/// One battler: an element and an HP bin in `0..=MAX_HEALTH`.
/// HP 0 means fainted.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Mon {
    element: Element,
    hp: Health,
}

impl Mon {
    /// A full-health battler.
    pub const fn fresh(element: Element) -> Self {
        Self {
            element,
            hp: MAX_HEALTH,
        }
    }
    pub const fn element(&self) -> Element {
        self.element
    }
    pub const fn hp(&self) -> Health {
        self.hp
    }
    pub const fn is_fainted(&self) -> bool {
        self.hp == 0
    }
    /// HP never drops below zero.
    pub const fn damaged(self, damage: Health) -> Self {
        Self {
            element: self.element,
            hp: self.hp.saturating_sub(damage),
        }
    }
}

impl TryFrom<(Element, Health)> for Mon {
    type Error = anyhow::Error;
    fn try_from((element, hp): (Element, Health)) -> Result<Self, Self::Error> {
        match hp {
            hp if hp <= MAX_HEALTH => Ok(Self { element, hp }),
            hp => Err(anyhow::anyhow!("hp {} out of range 0..{}", hp, N_HEALTH)),
        }
    }
}

impl std::fmt::Display for Mon {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}:{}", self.element, self.hp)
    }
}
