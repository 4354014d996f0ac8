use crate::*;
use skirmish_core::*;

/// Full MDP state: both teams.
///
/// Every constructor validates its digits, so any `Battle` value encodes
/// to a valid [`StateId`]. Battles are `Copy` and every rule application
/// returns a new value.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Battle {
    agent: Team,
    opponent: Team,
}

impl Battle {
    pub const fn new(agent: Team, opponent: Team) -> Self {
        Self { agent, opponent }
    }
    /// Every battle in id order.
    pub fn all() -> BattleIterator {
        BattleIterator::default()
    }
    /// Random elements, everyone at full health.
    pub fn sample<R: rand::Rng>(rng: &mut R) -> Self {
        Self::new(Team::sample(rng), Team::sample(rng))
    }
    pub const fn team(&self, side: Side) -> Team {
        match side {
            Side::Agent => self.agent,
            Side::Opponent => self.opponent,
        }
    }
    pub const fn with(self, side: Side, team: Team) -> Self {
        match side {
            Side::Agent => Self { agent: team, ..self },
            Side::Opponent => Self { opponent: team, ..self },
        }
    }
    /// Either side has no battler left standing.
    pub const fn is_terminal(&self) -> bool {
        self.agent.is_defeated() || self.opponent.is_defeated()
    }
    /// +1 if only the opponent is defeated, −1 if only the agent is,
    /// 0 otherwise.
    pub const fn reward(&self) -> Utility {
        match (self.agent.is_defeated(), self.opponent.is_defeated()) {
            (false, true) => REWARD_WIN,
            (true, false) => REWARD_LOSS,
            _ => 0.0,
        }
    }
    /// Legal actions for `side`, in id order. Empty once the battle is over.
    pub fn choices(&self, side: Side) -> Vec<Action> {
        match self.is_terminal() {
            true => vec![],
            false => self.team(side).choices(),
        }
    }
    /// Applies one action by `side`. `hit` decides whether a move lands.
    ///
    /// A switch without two standing battlers, or a move from a fainted
    /// battler, leaves the battle as it was.
    pub fn act(self, side: Side, action: Action, hit: bool) -> Self {
        let attacker = self.team(side);
        let defender = self.team(side.other());
        match action.power() {
            None if attacker.can_switch() => self.with(side, attacker.switched()),
            None => self,
            Some(_) if attacker.active().is_fainted() => self,
            Some(power) => {
                let multiplier = attacker
                    .active()
                    .element()
                    .multiplier(defender.active().element());
                let damage = if hit { power * multiplier } else { 0 };
                self.with(side.other(), defender.struck(damage))
            }
        }
    }
    /// The eight codec digits.
    pub fn digits(&self) -> [u8; codec::N_DIGITS] {
        let ref a = self.agent;
        let ref o = self.opponent;
        [
            a.active().element().into(),
            a.active().hp(),
            a.bench().element().into(),
            a.bench().hp(),
            o.active().element().into(),
            o.active().hp(),
            o.bench().element().into(),
            o.bench().hp(),
        ]
    }
}

impl TryFrom<[u8; codec::N_DIGITS]> for Battle {
    type Error = anyhow::Error;
    fn try_from(d: [u8; codec::N_DIGITS]) -> Result<Self, Self::Error> {
        let mon = |e: u8, hp: Health| -> anyhow::Result<Mon> {
            Mon::try_from((Element::try_from(e)?, hp))
        };
        Ok(Self::new(
            Team::new(mon(d[0], d[1])?, mon(d[2], d[3])?),
            Team::new(mon(d[4], d[5])?, mon(d[6], d[7])?),
        ))
    }
}

impl TryFrom<StateId> for Battle {
    type Error = anyhow::Error;
    fn try_from(id: StateId) -> Result<Self, Self::Error> {
        Self::try_from(codec::decode(id)?)
    }
}

impl From<Battle> for StateId {
    fn from(battle: Battle) -> Self {
        codec::pack(battle.digits())
    }
}

impl Arbitrary for Battle {
    fn random() -> Self {
        Self::sample(&mut rand::rng())
    }
}

impl std::fmt::Display for Battle {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} vs {}", self.agent, self.opponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn battle(digits: [u8; 8]) -> Battle {
        Battle::try_from(digits).unwrap()
    }

    #[test]
    fn every_battle_round_trips() {
        for (id, battle) in Battle::all().enumerate() {
            assert_eq!(StateId::from(battle), id);
            assert_eq!(Battle::try_from(id).unwrap(), battle);
            assert_eq!(codec::encode(battle.digits()).unwrap(), id);
        }
    }

    #[test]
    fn construction_validates_fields() {
        let hp: [u8; 8] = [0, 2, 1, 2, 2, 3, 1, 2];
        let element: [u8; 8] = [3, 2, 1, 2, 2, 2, 1, 2];
        assert!(Battle::try_from(hp).is_err());
        assert!(Battle::try_from(element).is_err());
        assert!(Battle::try_from(codec::num_states()).is_err());
    }

    #[test]
    fn terminal_iff_a_side_is_wiped() {
        let running = battle([0, 0, 1, 1, 2, 2, 1, 0]);
        let won = battle([0, 1, 1, 0, 2, 0, 1, 0]);
        let lost = battle([0, 0, 1, 0, 2, 1, 1, 2]);
        let mutual = battle([0, 0, 1, 0, 2, 0, 1, 0]);
        assert!(!running.is_terminal());
        assert!(won.is_terminal() && lost.is_terminal() && mutual.is_terminal());
        assert_eq!(won.reward(), 1.0);
        assert_eq!(lost.reward(), -1.0);
        assert_eq!(mutual.reward(), 0.0);
        assert_eq!(running.reward(), 0.0);
    }

    #[test]
    fn legality() {
        let both = battle([0, 2, 1, 2, 2, 2, 1, 0]);
        assert_eq!(both.choices(Side::Agent), Action::all().to_vec());
        assert_eq!(both.choices(Side::Opponent), vec![Action::Light, Action::Heavy]);
        let fainted_active = battle([0, 0, 1, 2, 2, 2, 1, 2]);
        assert_eq!(fainted_active.choices(Side::Agent), vec![Action::Light, Action::Heavy]);
        let over = battle([0, 2, 1, 2, 2, 0, 1, 0]);
        assert!(over.choices(Side::Agent).is_empty());
        assert!(over.choices(Side::Opponent).is_empty());
    }

    #[test]
    fn super_effective_heavy_knocks_out() {
        // Fire heavy into Grass: 2 × 2 clamps at 0, Water bench comes in
        let before = battle([0, 2, 1, 2, 2, 2, 1, 2]);
        let after = before.act(Side::Agent, Action::Heavy, true);
        assert_eq!(after, battle([0, 2, 1, 2, 1, 2, 2, 0]));
        assert_eq!(before.act(Side::Agent, Action::Heavy, false), before);
    }

    #[test]
    fn fainted_attacker_does_nothing() {
        let before = battle([0, 0, 1, 2, 2, 2, 1, 2]);
        assert_eq!(before.act(Side::Agent, Action::Light, true), before);
        assert_eq!(before.act(Side::Agent, Action::Switch, true), before);
    }

    #[test]
    fn sampled_battles_start_full() {
        let battle = Battle::random();
        for side in [Side::Agent, Side::Opponent] {
            assert_eq!(battle.team(side).active().hp(), MAX_HEALTH);
            assert_eq!(battle.team(side).bench().hp(), MAX_HEALTH);
        }
    }
}
